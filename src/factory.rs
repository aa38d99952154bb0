//! Dialect selection and the cached best-available default.

use std::borrow::Cow;
use std::sync::LazyLock;

use tracing::warn;

use crate::catalog::DocketType;
use crate::docket::{Docket, DocumentationType};
use crate::library::{DocketLibrary, LibraryError, Linked};

/// The tag this factory version would prefer to serve.
const PREFERRED: DocumentationType = DocumentationType::Oas30;

/// Known to be defined in every generator build this crate supports.
const FALLBACK: DocumentationType = DocumentationType::Swagger2;

static LATEST: LazyLock<Docket> = LazyLock::new(|| match bootstrap(&Linked) {
    Ok(docket) => docket,
    // Only MissingTag has a safe substitute; anything else is fatal.
    Err(err) => panic!("cannot construct any documentation builder: {err}"),
});

/// A pre-built docket for the best specification dialect available in the
/// linked generator build.
///
/// Computed once, on first access, before any caller can observe it; the
/// reference never changes for the lifetime of the process. When the
/// preferred tag is missing from the linked build this is a
/// [`Swagger2`](DocumentationType::Swagger2) docket instead, announced by a
/// single startup warning.
pub fn latest() -> &'static Docket {
    &LATEST
}

/// Construct the best-available docket from `library`, degrading to
/// [`FALLBACK`] when the preferred tag is not defined there.
///
/// Failures other than a missing tag propagate to the caller.
fn bootstrap(library: &impl DocketLibrary) -> Result<Docket, LibraryError> {
    match library.new_docket(PREFERRED) {
        Ok(docket) => Ok(docket),
        Err(LibraryError::MissingTag { .. }) => {
            warn!(
                version = FALLBACK.version(),
                "the latest documentation type could not be found in the linked \
                 generator build, using the default"
            );
            library.new_docket(FALLBACK)
        }
        Err(err) => Err(err),
    }
}

/// Select a docket for `which`.
///
/// [`DocketType::Swagger1`], [`DocketType::Swagger2`] and
/// [`DocketType::SpringWeb`] yield a fresh owned builder on every call.
/// [`DocketType::Oas3`] and [`DocketType::Default`] both borrow the one
/// cached [`latest`] instance; call
/// [`into_owned`](Cow::into_owned) to configure your own copy of it.
///
/// Every entry maps to `Some`. `None` is a defensive default for a
/// construction failure the linked build cannot produce.
pub fn of(which: DocketType) -> Option<Cow<'static, Docket>> {
    match which {
        DocketType::Swagger1 => fresh(DocumentationType::Swagger12),
        DocketType::Swagger2 => fresh(DocumentationType::Swagger2),
        DocketType::Oas3 | DocketType::Default => Some(Cow::Borrowed(latest())),
        DocketType::SpringWeb => fresh(DocumentationType::SpringWeb),
    }
}

fn fresh(tag: DocumentationType) -> Option<Cow<'static, Docket>> {
    Linked.new_docket(tag).ok().map(Cow::Owned)
}
