//! Adapter seam over the generator's constructor.
//!
//! The factory never calls `Docket::new` directly; it goes through
//! [`DocketLibrary`] so the selection and fallback logic can be exercised
//! against a build that is missing a tag, without the real generator present.

use thiserror::Error;

use crate::docket::{Docket, DocumentationType};

#[derive(Debug, Error)]
pub enum LibraryError {
    /// The generator build loaded into this process does not define `tag`.
    /// Recoverable at startup by substituting an older tag.
    #[error("documentation type {tag:?} is not defined by the linked generator build")]
    MissingTag { tag: DocumentationType },

    /// Any other constructor failure. No safe substitute is known for these.
    #[error("docket construction failed")]
    Construction(#[from] anyhow::Error),
}

/// A loaded build of the documentation generator.
pub trait DocketLibrary {
    /// Construct a builder wrapping `tag`, failing with
    /// [`LibraryError::MissingTag`] when this build does not define it.
    fn new_docket(&self, tag: DocumentationType) -> Result<Docket, LibraryError>;
}

/// The generator build this crate was compiled against.
///
/// Whether [`DocumentationType::Oas30`] is defined follows the `oas30` cargo
/// feature, the way the original generator's newest tag may be absent from an
/// older release on the load path.
pub struct Linked;

impl DocketLibrary for Linked {
    fn new_docket(&self, tag: DocumentationType) -> Result<Docket, LibraryError> {
        #[cfg(not(feature = "oas30"))]
        if tag == DocumentationType::Oas30 {
            return Err(LibraryError::MissingTag { tag });
        }

        Ok(Docket::new(tag))
    }
}

#[cfg(test)]
mod tests {
    use super::{DocketLibrary, Linked};
    use crate::docket::DocumentationType;
    use pretty_assertions::assert_eq;

    #[test]
    fn linked_build_constructs_every_stable_tag() {
        for tag in [
            DocumentationType::Swagger12,
            DocumentationType::Swagger2,
            DocumentationType::SpringWeb,
        ] {
            let docket = Linked.new_docket(tag).unwrap();
            assert_eq!(docket.documentation_type(), tag);
        }
    }

    #[cfg(feature = "oas30")]
    #[test]
    fn linked_build_defines_oas30() {
        let docket = Linked.new_docket(DocumentationType::Oas30).unwrap();
        assert_eq!(docket.version(), "3.0");
    }

    #[cfg(not(feature = "oas30"))]
    #[test]
    fn older_build_reports_oas30_missing() {
        use super::LibraryError;

        let err = Linked.new_docket(DocumentationType::Oas30).unwrap_err();
        assert!(matches!(
            err,
            LibraryError::MissingTag {
                tag: DocumentationType::Oas30
            }
        ));
    }
}
