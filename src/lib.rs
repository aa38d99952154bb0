//! Pre-configured documentation-generator builders ("dockets"), selected by
//! specification dialect.
//!
//! Construction of a [`Docket`] is centralized here so that downstream code
//! never touches the generator's version-tag constants directly: ask [`of`]
//! for the dialect you want, or take [`latest`], the best dialect available
//! in the generator build this crate was linked against.
//!
//! ```
//! use docket_factory::{of, DocketType};
//!
//! let docket = of(DocketType::Swagger2)
//!     .expect("defined dialect")
//!     .into_owned()
//!     .group_name("petstore");
//! assert_eq!(docket.version(), "2.0");
//! ```
//!
//! [`DocketType::Oas3`] and [`DocketType::Default`] both resolve to the one
//! cached [`latest`] builder rather than a fresh instance; see [`of`].

pub mod catalog;
pub mod docket;
pub mod factory;
pub mod library;

pub use catalog::DocketType;
pub use docket::{ApiInfo, Docket, DocumentationType};
pub use factory::{latest, of};
pub use library::{DocketLibrary, LibraryError, Linked};
