//! The closed set of dialect choices this crate knows how to serve.
//!
//! Each entry corresponds to one of the generator's supported
//! [`DocumentationType`](crate::docket::DocumentationType)s and carries the
//! version string shown in diagnostics.

/// One supported documentation-specification dialect.
///
/// The set is closed: [`of`](crate::factory::of) is total over these entries
/// and there is no sentinel "invalid" value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocketType {
    /// Swagger 1.2.
    Swagger1,
    /// Swagger 2.0.
    Swagger2,
    /// OpenAPI 3.0, the preferred dialect.
    Oas3,
    /// The generator's Spring-Web-native description format.
    #[deprecated(note = "legacy dialect kept for older generator builds")]
    SpringWeb,
    /// Whatever the generator currently calls latest.
    Default,
}

impl DocketType {
    /// Display version string for this entry.
    pub fn version(&self) -> &'static str {
        match self {
            DocketType::Swagger1 => "1.2",
            DocketType::Swagger2 => "2.0",
            DocketType::Oas3 => "3.0",
            DocketType::SpringWeb => "5.2",
            DocketType::Default => "3.0",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DocketType;
    use pretty_assertions::assert_eq;

    #[test]
    fn version_strings() {
        assert_eq!(DocketType::Swagger1.version(), "1.2");
        assert_eq!(DocketType::Swagger2.version(), "2.0");
        assert_eq!(DocketType::Oas3.version(), "3.0");
        assert_eq!(DocketType::SpringWeb.version(), "5.2");
        assert_eq!(DocketType::Default.version(), "3.0");
    }
}
