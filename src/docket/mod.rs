//! The generator's builder surface, as this crate sees it.
//!
//! [`Docket`] is the fluently configured object the host application keeps
//! assembling after the factory hands it over; only the narrow slice the
//! factory needs lives here.

mod info;

pub use info::ApiInfo;

use serde::Serialize;

/// A version tag defined by the documentation generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DocumentationType {
    Swagger12,
    Swagger2,
    Oas30,
    SpringWeb,
}

impl DocumentationType {
    pub fn version(&self) -> &'static str {
        match self {
            DocumentationType::Swagger12 => "1.2",
            DocumentationType::Swagger2 => "2.0",
            DocumentationType::Oas30 => "3.0",
            DocumentationType::SpringWeb => "5.2",
        }
    }
}

/// A builder that accumulates documentation-generation settings around one
/// [`DocumentationType`] before the host application finalizes it.
#[derive(Debug, Clone)]
pub struct Docket {
    doc_type: DocumentationType,
    group_name: Option<String>,
    api_info: Option<ApiInfo>,
    enabled: bool,
}

impl Docket {
    pub fn new(doc_type: DocumentationType) -> Self {
        Self {
            doc_type,
            group_name: None,
            api_info: None,
            enabled: true,
        }
    }

    pub fn documentation_type(&self) -> DocumentationType {
        self.doc_type
    }

    /// Version string of the wrapped tag, e.g. `"3.0"`.
    pub fn version(&self) -> &'static str {
        self.doc_type.version()
    }

    /// Name under which the generator groups this API's documentation.
    pub fn group_name(mut self, name: impl Into<String>) -> Self {
        self.group_name = Some(name.into());
        self
    }

    pub fn api_info(mut self, info: ApiInfo) -> Self {
        self.api_info = Some(info);
        self
    }

    /// Dockets start out enabled; the host can switch one off per profile.
    pub fn enable(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn group(&self) -> Option<&str> {
        self.group_name.as_deref()
    }

    pub fn info(&self) -> Option<&ApiInfo> {
        self.api_info.as_ref()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(test)]
mod tests {
    use super::{Docket, DocumentationType};
    use pretty_assertions::assert_eq;

    #[test]
    fn fresh_docket_is_enabled_and_unconfigured() {
        let docket = Docket::new(DocumentationType::Swagger2);
        assert!(docket.is_enabled());
        assert_eq!(docket.group(), None);
        assert!(docket.info().is_none());
    }

    #[test]
    fn fluent_configuration_accumulates() {
        let docket = Docket::new(DocumentationType::Oas30)
            .group_name("petstore")
            .enable(false);
        assert_eq!(docket.version(), "3.0");
        assert_eq!(docket.group(), Some("petstore"));
        assert!(!docket.is_enabled());
    }
}
