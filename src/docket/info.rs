//! API metadata attached to a docket via `Docket::api_info`.

use serde::{Deserialize, Serialize};

/// Human-facing metadata the generator prints on the documentation page.
///
/// Every field except `title` and `version` is optional and omitted from the
/// serialized form when unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiInfo {
    pub title: String,
    pub version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terms_of_service_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
}

impl ApiInfo {
    pub fn new(title: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            version: version.into(),
            ..Self::default()
        }
    }

    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    pub fn terms_of_service_url(mut self, url: impl Into<String>) -> Self {
        self.terms_of_service_url = Some(url.into());
        self
    }

    pub fn license(mut self, name: impl Into<String>) -> Self {
        self.license = Some(name.into());
        self
    }
}
