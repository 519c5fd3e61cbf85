use provsign_core::{Error, Result};
use quick_xml::se;
use serde::Serialize;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// CORS configuration applied to a freshly provisioned bucket.
///
/// It allows the browser at one origin to read objects, nothing more.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename = "CORSConfiguration")]
pub struct CorsConfiguration {
    #[serde(rename = "CORSRule")]
    rules: Vec<CorsRule>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
struct CorsRule {
    allowed_origin: String,
    allowed_method: Vec<String>,
    allowed_header: Vec<String>,
    max_age_seconds: u32,
}

impl CorsConfiguration {
    /// Build the configuration allowing `GET` and `HEAD` from `origin`.
    pub fn for_origin(origin: &str) -> Self {
        Self {
            rules: vec![CorsRule {
                allowed_origin: origin.to_string(),
                allowed_method: vec!["GET".to_string(), "HEAD".to_string()],
                allowed_header: vec!["*".to_string()],
                max_age_seconds: 3600,
            }],
        }
    }

    /// Serialize into the XML body of a `PUT ?cors` request.
    pub fn to_xml(&self) -> Result<String> {
        let body = se::to_string(self).map_err(|e| {
            Error::unexpected("failed to serialize cors configuration").with_source(e)
        })?;
        Ok(format!("{XML_DECLARATION}\n{body}"))
    }
}
