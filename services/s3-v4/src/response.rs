use quick_xml::de;
use serde::Deserialize;
use std::fmt::{Display, Formatter};

/// ErrorResponse is the parsed body of a failed provider call.
///
/// Bodies are tried as an S3 XML `<Error>` document first, then as a relay JSON
/// object with an `error` field, and kept as raw text otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorResponse {
    /// `<Error><Code/><Message/></Error>` returned by S3-compatible endpoints.
    S3 {
        /// Machine readable error code, like `BucketAlreadyExists`.
        code: String,
        /// Human readable message, may be empty.
        message: String,
    },
    /// `{"error": "..."}` returned by a relaying proxy.
    Relay {
        /// The relayed error message.
        error: String,
    },
    /// Anything else, kept verbatim.
    Raw(String),
}

#[derive(Default, Debug, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct S3ErrorBody {
    code: String,
    message: String,
}

#[derive(Debug, Deserialize)]
struct RelayErrorBody {
    error: String,
}

impl ErrorResponse {
    /// Parse a response body.
    pub fn parse(body: &str) -> Self {
        let trimmed = body.trim();

        if trimmed.starts_with('<') {
            if let Ok(v) = de::from_str::<S3ErrorBody>(trimmed) {
                if !v.code.is_empty() {
                    return ErrorResponse::S3 {
                        code: v.code,
                        message: v.message,
                    };
                }
            }
        }

        if let Ok(v) = serde_json::from_str::<RelayErrorBody>(trimmed) {
            return ErrorResponse::Relay { error: v.error };
        }

        ErrorResponse::Raw(trimmed.to_string())
    }

    /// The S3 error code, if the body carried one.
    pub fn code(&self) -> Option<&str> {
        match self {
            ErrorResponse::S3 { code, .. } => Some(code),
            _ => None,
        }
    }
}

impl Display for ErrorResponse {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorResponse::S3 { code, message } if message.is_empty() => write!(f, "{code}"),
            ErrorResponse::S3 { code, message } => write!(f, "{code}: {message}"),
            ErrorResponse::Relay { error } => write!(f, "{error}"),
            ErrorResponse::Raw(text) => write!(f, "{text}"),
        }
    }
}
