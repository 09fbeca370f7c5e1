//! The uniform response both handlers return to the invocation environment.
//!
//! Serialized shapes:
//! - success: `{"statusCode": 200, "body": {"message": "...", ...extra}}`
//! - failure: `{"statusCode": 500, "body": {"error": "..."}}`

use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: EnvelopeBody,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EnvelopeBody {
    Success {
        message: String,
        #[serde(flatten)]
        extra: Map<String, Value>,
    },
    Failure {
        error: String,
    },
}

impl Envelope {
    pub fn success(message: impl Into<String>, extra: Map<String, Value>) -> Self {
        Self {
            status_code: 200,
            body: EnvelopeBody::Success {
                message: message.into(),
                extra,
            },
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            status_code: 500,
            body: EnvelopeBody::Failure { error: error.into() },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.body, EnvelopeBody::Success { .. })
    }

    /// The success message or the failure error, whichever this envelope carries.
    pub fn message(&self) -> &str {
        match &self.body {
            EnvelopeBody::Success { message, .. } => message,
            EnvelopeBody::Failure { error } => error,
        }
    }

    pub fn extra(&self, field: &str) -> Option<&Value> {
        match &self.body {
            EnvelopeBody::Success { extra, .. } => extra.get(field),
            EnvelopeBody::Failure { .. } => None,
        }
    }
}
