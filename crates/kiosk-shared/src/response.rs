//! Response bodies returned by the API.

use serde::{Deserialize, Serialize};

/// Every failing bulletin endpoint answers `{"error": "<message>"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Success acknowledgement with a human-readable message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Identity the portal attributed to the current request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserBody {
    pub user: String,
}
