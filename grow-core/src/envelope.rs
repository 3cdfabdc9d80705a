//! JSON response envelope
//!
//! Every JSON body the site serves has the same shape:
//!
//! ```json
//! { "success": false, "message": "...", "errors": { "email": ["is required"] } }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ContentError;

/// `{success, message?, data?, errors?}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Field name to messages for that field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

impl<T> ApiResponse<T> {
    /// Successful response carrying data
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
            errors: None,
        }
    }

    /// Failed response with a message and no data
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
            errors: None,
        }
    }

    /// "{what} not found: {key}"
    pub fn not_found(what: &str, key: &str) -> Self {
        Self::failure(format!("{} not found: {}", what, key))
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Attach messages for one field
    pub fn with_field_errors<I, S>(mut self, field: impl Into<String>, messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.errors
            .get_or_insert_with(BTreeMap::new)
            .entry(field.into())
            .or_default()
            .extend(messages.into_iter().map(Into::into));
        self
    }
}

impl<T> From<&ContentError> for ApiResponse<T> {
    fn from(err: &ContentError) -> Self {
        Self::failure(err.to_string()).with_field_errors(err.error_code(), [err.to_string()])
    }
}
