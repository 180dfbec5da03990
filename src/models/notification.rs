use serde::{Deserialize, Serialize};

/// Request to send an invite notification email.
///
/// All fields are optional on the wire; the handler decides what counts as
/// missing (the extractor must not reject a body without `email`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteNotificationRequest {
    pub email: Option<String>,
    pub contact_name: Option<String>,
    pub inviter_name: Option<String>,
}

/// Response after a notification attempt
#[derive(Debug, Serialize)]
pub struct InviteNotificationResponse {
    pub success: bool,
    pub message: String,
    pub details: serde_json::Value,
}
