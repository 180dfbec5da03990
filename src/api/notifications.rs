use axum::extract::rejection::JsonRejection;
use axum::{extract::State, routing::post, Json, Router};

use crate::error::{AppError, Result};
use crate::mail::template;
use crate::models::{InviteNotificationRequest, InviteNotificationResponse};
use crate::state::AppState;

const MSG_SENT: &str = "Email sent successfully";
const MSG_SIMULATED: &str = "Email simulated";

/// Notification routes
pub fn notification_routes() -> Router<AppState> {
    Router::new().route("/invite", post(send_invite_notification))
}

/// POST /api/v1/notifications/invite
///
/// Renders the invite notification email and hands it to the mailer. The
/// response is success-shaped whenever the input validates; only a missing
/// `email` (400) or a body the extractor rejects (500) escape that.
async fn send_invite_notification(
    State(state): State<AppState>,
    payload: std::result::Result<Json<InviteNotificationRequest>, JsonRejection>,
) -> Result<Json<InviteNotificationResponse>> {
    let Json(request) = payload.map_err(|e| AppError::Internal(e.body_text()))?;

    tracing::info!(email = ?request.email, "Invite notification requested");

    let email = request
        .email
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::Validation("Email gerekli".to_string()))?;

    let html = template::render_invite_info(
        request.contact_name.as_deref(),
        request.inviter_name.as_deref(),
    );

    let outcome = state
        .mailer
        .send_notification(email, template::INVITE_INFO_SUBJECT, &html)
        .await;

    let details = serde_json::to_value(&outcome)?;

    // A `simulated` marker would select MSG_SIMULATED, but neither delivery
    // path emits one; the backup record reports `delivered`/`method` instead.
    let message = if details.get("simulated").is_some() {
        MSG_SIMULATED
    } else {
        MSG_SENT
    };

    Ok(Json(InviteNotificationResponse {
        success: true,
        message: message.to_string(),
        details,
    }))
}
