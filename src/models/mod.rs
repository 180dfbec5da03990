pub mod notification;

pub use notification::{InviteNotificationRequest, InviteNotificationResponse};
