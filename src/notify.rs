use strum_macros::Display;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum NotifyLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Fire-and-forget delivery seam for user notifications.
///
/// The transport behind it (websocket fan-out, persistence) lives outside
/// this crate. Implementations must swallow their own failures: a dead sink
/// must never fail the request that triggered the notification.
pub trait NotificationSink {
    fn notify(&self, user_id: u64, title: &str, message: &str, level: NotifyLevel);
}

/// Sink that logs notifications through tracing. Doubles as the default
/// wiring for the CLI, where no delivery transport is attached.
pub struct LogSink;

impl NotificationSink for LogSink {
    fn notify(&self, user_id: u64, title: &str, message: &str, level: NotifyLevel) {
        info!("🔔 [{}] user {}: {}: {}", level, user_id, title, message);
    }
}
