use std::collections::VecDeque;
use std::time::{Duration, Instant};

const ERROR_TTL: Duration = Duration::from_secs(4);
const INFO_TTL: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Error,
    Info,
}

#[derive(Debug)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub expires_at: Instant,
}

/// Short-lived toasts shown in the bottom-right corner.
#[derive(Debug, Default)]
pub struct Notifier {
    notifications: VecDeque<Notification>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.add(message.into(), NotificationKind::Info, INFO_TTL);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.add(message.into(), NotificationKind::Error, ERROR_TTL);
    }

    pub fn recent(&self) -> Option<&Notification> {
        self.notifications.back()
    }

    pub fn prune_expired(&mut self) {
        self.prune_at(Instant::now());
    }

    fn prune_at(&mut self, now: Instant) {
        self.notifications.retain(|n| n.expires_at > now);
    }

    fn add(&mut self, message: String, kind: NotificationKind, ttl: Duration) {
        tracing::debug!(?kind, message = %message, "notification");
        self.notifications.push_back(Notification {
            message,
            kind,
            expires_at: Instant::now() + ttl,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn most_recent_wins() {
        let mut notifier = Notifier::new();
        notifier.info("copied");
        notifier.error("source failed");
        let recent = notifier.recent().unwrap();
        assert_eq!(recent.kind, NotificationKind::Error);
        assert_eq!(recent.message, "source failed");
    }

    #[test]
    fn expired_notifications_are_pruned() {
        let mut notifier = Notifier::new();
        notifier.info("short");
        notifier.error("long");
        notifier.prune_at(Instant::now() + INFO_TTL + Duration::from_millis(1));
        assert_eq!(notifier.recent().unwrap().message, "long");
        notifier.prune_at(Instant::now() + ERROR_TTL + Duration::from_secs(1));
        assert!(notifier.recent().is_none());
    }
}
