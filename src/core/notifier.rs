//! User-facing notifications
//!
//! Alerts raised by album operations (added, duplicate, invalid link, ...).
//! Presentation is left to the [`Notifier`] implementation.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

/// Kind of alert, which drives its styling and log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertType {
    Success,
    Warning,
    Error,
    Info,
}

/// Where the popup is anchored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Top,
    #[default]
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub message: String,
    pub alert_type: AlertType,
    /// Keep the alert on screen until dismissed
    pub stay: bool,
    pub position: Position,
}

impl Alert {
    pub fn new(message: impl Into<String>, alert_type: AlertType) -> Self {
        Self {
            message: message.into(),
            alert_type,
            stay: false,
            position: Position::default(),
        }
    }

    pub fn stay(mut self, stay: bool) -> Self {
        self.stay = stay;
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }
}

pub trait Notifier: Send + Sync {
    fn alert(&self, alert: Alert);

    fn success(&self, message: &str) {
        self.alert(Alert::new(message, AlertType::Success));
    }

    fn warning(&self, message: &str) {
        self.alert(Alert::new(message, AlertType::Warning));
    }

    fn error(&self, message: &str) {
        self.alert(Alert::new(message, AlertType::Error));
    }

    fn info(&self, message: &str) {
        self.alert(Alert::new(message, AlertType::Info));
    }
}

/// Emits alerts as log events
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn alert(&self, alert: Alert) {
        match alert.alert_type {
            AlertType::Success => info!(target: "video_album::alert", "✅ {}", alert.message),
            AlertType::Info => info!(target: "video_album::alert", "ℹ️ {}", alert.message),
            AlertType::Warning => warn!(target: "video_album::alert", "⚠️ {}", alert.message),
            AlertType::Error => error!(target: "video_album::alert", "❌ {}", alert.message),
        }
    }
}

/// Keeps every alert in memory, e.g. for a UI to drain
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    alerts: Mutex<Vec<Alert>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alerts(&self) -> Vec<Alert> {
        self.alerts.lock().clone()
    }

    /// Remove and return all pending alerts
    pub fn drain(&self) -> Vec<Alert> {
        std::mem::take(&mut *self.alerts.lock())
    }

    pub fn last(&self) -> Option<Alert> {
        self.alerts.lock().last().cloned()
    }
}

impl Notifier for MemoryNotifier {
    fn alert(&self, alert: Alert) {
        self.alerts.lock().push(alert);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_defaults() {
        let alert = Alert::new("hello", AlertType::Info);
        assert!(!alert.stay);
        assert_eq!(alert.position, Position::Bottom);

        let alert = alert.stay(true).position(Position::Top);
        assert!(alert.stay);
        assert_eq!(alert.position, Position::Top);
    }

    #[test]
    fn test_shortcuts_set_alert_type() {
        let notifier = MemoryNotifier::new();
        notifier.success("s");
        notifier.warning("w");
        notifier.error("e");
        notifier.info("i");

        let types: Vec<AlertType> = notifier.alerts().iter().map(|a| a.alert_type).collect();
        assert_eq!(
            types,
            vec![
                AlertType::Success,
                AlertType::Warning,
                AlertType::Error,
                AlertType::Info
            ]
        );
        assert_eq!(notifier.last().unwrap().message, "i");
    }

    #[test]
    fn test_drain() {
        let notifier = MemoryNotifier::new();
        notifier.info("one");
        assert_eq!(notifier.drain().len(), 1);
        assert!(notifier.alerts().is_empty());
    }

    #[test]
    fn test_tracing_notifier_does_not_panic() {
        let notifier = TracingNotifier;
        notifier.alert(Alert::new("logged", AlertType::Error).stay(true));
    }

    #[test]
    fn test_alert_type_serialization() {
        assert_eq!(serde_json::to_string(&AlertType::Success).unwrap(), "\"success\"");
        assert_eq!(serde_json::to_string(&Position::Bottom).unwrap(), "\"bottom\"");
    }
}
