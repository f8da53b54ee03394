//! Capabilities the controller calls into (always compiled, no feature gate).
//!
//! Provides the `Notifier`, `ClipboardSink` and `LinkOpener` traits plus
//! no-op implementations, so the controller can accept `Arc<dyn ...>`
//! unconditionally. Terminal-backed implementations live behind the `cli` /
//! `tui` features.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// A transient user-facing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success<T: Into<String>>(message: T) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error<T: Into<String>>(message: T) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NotificationLevel::Error
    }
}

/// Sink for transient notifications.
///
/// Implementations must be thread-safe (Send + Sync).
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Write access to the system clipboard
pub trait ClipboardSink: Send + Sync {
    fn set_text(&self, text: &str) -> Result<(), String>;
}

/// Opens a link outside the application (usually the default browser)
pub trait LinkOpener: Send + Sync {
    fn open(&self, url: &str) -> Result<(), String>;
}

// ============ No-op implementations ============

/// Discards everything; used where no UI is attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopCapabilities;

impl NoopCapabilities {
    pub fn arc() -> Arc<Self> {
        Arc::new(Self)
    }
}

impl Notifier for NoopCapabilities {
    fn notify(&self, _notification: Notification) {}
}

impl ClipboardSink for NoopCapabilities {
    fn set_text(&self, _text: &str) -> Result<(), String> {
        Err("clipboard is not available".to_string())
    }
}

impl LinkOpener for NoopCapabilities {
    fn open(&self, _url: &str) -> Result<(), String> {
        Err("no link opener is available".to_string())
    }
}

// ============ NotificationLog ============

/// 通知最多保留条数
const NOTIFICATION_LOG_CAPACITY: usize = 32;

#[derive(Debug, Clone)]
struct TimedNotification {
    notification: Notification,
    at: Instant,
}

/// Bounded in-memory notification queue read by the TUI status bar.
///
/// Entries expire `ttl` after they were pushed.
#[derive(Debug)]
pub struct NotificationLog {
    entries: Mutex<VecDeque<TimedNotification>>,
    ttl: Duration,
}

impl NotificationLog {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(VecDeque::new()),
            ttl,
        }
    }

    pub fn arc(ttl: Duration) -> Arc<Self> {
        Arc::new(Self::new(ttl))
    }

    /// Most recent notification that has not yet expired
    pub fn current(&self) -> Option<Notification> {
        self.current_at(Instant::now())
    }

    fn current_at(&self, now: Instant) -> Option<Notification> {
        let entries = self.entries.lock();
        entries
            .back()
            .filter(|entry| now.duration_since(entry.at) < self.ttl)
            .map(|entry| entry.notification.clone())
    }

    /// All retained notifications, oldest first
    pub fn history(&self) -> Vec<Notification> {
        self.entries
            .lock()
            .iter()
            .map(|entry| entry.notification.clone())
            .collect()
    }

    /// Drop entries older than the ttl
    pub fn prune(&self) {
        let now = Instant::now();
        self.entries
            .lock()
            .retain(|entry| now.duration_since(entry.at) < self.ttl);
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl Notifier for NotificationLog {
    fn notify(&self, notification: Notification) {
        let mut entries = self.entries.lock();
        if entries.len() >= NOTIFICATION_LOG_CAPACITY {
            entries.pop_front();
        }
        entries.push_back(TimedNotification {
            notification,
            at: Instant::now(),
        });
    }
}

// ============ Console ============

/// Prints notifications to the terminal (CLI mode)
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        use colored::Colorize;
        match notification.level {
            NotificationLevel::Success => {
                println!("{} {}", "✓".bold().green(), notification.message)
            }
            NotificationLevel::Error => {
                eprintln!("{} {}", "✗".bold().red(), notification.message.red())
            }
        }
    }
}

// ============ System clipboard / browser ============

/// `arboard`-backed clipboard
#[cfg(any(feature = "cli", feature = "tui"))]
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

#[cfg(any(feature = "cli", feature = "tui"))]
impl ClipboardSink for SystemClipboard {
    fn set_text(&self, text: &str) -> Result<(), String> {
        let mut clipboard = arboard::Clipboard::new().map_err(|e| e.to_string())?;
        clipboard.set_text(text).map_err(|e| e.to_string())
    }
}

/// Opens links in the default browser
#[cfg(any(feature = "cli", feature = "tui"))]
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

#[cfg(any(feature = "cli", feature = "tui"))]
impl LinkOpener for SystemBrowser {
    fn open(&self, url: &str) -> Result<(), String> {
        webbrowser::open(url).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_log_current_is_latest() {
        let log = NotificationLog::new(Duration::from_secs(60));
        log.notify(Notification::success("first"));
        log.notify(Notification::error("second"));
        let current = log.current().unwrap();
        assert_eq!(current.message, "second");
        assert!(current.is_error());
        assert_eq!(log.history().len(), 2);
    }

    #[test]
    fn test_notification_log_expires() {
        let log = NotificationLog::new(Duration::from_millis(10));
        log.notify(Notification::success("soon gone"));
        let later = Instant::now() + Duration::from_millis(50);
        assert!(log.current_at(later).is_none());
    }

    #[test]
    fn test_notification_log_is_bounded() {
        let log = NotificationLog::new(Duration::from_secs(60));
        for i in 0..(NOTIFICATION_LOG_CAPACITY + 5) {
            log.notify(Notification::success(format!("n{}", i)));
        }
        let history = log.history();
        assert_eq!(history.len(), NOTIFICATION_LOG_CAPACITY);
        assert_eq!(history[0].message, "n5");
    }

    #[test]
    fn test_noop_clipboard_fails() {
        let noop = NoopCapabilities;
        assert!(noop.set_text("x").is_err());
        assert!(noop.open("http://a.com").is_err());
    }
}
