//! Event System
//!
//! Messages the controller surfaces to the user, as consumed by the dashboard's activity log.

use crate::error_classifier::LogLevel;
use crate::logging::should_log_with_env;
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    /// A mutation or login went through.
    Success,
    /// A server-reported failure.
    Error,
    /// A dashboard refresh or other informational notice.
    Refresh,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn alert(msg: impl Into<String>) -> Self {
        Self::new(msg.into(), EventType::Error, LogLevel::Error)
    }

    pub fn success(msg: impl Into<String>) -> Self {
        Self::new(msg.into(), EventType::Success, LogLevel::Info)
    }

    pub fn refresh(msg: impl Into<String>) -> Self {
        Self::new(msg.into(), EventType::Refresh, LogLevel::Info)
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}
