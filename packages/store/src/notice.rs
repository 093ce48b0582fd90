//! # Expiring notices
//!
//! A [`Notice`] is a message together with the moment it was issued and how long
//! it should stay on screen. Nothing mutates it when it expires: callers ask
//! [`Notice::is_visible`] with the current time and render accordingly. A notice
//! without a time-to-live is sticky and stays until replaced.

use std::time::Duration;

use crate::clock::{self, EpochMillis};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
    pub issued_at: EpochMillis,
    pub ttl: Option<Duration>,
}

impl Notice {
    pub fn success(message: impl Into<String>, issued_at: EpochMillis, ttl: Duration) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Success,
            issued_at,
            ttl: Some(ttl),
        }
    }

    pub fn error(message: impl Into<String>, issued_at: EpochMillis, ttl: Duration) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Error,
            issued_at,
            ttl: Some(ttl),
        }
    }

    /// An error that stays until the next state change replaces it.
    pub fn sticky_error(message: impl Into<String>, issued_at: EpochMillis) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Error,
            issued_at,
            ttl: None,
        }
    }

    pub fn expires_at(&self) -> Option<EpochMillis> {
        self.ttl
            .map(|ttl| self.issued_at.saturating_add(clock::millis(ttl)))
    }

    pub fn is_visible(&self, now: EpochMillis) -> bool {
        if self.message.is_empty() || now < self.issued_at {
            return false;
        }
        match self.expires_at() {
            Some(end) => now < end,
            None => true,
        }
    }

    /// Time left before the notice disappears. `None` for sticky or expired notices.
    pub fn remaining(&self, now: EpochMillis) -> Option<Duration> {
        let end = self.expires_at()?;
        (now < end).then(|| Duration::from_millis(end - now))
    }
}
