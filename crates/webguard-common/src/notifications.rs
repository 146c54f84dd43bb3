use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Severity level for modal notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
}

/// A modal notification that stays on screen until the user acknowledges it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub body: String,
}

impl Notification {
    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn warning(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Warning,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            title: title.into(),
            body: body.into(),
        }
    }
}

/// A bounded FIFO of modal notifications.
///
/// Only the front entry is presented. Each entry carries an action of type
/// `A` that the owner applies once the user acknowledges it. When full, the
/// oldest entry is dropped without its action running.
#[derive(Debug)]
pub struct NotificationQueue<A = ()> {
    items: VecDeque<(Notification, A)>,
    capacity: usize,
}

impl<A> NotificationQueue<A> {
    /// Creates a new queue with the given maximum capacity (at least 1).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Pushes a notification with the action to run on acknowledgement.
    pub fn push(&mut self, notification: Notification, action: A) {
        if self.items.len() >= self.capacity {
            self.items.pop_front();
        }
        self.items.push_back((notification, action));
    }

    /// The notification currently presented to the user.
    pub fn front(&self) -> Option<&Notification> {
        self.items.front().map(|(n, _)| n)
    }

    /// Removes the front notification, handing back its action.
    pub fn acknowledge(&mut self) -> Option<(Notification, A)> {
        self.items.pop_front()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<A> Default for NotificationQueue<A> {
    fn default() -> Self {
        Self::new(8)
    }
}
