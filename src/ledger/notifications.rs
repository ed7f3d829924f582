use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Outcome of an add request, meant for a toast-style collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}

/// Receives every notification emitted by a [`RecordStore`](super::RecordStore).
pub trait NotificationSink {
    fn notify(&mut self, notification: &Notification);
}

/// In-memory sink whose clones share one history.
#[derive(Debug, Clone, Default)]
pub struct NotificationLog {
    entries: Rc<RefCell<Vec<Notification>>>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<Notification> {
        self.entries.borrow().clone()
    }

    pub fn last(&self) -> Option<Notification> {
        self.entries.borrow().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl NotificationSink for NotificationLog {
    fn notify(&mut self, notification: &Notification) {
        self.entries.borrow_mut().push(notification.clone());
    }
}
