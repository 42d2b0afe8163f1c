//! User Notification Channel
//!
//! Toast-style feedback raised as a side effect of mutation outcomes.

use std::cell::RefCell;
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Success, message: message.into() }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Info, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, message: message.into() }
    }
}

pub trait Notifier {
    fn notify(&self, notice: Notice);
}

/// Bounded queue of notices; the oldest is dropped when full
pub struct ToastQueue {
    limit: usize,
    notices: RefCell<VecDeque<Notice>>,
}

impl ToastQueue {
    pub fn new(limit: usize) -> Self {
        Self {
            limit: limit.max(1),
            notices: RefCell::new(VecDeque::new()),
        }
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().iter().cloned().collect()
    }

    pub fn errors(&self) -> Vec<Notice> {
        self.notices
            .borrow()
            .iter()
            .filter(|n| n.level == NoticeLevel::Error)
            .cloned()
            .collect()
    }

    pub fn drain(&self) -> Vec<Notice> {
        self.notices.borrow_mut().drain(..).collect()
    }
}

impl Notifier for ToastQueue {
    fn notify(&self, notice: Notice) {
        let mut notices = self.notices.borrow_mut();
        if notices.len() == self.limit {
            notices.pop_front();
        }
        notices.push_back(notice);
    }
}

/// Forwards notices to the log facade
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Error => log::warn!("[notice] {}", notice.message),
            _ => log::info!("[notice] {}", notice.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_drops_oldest() {
        let queue = ToastQueue::new(2);
        queue.notify(Notice::info("one"));
        queue.notify(Notice::error("two"));
        queue.notify(Notice::success("three"));

        let messages: Vec<_> = queue.notices().into_iter().map(|n| n.message).collect();
        assert_eq!(messages, vec!["two", "three"]);
        assert_eq!(queue.errors().len(), 1);
        assert_eq!(queue.drain().len(), 2);
        assert!(queue.notices().is_empty());
    }
}
