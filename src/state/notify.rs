#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

/// Transient notices surfaced to the user (the toast strip).
///
/// Each notice carries a monotonically increasing id so it can be dismissed
/// individually and rendered with a stable key.
#[derive(Clone, Debug, Default)]
pub struct NotifyState {
    pub notices: Vec<Notice>,
    next_id: u64,
}

/// A single notice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NotifyState {
    pub fn push_success(&mut self, message: impl Into<String>) {
        self.push(NoticeKind::Success, message.into());
    }

    pub fn push_error(&mut self, message: impl Into<String>) {
        self.push(NoticeKind::Error, message.into());
    }

    /// Remove the notice with the given id. Unknown ids are a no-op.
    pub fn dismiss(&mut self, id: u64) {
        self.notices.retain(|notice| notice.id != id);
    }

    fn push(&mut self, kind: NoticeKind, message: String) {
        let id = self.next_id;
        self.next_id += 1;
        self.notices.push(Notice { id, kind, message });
    }
}
