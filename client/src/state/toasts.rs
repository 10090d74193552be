#[cfg(test)]
#[path = "toasts_test.rs"]
mod toasts_test;

use sitecraft::collab::NoticeKind;

/// Milliseconds a toast stays on screen before dismissing itself.
pub const TOAST_LIFETIME_MS: u32 = 4_000;

/// One notice on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

/// Stack of visible toasts, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Show a notice; returns its id for later dismissal.
    pub fn push(&mut self, kind: NoticeKind, message: &str) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, kind, message: message.to_owned() });
        id
    }

    /// Remove a toast. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }
}
