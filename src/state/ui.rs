//! Toast notification queue.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// How long a toast stays on screen before the host dismisses it.
pub const TOAST_DISMISS_MS: u32 = 3_000;
/// Oldest toasts drop past this depth so the stack never floods the screen.
pub const TOAST_CAP: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Error,
}

impl ToastKind {
    /// BEM modifier suffix for the toast styling.
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToastNote {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// FIFO toast stack behind a context signal.
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    notes: Vec<ToastNote>,
    next_id: u64,
}

impl ToastQueue {
    /// Queue a toast and return its id for timed dismissal.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.notes.push(ToastNote { id, kind, message: message.into() });
        if self.notes.len() > TOAST_CAP {
            self.notes.remove(0);
        }
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Success, message)
    }

    pub fn info(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Info, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Error, message)
    }

    /// Remove by id; ids of already-dropped toasts are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.notes.retain(|note| note.id != id);
    }

    pub fn notes(&self) -> &[ToastNote] {
        &self.notes
    }
}
