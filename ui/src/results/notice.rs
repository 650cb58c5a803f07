//! Transient notifications (copy outcome). Fire-and-forget: a notice replaces
//! the current one and removes itself after [`NOTICE_TTL_MS`].

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;

use crate::core::platform;

pub const NOTICE_TTL_MS: u32 = 3_000;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, text: impl Into<String>) -> Self {
        Self {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            kind,
            text: text.into(),
        }
    }
}

/// Show `notice` and schedule its removal. A newer notice is left alone.
pub fn notify(mut slot: Signal<Option<Notice>>, notice: Notice) {
    let id = notice.id;
    slot.set(Some(notice));
    spawn(async move {
        platform::sleep_ms(NOTICE_TTL_MS).await;
        let still_current = matches!(&*slot.peek(), Some(current) if current.id == id);
        if still_current {
            slot.set(None);
        }
    });
}

#[component]
pub fn NoticeToast(notice: Signal<Option<Notice>>) -> Element {
    let Some(current) = notice() else {
        return rsx! {};
    };

    let (class, icon) = match current.kind {
        NoticeKind::Success => ("notice notice--success", "✓"),
        NoticeKind::Error => ("notice notice--error", "⚠"),
    };

    rsx! {
        div { class: "{class}", role: "status",
            span { class: "notice__icon", "{icon}" }
            span { class: "notice__text", "{current.text}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notices_get_distinct_ids() {
        let a = Notice::new(NoticeKind::Success, "copied");
        let b = Notice::new(NoticeKind::Success, "copied");
        assert_ne!(a, b);
        assert_eq!(a.text, b.text);
    }
}
