use dioxus::prelude::*;

use crate::core::status::{StatusBadge, COLOR_FAILED, COLOR_PASSED, COLOR_PENDING, COLOR_TODO};

#[component]
pub fn StatusTags(badge: StatusBadge) -> Element {
    let tags = match badge {
        StatusBadge::ExecError => rsx! {
            span { class: "status-tag status-tag--single", style: "background-color: {COLOR_FAILED}",
                "Exec Error"
                span { class: "status-tag__icon", "✕" }
            }
        },
        StatusBadge::AllPassed { passing } => rsx! {
            span { class: "status-tag status-tag--single", style: "background-color: {COLOR_PASSED}",
                "All Passed"
                span { class: "status-tag__count", "{passing}" }
                span { class: "status-tag__icon", "✓" }
            }
        },
        StatusBadge::Mixed {
            passing,
            failing,
            pending,
            todo,
        } => rsx! {
            {count_tag(COLOR_PASSED, passing)}
            if let Some(count) = failing {
                {count_tag(COLOR_FAILED, count)}
            }
            if let Some(count) = pending {
                {count_tag(COLOR_PENDING, count)}
            }
            if let Some(count) = todo {
                {count_tag(COLOR_TODO, count)}
            }
        },
    };

    rsx! {
        div { class: "status-tags", {tags} }
    }
}

fn count_tag(color: &str, count: u32) -> Element {
    rsx! {
        span { class: "status-tag", style: "background-color: {color}", "{count}" }
    }
}
