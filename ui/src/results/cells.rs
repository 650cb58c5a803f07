use dioxus::prelude::*;

use crate::{
    core::{
        clipboard::copy_to_clipboard,
        columns::{ActionCell, Cell, FileCell},
    },
    results::{notify, ErrorButton, Notice, NoticeKind, StatusTags},
    t,
};

pub(super) fn render_cell(cell: Cell, notice: Signal<Option<Notice>>) -> Element {
    match cell {
        Cell::File(file) => render_file(file, notice),
        Cell::Text(text) => rsx! {
            span { class: "results-table__text", "{text}" }
        },
        Cell::Status(badge) => rsx! {
            StatusTags { badge }
        },
        Cell::Action(ActionCell {
            failure_message,
            relative_path,
            attachments,
        }) => rsx! {
            ErrorButton {
                failure_message,
                test_file_path: relative_path,
                case_attach_infos: attachments,
            }
        },
    }
}

fn render_file(file: FileCell, notice: Signal<Option<Notice>>) -> Element {
    let FileCell {
        full_path,
        relative_path,
        copy_command,
        file_url,
    } = file;

    rsx! {
        span { class: "file-cell",
            span {
                class: "file-cell__copy",
                title: t!("copy-icon-title"),
                onclick: move |_| copy_command_to_clipboard(copy_command.clone(), notice),
                "📋"
            }
            span { class: "file-cell__path", id: "{full_path}", " {relative_path}" }
            if let Some(url) = file_url {
                a {
                    class: "file-cell__link",
                    title: t!("go-to-file-title"),
                    href: "{url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "↗"
                }
            }
        }
    }
}

fn copy_command_to_clipboard(command: String, notice: Signal<Option<Notice>>) {
    spawn(async move {
        match copy_to_clipboard(command).await {
            Ok(()) => notify(notice, Notice::new(NoticeKind::Success, t!("copy-success"))),
            Err(err) => {
                tracing::warn!(%err, "copy command failed");
                notify(
                    notice,
                    Notice::new(NoticeKind::Error, t!("copy-failed", reason = err.to_string())),
                );
            }
        }
    });
}
