use dioxus::prelude::*;

use crate::{core::model::Attachment, t};

/// Action cell trigger: toggles an inline panel with the file's failure
/// message and attachments. Disabled when there is nothing to show.
#[component]
pub fn ErrorButton(
    #[props(!optional)] failure_message: Option<String>,
    test_file_path: String,
    case_attach_infos: Vec<Attachment>,
) -> Element {
    let mut open = use_signal(|| false);
    let has_details = failure_message.is_some() || !case_attach_infos.is_empty();

    let button_class = if failure_message.is_some() {
        "button button--danger error-button"
    } else {
        "button button--ghost error-button"
    };

    let title = if has_details {
        String::new()
    } else {
        t!("action-no-details")
    };

    rsx! {
        button {
            r#type: "button",
            class: "{button_class}",
            disabled: !has_details,
            title: "{title}",
            onclick: move |_| open.set(!open()),
            {t!("action-info")}
        }

        if open() && has_details {
            div { class: "error-panel",
                div { class: "error-panel__path", "{test_file_path}" }

                if let Some(message) = failure_message.as_ref() {
                    h4 { class: "error-panel__heading", {t!("action-failure-heading")} }
                    pre { class: "error-panel__message", "{message}" }
                }

                if !case_attach_infos.is_empty() {
                    h4 { class: "error-panel__heading", {t!("action-attachments-heading")} }
                    ul { class: "error-panel__attachments",
                        for attachment in case_attach_infos.iter() {
                            {render_attachment(attachment)}
                        }
                    }
                }
            }
        }
    }
}

pub(super) fn render_attachment(attachment: &Attachment) -> Element {
    let label = attachment
        .description
        .clone()
        .unwrap_or_else(|| attachment.file_path.clone());

    rsx! {
        li { class: "attachment",
            a {
                class: "attachment__link",
                href: "{attachment.file_path}",
                target: "_blank",
                rel: "noopener noreferrer",
                "{label}"
            }
        }
    }
}
