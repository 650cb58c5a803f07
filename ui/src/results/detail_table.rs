use dioxus::prelude::*;

use crate::{
    core::{
        detail::{group_cases, AnnotatedCase, CaseRow},
        format::format_case_duration,
    },
    results::error_button::render_attachment,
    t,
};

/// Cases of one expanded file. Merging by describe block starts from
/// `default_merge` and can be switched per file.
#[component]
pub fn DetailTable(
    data: Vec<AnnotatedCase>,
    default_merge: bool,
    default_merge_level: usize,
) -> Element {
    let mut merged = use_signal(|| default_merge);

    if data.is_empty() {
        return rsx! {
            p { class: "detail-table__placeholder", {t!("detail-no-cases")} }
        };
    }

    let groups = group_cases(&data, merged(), default_merge_level);

    rsx! {
        div { class: "detail-table",
            label { class: "detail-table__merge",
                input {
                    r#type: "checkbox",
                    checked: merged(),
                    onchange: move |evt: FormEvent| merged.set(evt.checked()),
                }
                {t!("detail-merge-toggle")}
            }

            table { class: "detail-table__table",
                tbody {
                    for group in groups.iter() {
                        if let Some(heading) = group.heading.as_ref() {
                            tr { class: "detail-table__group",
                                td { colspan: "3", "{heading}" }
                            }
                        }
                        for row in group.rows.iter() {
                            {render_case(row)}
                        }
                    }
                }
            }
        }
    }
}

fn render_case(row: &CaseRow<'_>) -> Element {
    let case = &row.case.case;
    let status = case.status.label();
    let duration = format_case_duration(case.duration);
    let attachments = row.case.attachments();

    rsx! {
        tr { class: "detail-table__case detail-table__case--{status}",
            td { class: "detail-table__title", "{row.label}" }
            td { class: "detail-table__status", "{status}" }
            td { class: "detail-table__duration", title: t!("detail-duration"), "{duration}" }
        }
        if !case.failure_messages.is_empty() || !attachments.is_empty() {
            tr { class: "detail-table__extra",
                td { colspan: "3",
                    for message in case.failure_messages.iter() {
                        pre { class: "detail-table__failure", "{message}" }
                    }
                    if !attachments.is_empty() {
                        ul { class: "detail-table__attachments",
                            for attachment in attachments.iter() {
                                {render_attachment(attachment)}
                            }
                        }
                    }
                }
            }
        }
    }
}
