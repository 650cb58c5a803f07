//! Case-level rows shown inside an expanded file row.

use super::model::{Attachment, CaseResult, FileAttachInfo};

/// A case together with the attach info of the file it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedCase {
    pub case: CaseResult,
    pub file_attach_infos: FileAttachInfo,
}

impl AnnotatedCase {
    /// Attachments the file's attach info lists under this case's full name.
    pub fn attachments(&self) -> &[Attachment] {
        self.file_attach_infos
            .cases
            .get(&self.case.full_name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

pub fn annotate(cases: &[CaseResult], info: Option<&FileAttachInfo>) -> Vec<AnnotatedCase> {
    let info = info.cloned().unwrap_or_default();
    cases
        .iter()
        .map(|case| AnnotatedCase {
            case: case.clone(),
            file_attach_infos: info.clone(),
        })
        .collect()
}

/// Consecutive cases sharing a heading. `heading` is `None` when not merging.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseGroup<'a> {
    pub heading: Option<String>,
    pub rows: Vec<CaseRow<'a>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaseRow<'a> {
    /// Title path below the group heading.
    pub label: String,
    pub case: &'a AnnotatedCase,
}

/// Groups cases by their first `level` ancestor titles when `merge` is on.
pub fn group_cases(cases: &[AnnotatedCase], merge: bool, level: usize) -> Vec<CaseGroup<'_>> {
    let level = if merge { level } else { 0 };
    let mut groups: Vec<CaseGroup<'_>> = Vec::new();

    for annotated in cases {
        let titles = &annotated.case.ancestor_titles;
        let split = level.min(titles.len());
        let heading = (split > 0).then(|| titles[..split].join(" › "));
        let label = titles[split..]
            .iter()
            .chain(std::iter::once(&annotated.case.title))
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" › ");
        let row = CaseRow {
            label,
            case: annotated,
        };

        let continues_group = merge && groups.last().is_some_and(|group| group.heading == heading);
        if let Some(group) = groups.last_mut().filter(|_| continues_group) {
            group.rows.push(row);
        } else {
            groups.push(CaseGroup {
                heading,
                rows: vec![row],
            });
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::CaseStatus;
    use pretty_assertions::assert_eq;

    fn case(ancestors: &[&str], title: &str) -> CaseResult {
        let ancestor_titles: Vec<String> = ancestors.iter().map(|s| s.to_string()).collect();
        let full_name = ancestor_titles
            .iter()
            .cloned()
            .chain(std::iter::once(title.to_string()))
            .collect::<Vec<_>>()
            .join(" ");
        CaseResult {
            ancestor_titles,
            title: title.into(),
            full_name,
            status: CaseStatus::Passed,
            duration: Some(3),
            failure_messages: Vec::new(),
        }
    }

    fn fixture() -> Vec<AnnotatedCase> {
        annotate(
            &[
                case(&["login", "form"], "renders"),
                case(&["login", "form"], "submits"),
                case(&["login"], "redirects"),
                case(&[], "standalone"),
            ],
            None,
        )
    }

    fn headings(groups: &[CaseGroup<'_>]) -> Vec<Option<String>> {
        groups.iter().map(|g| g.heading.clone()).collect()
    }

    #[test]
    fn unmerged_rows_show_full_title_path() {
        let cases = fixture();
        let groups = group_cases(&cases, false, 2);
        assert_eq!(groups.len(), 4);
        assert!(groups.iter().all(|g| g.heading.is_none()));
        assert_eq!(groups[0].rows[0].label, "login › form › renders");
    }

    #[test]
    fn merge_groups_consecutive_cases_by_level() {
        let cases = fixture();

        let groups = group_cases(&cases, true, 1);
        assert_eq!(
            headings(&groups),
            vec![Some("login".to_string()), None]
        );
        assert_eq!(groups[0].rows.len(), 3);
        assert_eq!(groups[0].rows[0].label, "form › renders");
        assert_eq!(groups[0].rows[2].label, "redirects");

        let groups = group_cases(&cases, true, 2);
        assert_eq!(
            headings(&groups),
            vec![
                Some("login › form".to_string()),
                Some("login".to_string()),
                None
            ]
        );
        assert_eq!(groups[0].rows.len(), 2);
    }

    #[test]
    fn case_attachments_are_keyed_by_full_name() {
        let info: FileAttachInfo = serde_json::from_value(serde_json::json!({
            "jest-html-reporters-file-attach": [{ "filePath": "shots/file.png" }],
            "login form renders": [
                { "filePath": "shots/renders.png", "description": "form" }
            ]
        }))
        .unwrap();
        let cases = annotate(
            &[
                case(&["login", "form"], "renders"),
                case(&["login", "form"], "submits"),
            ],
            Some(&info),
        );

        let attachments = cases[0].attachments();
        assert_eq!(attachments.len(), 1);
        assert_eq!(attachments[0].file_path, "shots/renders.png");
        assert!(cases[1].attachments().is_empty());
    }
}
