use std::collections::{BTreeMap, BTreeSet};

/// Every locale must define the fallback's messages with the same placeholders,
/// otherwise `fl!` silently renders the raw `{ $var }` for missing arguments.
const EN_US: &str = include_str!("../i18n/en-US/jestview-ui.ftl");
const ZH_CN: &str = include_str!("../i18n/zh-CN/jestview-ui.ftl");

/// Message id -> placeholder names. Comments, terms and attributes are skipped.
fn messages(src: &str, locale: &str) -> BTreeMap<String, BTreeSet<String>> {
    let mut out = BTreeMap::new();
    for line in src.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('.') {
            continue;
        }
        let Some((id, body)) = trimmed.split_once('=') else {
            continue;
        };
        let id = id.trim();
        if id.is_empty() || id.starts_with('-') || !id.chars().all(|c| c.is_ascii_lowercase() || c == '-') {
            continue;
        }
        let previous = out.insert(id.to_string(), placeholders(body));
        assert!(previous.is_none(), "{locale}: message `{id}` is defined twice");
    }
    out
}

fn placeholders(body: &str) -> BTreeSet<String> {
    body.split("{ $")
        .skip(1)
        .filter_map(|rest| rest.split_whitespace().next())
        .map(|name| name.trim_end_matches('}').to_string())
        .collect()
}

#[test]
fn fallback_is_not_empty() {
    assert!(messages(EN_US, "en-US").len() > 10);
}

#[test]
fn locales_match_fallback() {
    let fallback = messages(EN_US, "en-US");
    let mut failures = Vec::new();

    for (locale, src) in [("zh-CN", ZH_CN)] {
        let translated = messages(src, locale);
        for (id, vars) in &fallback {
            match translated.get(id) {
                None => failures.push(format!("{locale}: missing `{id}`")),
                Some(found) if found != vars => failures.push(format!(
                    "{locale}: `{id}` uses {found:?}, fallback uses {vars:?}"
                )),
                Some(_) => {}
            }
        }
        for id in translated.keys().filter(|id| !fallback.contains_key(*id)) {
            failures.push(format!("{locale}: `{id}` is not in the fallback"));
        }
    }

    assert!(failures.is_empty(), "locale mismatches:\n  {}", failures.join("\n  "));
}

#[test]
fn placeholder_parsing() {
    let vars = placeholders(" Tests: { $total } total, { $passed } passed");
    assert_eq!(
        vars,
        ["passed", "total"].into_iter().map(String::from).collect()
    );
}
