use std::collections::{BTreeSet, HashSet};

/// Translation parity test.
/// The page renders both locales from the same fields, so the two
/// `lamejorfigura-ui.ftl` files must define exactly the same message IDs,
/// in both directions, with no duplicates and no gaps in numbered lists.
///
/// This is a lightweight parser:
/// - Ignores comment lines starting with `#`
/// - Treats any line of the form `key =` or `key=` as a message definition
/// - Skips blank / attribute / continuation lines
const EN_US: &str = include_str!("../i18n/en-US/lamejorfigura-ui.ftl");
const ES_ES: &str = include_str!("../i18n/es-ES/lamejorfigura-ui.ftl");

#[test]
fn locales_define_the_same_keys() {
    assert_no_dup_keys(EN_US, "en-US");
    assert_no_dup_keys(ES_ES, "es-ES");

    let en = extract_keys(EN_US);
    let es = extract_keys(ES_ES);
    assert!(!en.is_empty(), "Fallback (en-US) contains no keys.");

    let missing_in_es: BTreeSet<_> = en.difference(&es).collect();
    let extra_in_es: BTreeSet<_> = es.difference(&en).collect();

    if !missing_in_es.is_empty() || !extra_in_es.is_empty() {
        panic!(
            "Locale key sets differ.\n  missing in es-ES: {missing_in_es:?}\n  only in es-ES: {extra_in_es:?}\n\nHint: keep IDs identical across locales."
        );
    }
}

#[test]
fn numbered_lists_have_no_gaps() {
    for (locale, src) in [("en-US", EN_US), ("es-ES", ES_ES)] {
        let keys = extract_keys(src);
        for prefix in ["accepted-item", "not-accepted-item"] {
            let count = keys
                .iter()
                .filter(|k| {
                    k.strip_prefix(prefix)
                        .and_then(|rest| rest.strip_prefix('-'))
                        .is_some_and(|n| n.parse::<u32>().is_ok())
                })
                .count();
            assert!(count > 0, "{locale}: no `{prefix}-N` entries");
            for n in 1..=count {
                assert!(
                    keys.contains(&format!("{prefix}-{n}")),
                    "{locale}: `{prefix}-{n}` missing; list items must be numbered 1..={count}"
                );
            }
        }
    }
}

#[test]
fn navigation_labels_exist_for_every_section() {
    for (locale, src) in [("en-US", EN_US), ("es-ES", ES_ES)] {
        let keys = extract_keys(src);
        for id in ["home", "about", "contact", "gallery", "donations", "social"] {
            assert!(
                keys.contains(&format!("nav-{id}")),
                "{locale}: missing nav-{id}"
            );
        }
    }
}

/// Extract message keys from a Fluent file (simple heuristic).
fn extract_keys(src: &str) -> HashSet<String> {
    let mut keys = HashSet::new();

    for line in src.lines() {
        if let Some(key) = message_key(line) {
            keys.insert(key.to_string());
        }
    }

    keys
}

fn message_key(line: &str) -> Option<&str> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') || line.starts_with('.') {
        return None;
    }
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let valid = !key.is_empty()
        && !key.contains(' ')
        && !key.contains('\t')
        && !key.starts_with('[')
        && !key.starts_with('@');
    valid.then_some(key)
}

/// Assert no duplicate key definitions in a single FTL file (rudimentary).
fn assert_no_dup_keys(src: &str, locale: &str) {
    let mut seen = HashSet::new();
    let mut dups = BTreeSet::new();

    for raw in src.lines() {
        if let Some(key) = message_key(raw) {
            if !seen.insert(key.to_string()) {
                dups.insert(format!("{key}  (line: \"{raw}\")"));
            }
        }
    }

    if !dups.is_empty() {
        panic!(
            "Duplicate key definitions in {locale}:\n  {}",
            dups.into_iter().collect::<Vec<_>>().join("\n  ")
        );
    }
}
