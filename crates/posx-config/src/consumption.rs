//! Config consumption map and unused-key guard.
//!
//! "Recognized pointers" are JSON Pointer prefixes. A `*` token matches any
//! single token (array index or key). A leaf under any recognized prefix is
//! consumed; every other leaf is unused. Callers decide whether unused keys
//! are a warning or an error.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;

/// Prefixes read by [`crate::AnalysisConfig::from_json`]. Must match the
/// fields it actually reads.
static RECOGNIZED: &[&str] = &[
    "/instrument",
    "/fills/*/price",
    "/fills/*/amount",
    "/take_profit",
    "/stop_loss",
    "/initial_capital",
    "/direction",
    "/target_return_pct",
    "/desired_price",
    "/hedge_entry_price",
    "/spot_entry_price",
    "/report/language",
];

pub fn recognized_pointers() -> &'static [&'static str] {
    RECOGNIZED
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnusedKeyPolicy {
    Warn,
    Fail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnusedKeyReport {
    /// Sorted, unique.
    pub consumed_prefixes: Vec<String>,
    /// Sorted.
    pub unused_leaf_pointers: Vec<String>,
}

impl UnusedKeyReport {
    pub fn is_clean(&self) -> bool {
        self.unused_leaf_pointers.is_empty()
    }
}

/// With `Fail`, unused keys are an error. With `Warn`, always `Ok(report)`.
pub fn report_unused_keys(config_json: &Value, policy: UnusedKeyPolicy) -> Result<UnusedKeyReport> {
    let consumed: BTreeSet<String> = RECOGNIZED.iter().map(|p| normalize_pointer(p)).collect();
    let consumed_prefixes: Vec<String> = consumed.into_iter().collect();

    let mut leaves: Vec<String> = Vec::new();
    collect_leaf_pointers(config_json, "", &mut leaves);

    let mut unused: Vec<String> = leaves
        .into_iter()
        .filter(|lp| !consumed_prefixes.iter().any(|cp| is_prefix_pointer(cp, lp)))
        .collect();
    unused.sort();
    unused.dedup();

    let report = UnusedKeyReport {
        consumed_prefixes,
        unused_leaf_pointers: unused,
    };

    if policy == UnusedKeyPolicy::Fail && !report.is_clean() {
        bail!(
            "CONFIG_UNUSED_KEYS: {} unused config leaf key(s) detected. \
            Remove them or fix their spelling. First few: {}",
            report.unused_leaf_pointers.len(),
            preview_list(&report.unused_leaf_pointers, 12)
        );
    }

    Ok(report)
}

/// Leading "/", no trailing "/" unless the pointer is just "/".
fn normalize_pointer(p: &str) -> String {
    let mut s = p.trim().to_string();
    if s.is_empty() {
        return "/".to_string();
    }
    if !s.starts_with('/') {
        s.insert(0, '/');
    }
    while s.ends_with('/') && s.len() > 1 {
        s.pop();
    }
    s
}

/// "/a/b" covers "/a/b" and "/a/b/c" but not "/a/bc". "/a/*/c" covers
/// "/a/0/c" and "/a/x/c/d". "/" covers everything.
fn is_prefix_pointer(prefix: &str, leaf: &str) -> bool {
    if prefix == "/" {
        return true;
    }
    let mut leaf_tokens = leaf.split('/').skip(1);
    for want in prefix.split('/').skip(1) {
        match leaf_tokens.next() {
            Some(got) if want == "*" || want == got => {}
            _ => return false,
        }
    }
    true
}

pub(crate) fn collect_leaf_pointers(v: &Value, prefix: &str, out: &mut Vec<String>) {
    match v {
        Value::Object(map) => {
            for (k, vv) in map.iter() {
                let next = format!("{}/{}", prefix, escape_pointer_token(k));
                collect_leaf_pointers(vv, &next, out);
            }
        }
        Value::Array(arr) => {
            for (i, vv) in arr.iter().enumerate() {
                let next = format!("{}/{}", prefix, i);
                collect_leaf_pointers(vv, &next, out);
            }
        }
        _ => {
            let p = if prefix.is_empty() {
                "/".to_string()
            } else {
                prefix.to_string()
            };
            out.push(p);
        }
    }
}

fn escape_pointer_token(s: &str) -> String {
    s.replace('~', "~0").replace('/', "~1")
}

fn preview_list(items: &[String], n: usize) -> String {
    let take = items.iter().take(n).cloned().collect::<Vec<_>>();
    format!("{:?}", take)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn prefix_boundary_is_a_slash() {
        assert!(is_prefix_pointer("/report", "/report/language"));
        assert!(is_prefix_pointer("/report/language", "/report/language"));
        assert!(!is_prefix_pointer("/report/language", "/report"));
        assert!(!is_prefix_pointer("/stop_loss", "/stop_loss_extra"));
        assert!(is_prefix_pointer("/", "/anything"));
    }

    #[test]
    fn wildcard_matches_one_token() {
        assert!(is_prefix_pointer("/fills/*/price", "/fills/0/price"));
        assert!(is_prefix_pointer("/fills/*/price", "/fills/12/price"));
        assert!(!is_prefix_pointer("/fills/*/price", "/fills/0/side"));
        assert!(!is_prefix_pointer("/fills/*/price", "/fills/0"));
        assert!(!is_prefix_pointer("/fills/*/price", "/fills"));
    }

    #[test]
    fn unknown_key_inside_a_fill_is_unused() {
        let cfg = json!({"fills": [
            {"price": 100000.0, "amount": 1000.0},
            {"price": 90000.0, "amount": 1000.0, "side": "sell"}
        ]});
        let r = report_unused_keys(&cfg, UnusedKeyPolicy::Warn).unwrap();
        assert_eq!(r.unused_leaf_pointers, vec!["/fills/1/side".to_string()]);
    }

    #[test]
    fn registry_matches_analysis_config_fields() {
        let full = crate::AnalysisConfig {
            desired_price: Some(95_000.0),
            ..crate::AnalysisConfig::sample()
        };
        let cfg = serde_json::to_value(&full).unwrap();
        let mut leaves = Vec::new();
        collect_leaf_pointers(&cfg, "", &mut leaves);

        for p in recognized_pointers() {
            assert!(
                leaves.iter().any(|lp| is_prefix_pointer(p, lp)),
                "{p} covers no field of AnalysisConfig"
            );
        }
        let r = report_unused_keys(&cfg, UnusedKeyPolicy::Fail).unwrap();
        assert!(r.is_clean());
    }

    #[test]
    fn pointers_are_normalized() {
        assert_eq!(normalize_pointer("report/language/"), "/report/language");
        assert_eq!(normalize_pointer(""), "/");
        assert_eq!(normalize_pointer("///"), "/");
    }

    #[test]
    fn leaf_tokens_are_escaped() {
        let mut out = Vec::new();
        collect_leaf_pointers(&json!({"a/b": {"c~d": 1}, "e": [true]}), "", &mut out);
        out.sort();
        assert_eq!(out, vec!["/a~1b/c~0d".to_string(), "/e/0".to_string()]);
    }

    #[test]
    fn sibling_of_recognized_report_key_is_unused() {
        let cfg = json!({"report": {"language": "zh", "theme": "dark"}});
        let r = report_unused_keys(&cfg, UnusedKeyPolicy::Warn).unwrap();
        assert_eq!(r.unused_leaf_pointers, vec!["/report/theme".to_string()]);
    }
}
