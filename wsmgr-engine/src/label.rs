//! The `"<num>: <label>"` naming convention.
//!
//! A workspace name is either a bare number (`"4"`), a number with a label
//! (`"4: mail"`), or free text the window manager could not number
//! (`"mail"`). Free text is kept as the label so renumbering never drops it.

use once_cell::sync::Lazy;
use regex::Regex;

static LABELED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^(\d+): (.*)").expect("label pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedName {
    pub num: Option<i64>,
    pub label: Option<String>,
}

pub fn decode(name: &str) -> DecodedName {
    if let Some(caps) = LABELED.captures(name) {
        return DecodedName {
            num: caps[1].parse().ok(),
            label: Some(caps[2].to_string()),
        };
    }
    if !name.is_empty() && name.bytes().all(|b| b.is_ascii_digit()) {
        return DecodedName {
            num: name.parse().ok(),
            label: None,
        };
    }
    DecodedName {
        num: None,
        label: (!name.is_empty()).then(|| name.to_string()),
    }
}

pub fn encode(num: i64, label: Option<&str>) -> String {
    match label {
        Some(label) if !label.is_empty() => format!("{num}: {label}"),
        _ => num.to_string(),
    }
}

/// Name to send when the user edits a row currently numbered `current_num`.
///
/// Text already carrying the `"<num>: "` prefix is used as typed; anything
/// else gets the prefix prepended. Rows without a number (`num < 0`) take the
/// text verbatim.
pub fn edited_name(current_num: i64, new_text: &str) -> String {
    if current_num < 0 {
        return new_text.to_string();
    }
    let prefix = format!("{current_num}: ");
    if new_text.starts_with(&prefix) {
        new_text.to_string()
    } else {
        format!("{prefix}{new_text}")
    }
}

/// `name` moved to position number `expected`, label kept.
///
/// An empty label (`"3: "`) stays empty but keeps its separator.
pub fn renumbered_name(name: &str, expected: i64) -> String {
    match decode(name).label {
        Some(label) => format!("{expected}: {label}"),
        None => expected.to_string(),
    }
}
