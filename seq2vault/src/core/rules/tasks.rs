// src/core/rules/tasks.rs
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Task keywords and the checkbox each one becomes.
pub const TASK_STATES: [(&str, &str); 7] = [
    ("TODO", "[ ]"),
    ("DOING", "[/]"),
    ("NOW", "[/]"),
    ("LATER", "[ ]"),
    ("DONE", "[x]"),
    ("WAITING", "[!]"),
    ("CANCELLED", "[-]"),
];

pub static TASK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^([ \t]*-[ \t]+)(TODO|DOING|NOW|LATER|DONE|WAITING|CANCELLED)[ \t]+")
        .expect("valid task regex")
});

#[must_use]
pub fn checkbox_for(state: &str) -> Option<&'static str> {
    TASK_STATES
        .iter()
        .find(|(keyword, _)| *keyword == state)
        .map(|(_, checkbox)| *checkbox)
}

/// Rewrites `- STATE text` bullets as `- [checkbox] text`.
///
/// The returned count is the number of distinct states present in the note,
/// not the number of tasks rewritten.
#[must_use]
pub fn convert_tasks(content: &str) -> (String, u64) {
    let mut seen = [false; TASK_STATES.len()];

    let converted = TASK_RE.replace_all(content, |caps: &Captures<'_>| {
        let prefix = caps.get(1).map_or("", |m| m.as_str());
        let state = caps.get(2).map_or("", |m| m.as_str());
        match TASK_STATES.iter().position(|(keyword, _)| *keyword == state) {
            Some(index) => {
                if let Some(flag) = seen.get_mut(index) {
                    *flag = true;
                }
                format!("{prefix}{} ", checkbox_for(state).unwrap_or("[ ]"))
            }
            None => caps.get(0).map_or("", |m| m.as_str()).to_owned(),
        }
    });

    let states_present = seen.iter().filter(|present| **present).count();
    (
        converted.into_owned(),
        u64::try_from(states_present).unwrap_or(u64::MAX),
    )
}
