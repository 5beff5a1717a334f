//! Normalisation of free-text answers and decorated menu choices

use std::sync::LazyLock;

use regex::{NoExpand, Regex};

use crate::messages::style::Styler;
use crate::theme;

/// Marker between a menu choice and its documentation
pub const DOCUMENTATION_DELIMITER: char = '→';

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

static ANSI_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*[A-Za-z]").expect("escape pattern is valid"));

/// Collapse each run of whitespace in `s` into a single `separator`.
///
/// Leading and trailing runs are collapsed too, not trimmed.
#[must_use]
pub fn replace_whitespace(s: &str, separator: &str) -> String {
    WHITESPACE.replace_all(s, NoExpand(separator)).into_owned()
}

/// Recover the command text of a menu choice rendered by [`document_choice`].
///
/// Everything from the first [`DOCUMENTATION_DELIMITER`] on is dropped, terminal
/// escape sequences are ignored, and the result is trimmed. A choice without a
/// delimiter is returned trimmed.
#[must_use]
pub fn undocumented_choice(displayed: &str) -> String {
    let plain = ANSI_ESCAPE.replace_all(displayed, "");
    let choice = match plain.split_once(DOCUMENTATION_DELIMITER) {
        Some((choice, _)) => choice,
        None => &plain,
    };
    choice.trim().to_string()
}

/// Decorate a menu choice with its description as `"<choice> → <description>"`.
#[must_use]
pub fn document_choice(choice: &str, description: Option<&str>, styler: &Styler) -> String {
    match description.map(str::trim).filter(|d| !d.is_empty()) {
        Some(description) => format!(
            "{choice} {} {}",
            styler.apply(theme::ARROW, &DOCUMENTATION_DELIMITER.to_string()),
            styler.apply(theme::DIM, description)
        ),
        None => choice.to_string(),
    }
}
