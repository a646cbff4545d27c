//! Heading anchor slugs.

use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\-]+").expect("valid regex"));
static HYPHEN_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-{2,}").expect("valid regex"));

/// Converts heading text into an anchor identifier.
///
/// Lowercases and trims the text, turns whitespace runs into hyphens,
/// spells out `&` as `-and-`, drops every character outside
/// `[A-Za-z0-9_-]` and collapses repeated hyphens. Identical input always
/// yields the identical slug, so duplicate headings share one anchor.
///
/// # Examples
///
/// ```
/// use quillpost::slugify;
///
/// assert_eq!(slugify("Hello, World!"), "hello-world");
/// assert_eq!(slugify("A & B"), "a-and-b");
/// ```
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let hyphenated = WHITESPACE.replace_all(lowered.trim(), "-");
    let spelled = hyphenated.replace('&', "-and-");
    let stripped = NON_WORD.replace_all(&spelled, "");
    HYPHEN_RUNS.replace_all(&stripped, "-").into_owned()
}
