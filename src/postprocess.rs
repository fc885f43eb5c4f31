//! Deterministic cleanup of generated copy.
//!
//! Models ignore "plain text only" often enough that the output is cleaned
//! before it reaches a record. Rules run in order:
//!
//! 1. Normalise line endings (CRLF → LF)
//! 2. Strip outer code fences
//! 3. Strip invisible Unicode (zero-width spaces, BOM, soft hyphens)
//! 4. Remove `**bold**` / `__bold__` / `*italic*` markers, keeping the text
//! 5. Strip a `Title:` style lead-in (titles only)
//! 6. Strip surrounding quotes
//! 7. Collapse whitespace
//!
//! Titles keep only their first non-empty line.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_OUTER_FENCES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^```[a-zA-Z]*\n(.*?)\n?```$").expect("valid regex"));

static RE_BOLD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*|__(.+?)__").expect("valid regex"));

// Markers must sit on word boundaries so `30*20*10cm` keeps its asterisks.
static RE_ITALIC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(^|[^\w*])\*([^*\s][^*]*?[^*\s]|[^*\s])\*($|[^\w*])").expect("valid regex")
});

static RE_LEAD_IN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:optimi[sz]ed\s+)?title\s*:\s*").expect("valid regex")
});

static RE_SPACES: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+").expect("valid regex"));

static RE_BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").expect("valid regex"));

/// Clean a generated description. Paragraph breaks survive; runs of blank
/// lines collapse to one.
pub fn clean_description(raw: &str) -> String {
    let s = common(raw);
    let s = strip_quotes(s.trim());
    let s: Vec<String> = s
        .lines()
        .map(|line| RE_SPACES.replace_all(line.trim(), " ").into_owned())
        .collect();
    RE_BLANK_LINES
        .replace_all(&s.join("\n"), "\n\n")
        .trim()
        .to_string()
}

/// Clean a generated title: first non-empty line, no lead-in, no quotes,
/// single spaces.
pub fn clean_title(raw: &str) -> String {
    let s = common(raw);
    let line = s.lines().map(str::trim).find(|l| !l.is_empty()).unwrap_or("");
    let line = RE_LEAD_IN.replace(line, "");
    let line = strip_quotes(line.trim());
    RE_SPACES.replace_all(line.trim(), " ").into_owned()
}

fn common(raw: &str) -> String {
    let s = raw.replace("\r\n", "\n").replace('\r', "\n");
    let s = strip_fences(s.trim());
    let s = remove_invisible_chars(&s);
    let s = RE_BOLD.replace_all(&s, "$1$2");
    RE_ITALIC.replace_all(&s, "${1}${2}${3}").into_owned()
}

fn strip_fences(input: &str) -> String {
    match RE_OUTER_FENCES.captures(input) {
        Some(caps) => caps[1].to_string(),
        None => input.to_string(),
    }
}

fn remove_invisible_chars(input: &str) -> String {
    input
        .chars()
        .filter(|c| !matches!(c, '\u{200B}' | '\u{200C}' | '\u{200D}' | '\u{FEFF}' | '\u{00AD}'))
        .collect()
}

fn strip_quotes(s: &str) -> &str {
    const PAIRS: [(char, char); 3] = [('"', '"'), ('\'', '\''), ('“', '”')];
    for (open, close) in PAIRS {
        if let Some(inner) = s.strip_prefix(open).and_then(|r| r.strip_suffix(close)) {
            return inner.trim();
        }
    }
    s
}
