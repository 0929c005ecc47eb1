//! Detection of translation key usages in source text.
//!
//! A usage is a call of one of the configured trigger functions whose first
//! argument is a quoted string literal:
//!
//! ```text
//! t("nav.home")
//! i18n.t( 'nav.home', { count } )
//! ```
//!
//! Trigger names are matched literally, never as pattern syntax.

use regex::Regex;

// ============================================================
// Trigger Pattern
// ============================================================

/// Compiled matchers for a set of trigger function names.
#[derive(Debug, Clone)]
pub struct TriggerPattern {
    /// `<fn>( "key"` followed by `,` or `)`.
    call: Regex,
    /// `<fn>( "` at the end of the text, i.e. a key literal being typed.
    open_call: Regex,
}

/// Build the matchers for `names`.
///
/// Every name is escaped and the names are joined as alternatives. Returns
/// `None` when no usable name is given, so an empty configuration matches
/// nothing rather than everything.
pub fn build_trigger_pattern<S: AsRef<str>>(names: &[S]) -> Option<TriggerPattern> {
    let alternatives: Vec<String> = names
        .iter()
        .map(|name| name.as_ref().trim())
        .filter(|name| !name.is_empty())
        .map(regex::escape)
        .collect();
    if alternatives.is_empty() {
        return None;
    }
    let names = alternatives.join("|");

    let call = format!(
        r#"(?:{})\s*\(\s*(?:'([^'\r\n]+)'|"([^"\r\n]+)")\s*[,)]"#,
        names
    );
    let open_call = format!(r#"(?:{})\s*\(\s*['"]$"#, names);

    match (Regex::new(&call), Regex::new(&open_call)) {
        (Ok(call), Ok(open_call)) => Some(TriggerPattern { call, open_call }),
        (Err(e), _) | (_, Err(e)) => {
            log::error!("Failed to build trigger pattern: {}", e);
            None
        }
    }
}

// ============================================================
// Occurrences
// ============================================================

/// A located key literal. `start..end` is the byte range of the key inside
/// the scanned text, excluding the quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageOccurrence {
    pub key: String,
    pub start: usize,
    pub end: usize,
}

impl TriggerPattern {
    /// Find every usage in `text`, in order of appearance.
    ///
    /// A trigger name glued to a preceding identifier character (`format(`
    /// for trigger `t`) is not a call of that trigger.
    pub fn find_occurrences(&self, text: &str) -> Vec<UsageOccurrence> {
        let mut occurrences = Vec::new();
        let mut pos = 0;

        while pos <= text.len() {
            let Some(caps) = self.call.captures_at(text, pos) else {
                break;
            };
            let Some(whole) = caps.get(0) else {
                break;
            };

            if is_identifier_char(text[..whole.start()].chars().next_back()) {
                pos = next_char_boundary(text, whole.start());
                continue;
            }

            if let Some(key) = caps.get(1).or_else(|| caps.get(2)) {
                occurrences.push(UsageOccurrence {
                    key: key.as_str().to_string(),
                    start: key.start(),
                    end: key.end(),
                });
            }
            pos = whole.end();
        }

        occurrences
    }

    /// The key under the cursor at a 0-based `line` and character `column`.
    ///
    /// Only the given line is scanned. A key contains the columns from its
    /// first character up to and including the closing quote, where the
    /// cursor sits right after typing the key.
    pub fn key_at(&self, text: &str, line: usize, column: usize) -> Option<String> {
        let line_text = text.split('\n').nth(line)?;
        let line_text = line_text.strip_suffix('\r').unwrap_or(line_text);

        self.find_occurrences(line_text)
            .into_iter()
            .find(|occurrence| {
                let start = char_column(line_text, occurrence.start);
                let end = char_column(line_text, occurrence.end);
                (start..=end).contains(&column)
            })
            .map(|occurrence| occurrence.key)
    }

    /// True if `line_prefix` ends inside a freshly opened key literal, e.g.
    /// `const label = t("`.
    pub fn is_completion_context(&self, line_prefix: &str) -> bool {
        self.open_call.is_match(line_prefix)
    }
}

fn is_identifier_char(c: Option<char>) -> bool {
    matches!(c, Some(c) if c.is_alphanumeric() || c == '_' || c == '$')
}

fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .chars()
        .next()
        .map(|c| pos + c.len_utf8())
        .unwrap_or(text.len() + 1)
}

fn char_column(line: &str, byte_offset: usize) -> usize {
    line[..byte_offset].chars().count()
}

// ============================================================
// Line Index
// ============================================================

/// Line start offsets for converting byte offsets to positions.
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    text: &'a str,
    offsets: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut offsets = vec![0];
        for (i, c) in text.char_indices() {
            if c == '\n' {
                offsets.push(i + 1);
            }
        }
        Self { text, offsets }
    }

    /// 0-based line and character column of a byte offset.
    pub fn position(&self, offset: usize) -> (usize, usize) {
        let line = match self.offsets.binary_search(&offset) {
            Ok(line) => line,
            Err(line) => line - 1,
        };
        let line_start = self.offsets[line];
        (line, self.text[line_start..offset].chars().count())
    }

    /// The text of a 0-based line, without its line terminator.
    pub fn line_text(&self, line: usize) -> Option<&'a str> {
        let start = *self.offsets.get(line)?;
        let end = self
            .offsets
            .get(line + 1)
            .map(|next| next - 1)
            .unwrap_or(self.text.len());
        let text = &self.text[start..end];
        Some(text.strip_suffix('\r').unwrap_or(text))
    }
}
