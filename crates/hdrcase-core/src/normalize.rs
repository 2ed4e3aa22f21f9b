// crates/hdrcase-core/src/normalize.rs

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::canonical::{canonicalize, is_canonical, upper_form};
use crate::error::{HdrError, Result};

// `b"content-type");` closing a row of the standard header table, optionally
// already carrying its uppercase constant: `b"Content-Type", b"CONTENT-TYPE");`.
static HEADER_LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"b"([A-Za-z-]+)"(?:, b"[A-Za-z-]*")?\);"#).expect("header literal pattern")
});

static CHAR_LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"b'([a-z])'").expect("char literal pattern"));

/// Rewrite rule applied to header-name literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// `b"Content-Type", b"CONTENT-TYPE");` -> `b"content-type");`
    Lowercase,
    /// `b"content-type");` -> `b"Content-Type", b"CONTENT-TYPE");`
    #[default]
    Canonical,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Lowercase => "lowercase",
            Mode::Canonical => "canonical",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = HdrError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "lowercase" => Ok(Mode::Lowercase),
            "canonical" => Ok(Mode::Canonical),
            _ => Err(HdrError::UnknownMode(s.to_string())),
        }
    }
}

/// Result of running a single line through the [`Normalizer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineOutcome<'a> {
    pub line: Cow<'a, str>,
    pub changed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangedLine {
    /// 1-based position in the input.
    pub number: usize,
    /// New line content with trailing whitespace trimmed.
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextOutcome {
    pub text: String,
    pub lines: usize,
    pub changed_lines: Vec<ChangedLine>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalizer {
    pub mode: Mode,
    pub upper_chars: bool,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}

impl Normalizer {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            upper_chars: true,
        }
    }

    pub fn with_upper_chars(mut self, on: bool) -> Self {
        self.upper_chars = on;
        self
    }

    /// Rewrite header-name and character literals on one line.
    ///
    /// Lines without a matching literal come back borrowed and unchanged.
    /// `changed` compares content, so a line already at its fixed point
    /// reports no change even though the patterns matched.
    pub fn process_line<'a>(&self, line: &'a str) -> LineOutcome<'a> {
        let headers = match self.mode {
            Mode::Lowercase => HEADER_LITERAL.replace_all(line, lower_header),
            Mode::Canonical => HEADER_LITERAL.replace_all(line, paired_header),
        };

        let out = if self.upper_chars {
            match headers {
                Cow::Borrowed(s) => CHAR_LITERAL.replace_all(s, upper_char),
                Cow::Owned(s) => Cow::Owned(CHAR_LITERAL.replace_all(&s, upper_char).into_owned()),
            }
        } else {
            headers
        };

        let changed = out.as_ref() != line;
        LineOutcome { line: out, changed }
    }

    /// Run [`process_line`](Self::process_line) over every line of `text`,
    /// keeping line terminators as they are.
    pub fn normalize_text(&self, text: &str) -> TextOutcome {
        let mut out = String::with_capacity(text.len());
        let mut changed_lines = Vec::new();
        let mut lines = 0usize;

        for (i, line) in text.split_inclusive('\n').enumerate() {
            lines += 1;
            let res = self.process_line(line);
            if res.changed {
                changed_lines.push(ChangedLine {
                    number: i + 1,
                    text: res.line.trim_end().to_string(),
                });
            }
            out.push_str(&res.line);
        }

        TextOutcome {
            text: out,
            lines,
            changed_lines,
        }
    }
}

fn lower_header(caps: &Captures<'_>) -> String {
    format!("b\"{}\");", caps[1].to_ascii_lowercase())
}

fn paired_header(caps: &Captures<'_>) -> String {
    let display = canonicalize(&caps[1]);
    debug_assert!(is_canonical(&display));
    let upper = upper_form(&display);
    format!("b\"{display}\", b\"{upper}\");")
}

fn upper_char(caps: &Captures<'_>) -> String {
    format!("b'{}'", caps[1].to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_parses_case_insensitively() {
        assert_eq!("Lowercase".parse::<Mode>().unwrap(), Mode::Lowercase);
        assert_eq!("CANONICAL".parse::<Mode>().unwrap(), Mode::Canonical);
        assert!(matches!(
            "upper".parse::<Mode>(),
            Err(HdrError::UnknownMode(m)) if m == "upper"
        ));
    }

    #[test]
    fn mode_display_round_trips_through_from_str() {
        for m in [Mode::Lowercase, Mode::Canonical] {
            assert_eq!(m.to_string().parse::<Mode>().unwrap(), m);
        }
    }

    #[test]
    fn untouched_line_stays_borrowed() {
        let n = Normalizer::default();
        let res = n.process_line("    let x = 1;\n");
        assert!(matches!(res.line, Cow::Borrowed(_)));
        assert!(!res.changed);
    }

    #[test]
    fn char_pass_can_be_disabled() {
        let n = Normalizer::new(Mode::Lowercase).with_upper_chars(false);
        let res = n.process_line("b'a', b'b',\n");
        assert_eq!(res.line, "b'a', b'b',\n");
        assert!(!res.changed);
    }
}
