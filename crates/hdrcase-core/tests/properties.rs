use hdrcase_core::{canonicalize, Mode, Normalizer};
use quickcheck::quickcheck;

fn header_name(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphabetic() || *c == '-')
        .collect()
}

// Removing one opener can join a `b` with a following quote, so repeat.
fn strip_literal_openers(mut s: String) -> String {
    while s.contains("b\"") || s.contains("b'") {
        s = s.replace("b\"", "").replace("b'", "");
    }
    s
}

quickcheck! {
    fn canonicalize_is_idempotent(raw: String) -> bool {
        let name = header_name(&raw);
        let once = canonicalize(&name);
        canonicalize(&once) == once
    }

    fn canonicalize_keeps_length_and_hyphens(raw: String) -> bool {
        let name = header_name(&raw);
        let out = canonicalize(&name);
        out.len() == name.len() && out.eq_ignore_ascii_case(&name)
    }

    fn normalize_text_preserves_lines(lines: Vec<String>, lowercase: bool) -> bool {
        let mode = if lowercase { Mode::Lowercase } else { Mode::Canonical };
        let n = Normalizer::new(mode);

        let text: String = lines
            .iter()
            .map(|l| format!("(X, X, b\"{}\"); b'q' {}\n", header_name(l), l.replace('\n', " ")))
            .collect();

        let once = n.normalize_text(&text);
        let twice = n.normalize_text(&once.text);

        once.lines == lines.len()
            && once.text.matches('\n').count() == text.matches('\n').count()
            && twice.changed_lines.is_empty()
            && twice.text == once.text
    }

    fn line_without_literals_is_untouched(raw: String, lowercase: bool) -> bool {
        let line = strip_literal_openers(raw);
        let mode = if lowercase { Mode::Lowercase } else { Mode::Canonical };
        let res = Normalizer::new(mode).process_line(&line);
        !res.changed && res.line == line.as_str()
    }
}
