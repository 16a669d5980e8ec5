//! Flat `key=value` properties text format.
//!
//! The reader accepts the full flat-properties grammar: `#`/`!` comment
//! lines, blank lines, backslash line continuations, `=`/`:`/whitespace key
//! terminators, and the standard escape sequences including `\uXXXX`. The
//! writer is deliberately narrower so that output is reproducible across
//! builds: UTF-8, sorted keys, one `key=value` pair per line, `\n`
//! separators, no comment header or timestamp.

use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// Render entries as deterministic properties text.
///
/// Keys are written in sorted order. Special characters are escaped in both
/// keys and values; spaces are escaped everywhere in keys but only at the
/// start of values.
pub fn render(entries: &BTreeMap<String, String>) -> String {
    let mut out = String::new();
    for (key, value) in entries {
        escape_into(&mut out, key, true);
        out.push('=');
        escape_into(&mut out, value, false);
        out.push('\n');
    }
    out
}

/// Parse properties text into a key → value mapping.
///
/// Later occurrences of a key overwrite earlier ones.
pub fn parse(text: &str) -> Result<BTreeMap<String, String>> {
    let mut entries = BTreeMap::new();
    let mut lines = text.lines();

    while let Some(line) = lines.next() {
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
            continue;
        }

        let mut logical = trimmed.to_string();
        while ends_with_continuation(&logical) {
            logical.pop();
            match lines.next() {
                Some(next) => logical.push_str(next.trim_start()),
                None => break,
            }
        }

        let (key, value) = split_key_value(&logical)?;
        entries.insert(key, value);
    }

    Ok(entries)
}

fn escape_into(out: &mut String, text: &str, escape_all_spaces: bool) {
    let mut leading = true;
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str(r"\\"),
            '\t' => out.push_str(r"\t"),
            '\n' => out.push_str(r"\n"),
            '\r' => out.push_str(r"\r"),
            '\x0c' => out.push_str(r"\f"),
            '=' | ':' | '#' | '!' => {
                out.push('\\');
                out.push(ch);
            }
            ' ' if escape_all_spaces || leading => out.push_str(r"\ "),
            _ => out.push(ch),
        }
        if ch != ' ' {
            leading = false;
        }
    }
}

/// A logical line continues when it ends with an odd number of backslashes.
fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

fn split_key_value(line: &str) -> Result<(String, String)> {
    let chars: Vec<char> = line.chars().collect();

    // Key runs to the first unescaped separator.
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '\\' => i += 2,
            '=' | ':' => break,
            c if c.is_whitespace() => break,
            _ => i += 1,
        }
    }
    let key_end = i.min(chars.len());
    let key = unescape(&chars[..key_end])?;

    // Skip whitespace, at most one `=`/`:`, then whitespace again.
    let mut i = key_end;
    while i < chars.len() && chars[i].is_whitespace() {
        i += 1;
    }
    if i < chars.len() && (chars[i] == '=' || chars[i] == ':') {
        i += 1;
        while i < chars.len() && chars[i].is_whitespace() {
            i += 1;
        }
    }
    let value = unescape(&chars[i..])?;

    Ok((key, value))
}

fn unescape(chars: &[char]) -> Result<String> {
    let mut out = String::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        let ch = chars[i];
        i += 1;
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.get(i) {
            // Trailing backslash with nothing to escape is dropped.
            None => break,
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\x0c'),
            Some('u') => {
                let end = (i + 5).min(chars.len());
                let digits: String = chars[i + 1..end].iter().collect();
                let code = u32::from_str_radix(&digits, 16).ok().filter(|_| digits.len() == 4);
                match code.and_then(char::from_u32) {
                    Some(decoded) => out.push(decoded),
                    None => {
                        return Err(Error::InvalidEscape {
                            sequence: format!("\\u{digits}"),
                        });
                    }
                }
                i += 4;
            }
            Some(&other) => out.push(other),
        }
        i += 1;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn entries(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn renders_sorted_lines() {
        let text = render(&entries(&[("b", "2"), ("a", "1")]));
        assert_eq!(text, "a=1\nb=2\n");
    }

    #[test]
    fn escapes_specials_in_values() {
        let text = render(&entries(&[("catalogIds", "libs=dev.gross:platform")]));
        assert_eq!(text, "catalogIds=libs\\=dev.gross\\:platform\n");
    }

    #[test]
    fn escapes_spaces_in_keys_but_only_leading_in_values() {
        let text = render(&entries(&[("a key", "  padded value")]));
        assert_eq!(text, "a\\ key=\\ \\ padded value\n");
    }

    #[test]
    fn render_parse_round_trip() {
        let original = entries(&[
            ("description", "Platform: core = plugins + catalogs"),
            ("path", "C:\\temp\\out"),
            ("unicode", "snôwmän ☃"),
        ]);
        let parsed = parse(&render(&original)).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn parses_comments_blanks_and_colon_separator() {
        let text = "# header\n! also a comment\n\nname: value\nother=x\n";
        let parsed = parse(text).unwrap();
        assert_eq!(parsed, entries(&[("name", "value"), ("other", "x")]));
    }

    #[test]
    fn parses_whitespace_separated_key() {
        let parsed = parse("key  value with trailing words").unwrap();
        assert_eq!(parsed, entries(&[("key", "value with trailing words")]));
    }

    #[test]
    fn parses_line_continuation() {
        let text = "pluginIds=one,\\\n    two,\\\n    three\n";
        let parsed = parse(text).unwrap();
        assert_eq!(parsed, entries(&[("pluginIds", "one,two,three")]));
    }

    #[test]
    fn double_backslash_is_not_a_continuation() {
        let parsed = parse("key=ends with backslash\\\\\nnext=1").unwrap();
        assert_eq!(
            parsed,
            entries(&[("key", "ends with backslash\\"), ("next", "1")])
        );
    }

    #[test]
    fn decodes_unicode_escapes() {
        let parsed = parse("greeting=caf\\u00e9").unwrap();
        assert_eq!(parsed, entries(&[("greeting", "café")]));
    }

    #[test]
    fn rejects_malformed_unicode_escape() {
        let err = parse("bad=\\u12").unwrap_err();
        assert!(matches!(err, Error::InvalidEscape { .. }));
        assert!(err.to_string().contains("\\u12"));
    }

    #[test]
    fn last_occurrence_of_a_key_wins() {
        let parsed = parse("key=first\nkey=second\n").unwrap();
        assert_eq!(parsed, entries(&[("key", "second")]));
    }

    #[test]
    fn key_without_separator_has_empty_value() {
        let parsed = parse("orphan\n").unwrap();
        assert_eq!(parsed, entries(&[("orphan", "")]));
    }
}
