//! Parsing and formatting of list literals such as `['Al Pacino', "Talia Shire"]`.
//!
//! Dataframe exports write list-valued cells as the textual form of the
//! list. Only lists of quoted strings are accepted; a bare word or a number
//! inside the brackets is malformed.

use std::iter::Peekable;
use std::str::CharIndices;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListLiteralError {
    #[error("expected '[' at start of list")]
    MissingOpenBracket,
    #[error("expected a quoted string at offset {0}")]
    ExpectedString(usize),
    #[error("unterminated string starting at offset {0}")]
    UnterminatedString(usize),
    #[error("expected ',' or ']' at offset {0}")]
    ExpectedSeparator(usize),
    #[error("list is not closed with ']'")]
    MissingCloseBracket,
    #[error("unexpected text after ']' at offset {0}")]
    TrailingInput(usize),
    #[error("invalid character escape at offset {0}")]
    InvalidEscape(usize),
}

/// Parse a list literal into its items, preserving order.
pub fn parse(text: &str) -> Result<Vec<String>, ListLiteralError> {
    let mut chars = text.char_indices().peekable();
    skip_whitespace(&mut chars);

    match chars.next() {
        Some((_, '[')) => {}
        _ => return Err(ListLiteralError::MissingOpenBracket),
    }

    let mut items = Vec::new();
    loop {
        skip_whitespace(&mut chars);
        match chars.peek().copied() {
            None => return Err(ListLiteralError::MissingCloseBracket),
            Some((_, ']')) => {
                chars.next();
                break;
            }
            Some((start, quote @ ('\'' | '"'))) => {
                chars.next();
                items.push(parse_quoted(&mut chars, quote, start)?);
            }
            Some((offset, _)) => return Err(ListLiteralError::ExpectedString(offset)),
        }

        skip_whitespace(&mut chars);
        match chars.next() {
            Some((_, ',')) => continue,
            Some((_, ']')) => break,
            Some((offset, _)) => return Err(ListLiteralError::ExpectedSeparator(offset)),
            None => return Err(ListLiteralError::MissingCloseBracket),
        }
    }

    skip_whitespace(&mut chars);
    if let Some((offset, _)) = chars.next() {
        return Err(ListLiteralError::TrailingInput(offset));
    }
    Ok(items)
}

/// Format items as a list literal that [`parse`] reads back unchanged.
pub fn format(items: &[String]) -> String {
    let mut out = String::from("[");
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        // Prefer single quotes, switch to double quotes for names like O'Brien.
        let quote = if item.contains('\'') && !item.contains('"') {
            '"'
        } else {
            '\''
        };
        out.push(quote);
        for c in item.chars() {
            match c {
                '\\' => out.push_str("\\\\"),
                '\n' => out.push_str("\\n"),
                '\t' => out.push_str("\\t"),
                '\r' => out.push_str("\\r"),
                c if c == quote => {
                    out.push('\\');
                    out.push(c);
                }
                c => out.push(c),
            }
        }
        out.push(quote);
    }
    out.push(']');
    out
}

fn skip_whitespace(chars: &mut Peekable<CharIndices<'_>>) {
    while chars.next_if(|(_, c)| c.is_whitespace()).is_some() {}
}

fn parse_quoted(
    chars: &mut Peekable<CharIndices<'_>>,
    quote: char,
    start: usize,
) -> Result<String, ListLiteralError> {
    let mut value = String::new();
    loop {
        match chars.next() {
            None => return Err(ListLiteralError::UnterminatedString(start)),
            Some((_, c)) if c == quote => return Ok(value),
            Some((offset, '\\')) => match chars.next() {
                None => return Err(ListLiteralError::UnterminatedString(start)),
                Some((_, 'n')) => value.push('\n'),
                Some((_, 't')) => value.push('\t'),
                Some((_, 'r')) => value.push('\r'),
                Some((_, c @ ('\\' | '\'' | '"'))) => value.push(c),
                Some((_, 'x')) => value.push(code_point(chars, 2, offset)?),
                Some((_, 'u')) => value.push(code_point(chars, 4, offset)?),
                Some((_, 'U')) => value.push(code_point(chars, 8, offset)?),
                // Unknown escapes keep their backslash.
                Some((_, c)) => {
                    value.push('\\');
                    value.push(c);
                }
            },
            Some((_, c)) => value.push(c),
        }
    }
}

/// Read exactly `digits` hex digits after `\x`, `\u` or `\U`.
fn code_point(
    chars: &mut Peekable<CharIndices<'_>>,
    digits: usize,
    offset: usize,
) -> Result<char, ListLiteralError> {
    let mut code = 0u32;
    for _ in 0..digits {
        let digit = chars
            .next_if(|(_, c)| c.is_ascii_hexdigit())
            .and_then(|(_, c)| c.to_digit(16))
            .ok_or(ListLiteralError::InvalidEscape(offset))?;
        code = code * 16 + digit;
    }
    char::from_u32(code).ok_or(ListLiteralError::InvalidEscape(offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_single_and_double_quotes() {
        let parsed = parse(r#"['Marlon Brando', "Al Pacino"]"#).unwrap();
        assert_eq!(parsed, strings(&["Marlon Brando", "Al Pacino"]));
    }

    #[test]
    fn parses_empty_and_whitespace_padded_lists() {
        assert!(parse("[]").unwrap().is_empty());
        assert!(parse("  [ ]  ").unwrap().is_empty());
        assert_eq!(parse(" [ 'A' ,'B', ] ").unwrap(), strings(&["A", "B"]));
    }

    #[test]
    fn handles_embedded_quotes_and_escapes() {
        assert_eq!(parse(r#"["Jack O'Connell"]"#).unwrap(), strings(&["Jack O'Connell"]));
        assert_eq!(parse(r"['Jack O\'Connell']").unwrap(), strings(&["Jack O'Connell"]));
        assert_eq!(parse(r"['a\\b', 'c\qd']").unwrap(), strings(&[r"a\b", r"c\qd"]));
    }

    #[test]
    fn decodes_hex_and_unicode_escapes() {
        assert_eq!(parse(r"['A\xa0B']").unwrap(), strings(&["A\u{a0}B"]));
        assert_eq!(
            parse(r"['Bj\u00f6rk', 'Ko\U0001F600']").unwrap(),
            strings(&["Björk", "Ko\u{1F600}"])
        );
        assert_eq!(parse(r"['\x41\x42']").unwrap(), strings(&["AB"]));
    }

    #[test]
    fn rejects_bad_escapes() {
        assert_eq!(parse(r"['A\xZ0']"), Err(ListLiteralError::InvalidEscape(3)));
        assert_eq!(parse(r"['\u12']"), Err(ListLiteralError::InvalidEscape(2)));
        assert_eq!(parse(r"['\ud800']"), Err(ListLiteralError::InvalidEscape(2)));
        assert_eq!(parse(r"['\U00110000']"), Err(ListLiteralError::InvalidEscape(2)));
    }

    #[test]
    fn keeps_non_ascii_names() {
        assert_eq!(
            parse("['Björk', 'Zoë Kravitz']").unwrap(),
            strings(&["Björk", "Zoë Kravitz"])
        );
    }

    #[test]
    fn rejects_non_list_text() {
        assert_eq!(parse("Tom Hanks"), Err(ListLiteralError::MissingOpenBracket));
        assert_eq!(parse(""), Err(ListLiteralError::MissingOpenBracket));
    }

    #[test]
    fn rejects_malformed_items() {
        assert_eq!(parse("[Tom Hanks]"), Err(ListLiteralError::ExpectedString(1)));
        assert_eq!(parse("[1, 2]"), Err(ListLiteralError::ExpectedString(1)));
        assert_eq!(parse("['a' 'b']"), Err(ListLiteralError::ExpectedSeparator(5)));
        assert_eq!(parse("['a'"), Err(ListLiteralError::MissingCloseBracket));
        assert_eq!(parse("['a"), Err(ListLiteralError::UnterminatedString(1)));
        assert_eq!(parse("['a'] x"), Err(ListLiteralError::TrailingInput(6)));
    }

    #[test]
    fn format_reads_back() {
        let items = strings(&["O'Brien", "say \"hi\"", "both ' and \"", "back\\slash", ""]);
        assert_eq!(parse(&format(&items)).unwrap(), items);
        assert_eq!(format(&strings(&["A", "B"])), "['A', 'B']");
        assert_eq!(format(&[]), "[]");
    }
}
