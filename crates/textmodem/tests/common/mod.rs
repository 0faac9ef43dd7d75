//! A small JSON-like grammar used to exercise the cursor engine end to end.
#![allow(dead_code)]

use textmodem::{
    Cursor, Grammar, KeywordMatcher, ParseError, TreeAssembler, UnicodeEscape, Value,
    ValueAssembler,
};

#[derive(Debug, Default)]
pub struct MiniJson;

impl Grammar for MiniJson {
    fn finish<A: TreeAssembler>(
        &mut self,
        cursor: &mut Cursor,
        assembler: &mut A,
    ) -> Result<(), ParseError> {
        skip_whitespace(cursor);
        match cursor.current() {
            None => return Err(ParseError::EndOfFile),
            Some('[') => {
                assembler.start_root(Value::empty_array());
                parse_array(cursor, |item| assembler.child_produced(item, None))?;
            }
            Some('{') => {
                assembler.start_root(Value::empty_object());
                parse_object(cursor, |key, member| {
                    assembler.child_produced(member, Some(key));
                })?;
            }
            Some(_) => {
                let scalar = parse_value(cursor)?;
                assembler.start_root(scalar.clone());
                assembler.child_produced(scalar, None);
            }
        }
        assembler.complete_root();

        skip_whitespace(cursor);
        if cursor.current().is_some() {
            return Err(cursor.unexpected_character());
        }
        Ok(())
    }
}

fn skip_whitespace(cursor: &mut Cursor) {
    cursor.skip_while(|c| matches!(c, ' ' | '\t' | '\n' | '\r' | '\u{0C}'));
}

/// Steps past a closing delimiter, which may be the last code point.
fn close(cursor: &mut Cursor) {
    let _ = cursor.advance();
}

fn parse_value(cursor: &mut Cursor) -> Result<Value, ParseError> {
    match cursor.current() {
        None => Err(ParseError::EndOfFile),
        Some('[') => {
            let mut nested = ValueAssembler::new();
            nested.start_root(Value::empty_array());
            parse_array(cursor, |item| nested.child_produced(item, None))?;
            nested.complete_root();
            nested.into_output().ok_or(ParseError::Unknown)
        }
        Some('{') => {
            let mut nested = ValueAssembler::new();
            nested.start_root(Value::empty_object());
            parse_object(cursor, |key, member| nested.child_produced(member, Some(key)))?;
            nested.complete_root();
            nested.into_output().ok_or(ParseError::Unknown)
        }
        Some('"') => parse_string(cursor).map(Value::String),
        Some('n') => KeywordMatcher::new("null").match_at(cursor).map(|()| Value::Null),
        Some('t') => KeywordMatcher::new("true")
            .match_at(cursor)
            .map(|()| Value::Boolean(true)),
        Some('f') => KeywordMatcher::new("false")
            .match_at(cursor)
            .map(|()| Value::Boolean(false)),
        Some(c) if c == '-' || c.is_ascii_digit() => parse_number(cursor),
        Some(_) => Err(cursor.unexpected_character()),
    }
}

fn parse_array<F>(cursor: &mut Cursor, mut emit: F) -> Result<(), ParseError>
where
    F: FnMut(Value),
{
    cursor.advance()?;
    skip_whitespace(cursor);
    if cursor.current() == Some(']') {
        close(cursor);
        return Ok(());
    }

    loop {
        emit(parse_value(cursor)?);
        skip_whitespace(cursor);
        match cursor.current() {
            Some(',') => {
                cursor.advance()?;
                skip_whitespace(cursor);
            }
            Some(']') => {
                close(cursor);
                return Ok(());
            }
            Some(_) => return Err(cursor.unexpected_character()),
            None => return Err(ParseError::EndOfFile),
        }
    }
}

fn parse_object<F>(cursor: &mut Cursor, mut emit: F) -> Result<(), ParseError>
where
    F: FnMut(String, Value),
{
    cursor.advance()?;
    skip_whitespace(cursor);
    if cursor.current() == Some('}') {
        close(cursor);
        return Ok(());
    }

    loop {
        match cursor.current() {
            Some('"') => {}
            Some(_) => return Err(cursor.unexpected_character()),
            None => return Err(ParseError::EndOfFile),
        }
        let key = parse_string(cursor)?;

        skip_whitespace(cursor);
        match cursor.current() {
            Some(':') => cursor.advance().map(drop)?,
            Some(_) => return Err(cursor.unexpected_character()),
            None => return Err(ParseError::EndOfFile),
        }
        skip_whitespace(cursor);

        let member = parse_value(cursor)?;
        emit(key, member);

        skip_whitespace(cursor);
        match cursor.current() {
            Some(',') => {
                cursor.advance()?;
                skip_whitespace(cursor);
            }
            Some('}') => {
                close(cursor);
                return Ok(());
            }
            Some(_) => return Err(cursor.unexpected_character()),
            None => return Err(ParseError::EndOfFile),
        }
    }
}

fn parse_string(cursor: &mut Cursor) -> Result<String, ParseError> {
    let mut out = String::new();
    loop {
        let c = next_in_string(cursor)?;
        match c {
            '"' => {
                close(cursor);
                return Ok(out);
            }
            '\\' => match next_in_string(cursor)? {
                e @ ('"' | '\\' | '/') => out.push(e),
                'b' => out.push('\u{08}'),
                'f' => out.push('\u{0C}'),
                'n' => out.push('\n'),
                'r' => out.push('\r'),
                't' => out.push('\t'),
                'u' => out.push(parse_unicode_escape(cursor)?),
                _ => return Err(cursor.unexpected_character()),
            },
            c => out.push(c),
        }
    }
}

fn next_in_string(cursor: &mut Cursor) -> Result<char, ParseError> {
    cursor
        .advance()
        .map_err(|_| ParseError::UnterminatedString)
}

/// Decodes the digits after `\u`, including a following `\uXXXX` low
/// surrogate when the first escape is a high one.
fn parse_unicode_escape(cursor: &mut Cursor) -> Result<char, ParseError> {
    let mut escape = UnicodeEscape::new();
    loop {
        for _ in 0..4 {
            if let Some(decoded) = escape.feed(next_in_string(cursor)?)? {
                return Ok(decoded);
            }
        }
        if !escape.awaiting_low_surrogate() {
            return Err(ParseError::InvalidUnicode);
        }
        if next_in_string(cursor)? != '\\' || next_in_string(cursor)? != 'u' {
            return Err(ParseError::InvalidUnicode);
        }
    }
}

fn parse_number(cursor: &mut Cursor) -> Result<Value, ParseError> {
    let mut text = String::new();

    if cursor.current() == Some('-') {
        text.push('-');
        cursor.advance()?;
    }

    if cursor.current() == Some('0') {
        text.push('0');
        let _ = cursor.advance();
        if cursor.current().is_some_and(|c| c.is_ascii_digit()) {
            return Err(cursor.invalid_number());
        }
    } else {
        digits(cursor, &mut text)?;
    }

    if cursor.current() == Some('.') {
        text.push('.');
        cursor.advance()?;
        digits(cursor, &mut text)?;
    }

    if let Some(e @ ('e' | 'E')) = cursor.current() {
        text.push(e);
        cursor.advance()?;
        if let Some(sign @ ('+' | '-')) = cursor.current() {
            text.push(sign);
            cursor.advance()?;
        }
        digits(cursor, &mut text)?;
    }

    text.parse::<f64>()
        .map(Value::Number)
        .map_err(|_| cursor.invalid_number())
}

/// One or more ASCII digits.
fn digits(cursor: &mut Cursor, text: &mut String) -> Result<(), ParseError> {
    match cursor.current() {
        None => Err(ParseError::EndOfFile),
        Some(c) if c.is_ascii_digit() => {
            cursor.advance_while(text, |c| c.is_ascii_digit());
            Ok(())
        }
        Some(_) => Err(cursor.invalid_number()),
    }
}
