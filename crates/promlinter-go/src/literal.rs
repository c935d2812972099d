//! Go string literal unquoting.

/// Why a literal could not be unquoted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnquoteError {
    /// Missing or mismatched quotes.
    #[error("literal is not quoted")]
    NotQuoted,
    /// Unknown escape or truncated escape sequence.
    #[error("invalid escape sequence `{0}`")]
    InvalidEscape(String),
    /// `\u` or `\U` naming a surrogate or out-of-range code point.
    #[error("invalid code point U+{0:X}")]
    InvalidCodePoint(u32),
    /// Raw newline inside an interpreted string.
    #[error("newline in string")]
    Newline,
}

/// Returns the value of a Go string literal given its source text.
///
/// Raw strings (backquoted) have carriage returns removed. Interpreted
/// strings have their escape sequences decoded; byte escapes that do not
/// form valid UTF-8 are replaced with U+FFFD.
///
/// # Errors
///
/// Returns [`UnquoteError`] if the text is not a well-formed literal.
pub fn unquote(literal: &str) -> Result<String, UnquoteError> {
    if let Some(body) = literal
        .strip_prefix('`')
        .and_then(|rest| rest.strip_suffix('`'))
    {
        return Ok(body.replace('\r', ""));
    }

    let body = literal
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or(UnquoteError::NotQuoted)?;

    let mut out: Vec<u8> = Vec::with_capacity(body.len());
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => decode_escape(&mut chars, &mut out)?,
            '\n' => return Err(UnquoteError::Newline),
            '"' => return Err(UnquoteError::NotQuoted),
            _ => {
                let mut buf = [0u8; 4];
                out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            }
        }
    }

    Ok(String::from_utf8_lossy(&out).into_owned())
}

fn decode_escape(chars: &mut std::str::Chars<'_>, out: &mut Vec<u8>) -> Result<(), UnquoteError> {
    let Some(c) = chars.next() else {
        return Err(UnquoteError::InvalidEscape("\\".to_string()));
    };

    let simple = match c {
        'a' => Some(0x07),
        'b' => Some(0x08),
        'f' => Some(0x0c),
        'n' => Some(b'\n'),
        'r' => Some(b'\r'),
        't' => Some(b'\t'),
        'v' => Some(0x0b),
        '\\' => Some(b'\\'),
        '"' => Some(b'"'),
        _ => None,
    };
    if let Some(byte) = simple {
        out.push(byte);
        return Ok(());
    }

    match c {
        '0'..='7' => {
            let digits = take_digits(c, chars, 2, 8)?;
            let byte = u32::from_str_radix(&digits, 8)
                .ok()
                .and_then(|value| u8::try_from(value).ok())
                .ok_or_else(|| UnquoteError::InvalidEscape(format!("\\{digits}")))?;
            out.push(byte);
        }
        'x' => {
            let digits = take_hex(c, chars, 2)?;
            let byte = u8::from_str_radix(&digits, 16)
                .map_err(|_| UnquoteError::InvalidEscape(format!("\\x{digits}")))?;
            out.push(byte);
        }
        'u' | 'U' => {
            let len = if c == 'u' { 4 } else { 8 };
            let digits = take_hex(c, chars, len)?;
            let value = u32::from_str_radix(&digits, 16)
                .map_err(|_| UnquoteError::InvalidEscape(format!("\\{c}{digits}")))?;
            let ch = char::from_u32(value).ok_or(UnquoteError::InvalidCodePoint(value))?;
            let mut buf = [0u8; 4];
            out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
        }
        other => return Err(UnquoteError::InvalidEscape(format!("\\{other}"))),
    }

    Ok(())
}

fn take_digits(
    first: char,
    chars: &mut std::str::Chars<'_>,
    more: usize,
    radix: u32,
) -> Result<String, UnquoteError> {
    let mut digits = String::from(first);
    for _ in 0..more {
        match chars.next() {
            Some(d) if d.is_digit(radix) => digits.push(d),
            Some(d) => {
                digits.push(d);
                return Err(UnquoteError::InvalidEscape(format!("\\{digits}")));
            }
            None => return Err(UnquoteError::InvalidEscape(format!("\\{digits}"))),
        }
    }
    Ok(digits)
}

fn take_hex(
    escape: char,
    chars: &mut std::str::Chars<'_>,
    len: usize,
) -> Result<String, UnquoteError> {
    let mut digits = String::with_capacity(len);
    for _ in 0..len {
        match chars.next() {
            Some(d) if d.is_ascii_hexdigit() => digits.push(d),
            _ => return Err(UnquoteError::InvalidEscape(format!("\\{escape}{digits}"))),
        }
    }
    Ok(digits)
}
