//! Positional placeholder formatting
//!
//! Implements the `{n}` composite format grammar used by message templates:
//! `{0}` substitutes the first value, `{{` and `}}` are literal braces.
//! Malformed templates fail with a [`FormatError`] instead of passing
//! through, so a mis-specified message surfaces to the caller.

use crate::argument::FormatValue;
use crate::error::{FormatError, FormatResult};

/// Substitute positional `{n}` placeholders in `template` with `values`.
///
/// Substitution is a single pass; replaced text is never re-scanned for
/// placeholders. Supplying more values than the template references is
/// allowed, a placeholder without a value is not.
pub fn format_positional(template: &str, values: &[FormatValue]) -> FormatResult<String> {
    let mut result = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((position, ch)) = chars.next() {
        match ch {
            '{' => {
                if matches!(chars.peek(), Some((_, '{'))) {
                    chars.next();
                    result.push('{');
                    continue;
                }

                let mut token = String::new();
                let mut closed = false;
                for (_, c) in chars.by_ref() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    token.push(c);
                }

                if !closed {
                    return Err(FormatError::UnclosedPlaceholder { position });
                }

                let index: usize =
                    token
                        .parse()
                        .map_err(|_| FormatError::InvalidIndex {
                            placeholder: token.clone(),
                            position,
                        })?;

                let value =
                    values
                        .get(index)
                        .ok_or(FormatError::IndexOutOfRange {
                            index,
                            supplied: values.len(),
                        })?;
                result.push_str(&value.to_string());
            }
            '}' => {
                if matches!(chars.peek(), Some((_, '}'))) {
                    chars.next();
                    result.push('}');
                } else {
                    return Err(FormatError::UnmatchedBrace { position });
                }
            }
            _ => result.push(ch),
        }
    }

    Ok(result)
}
