//! Constant evaluation for enumerator initializers.
//!
//! The capability interface promises resolved integral values for
//! enumerators, the way a compiler front-end would report them. tree-sitter
//! only exposes the initializer expression, so this module folds the
//! expressions that actually occur in enum declarations: integer and
//! character literals, unary and binary arithmetic, shifts, bitwise
//! operators, parentheses, and references to earlier enumerators of the
//! same enum. Anything else resolves to `None` and the caller falls back
//! to the implicit-increment rule.

use std::collections::HashMap;
use tree_sitter::Node;

/// Fold a constant expression to an integer, looking up identifiers in the
/// enumerators resolved so far.
pub(crate) fn resolve(node: Node, source: &[u8], known: &HashMap<String, i64>) -> Option<i64> {
    let text = |n: Node| n.utf8_text(source).unwrap_or("").to_string();

    match node.kind() {
        "number_literal" => parse_int(&text(node)),
        "char_literal" => parse_char(&text(node)),
        "identifier" => known.get(&text(node)).copied(),
        "qualified_identifier" => {
            // `Enum::VALUE` style references resolve by their last segment
            let name = node.child_by_field_name("name")?;
            known.get(&text(name)).copied()
        }
        "unary_expression" => {
            let op = text(node.child_by_field_name("operator")?);
            let value = resolve(node.child_by_field_name("argument")?, source, known)?;
            match op.as_str() {
                "-" => Some(value.wrapping_neg()),
                "+" => Some(value),
                "~" => Some(!value),
                "!" => Some((value == 0) as i64),
                _ => None,
            }
        }
        "binary_expression" => {
            let left = resolve(node.child_by_field_name("left")?, source, known)?;
            let op = text(node.child_by_field_name("operator")?);
            let right = resolve(node.child_by_field_name("right")?, source, known)?;
            apply_binary(left, &op, right)
        }
        "parenthesized_expression" => {
            let inner = node.named_child(0)?;
            resolve(inner, source, known)
        }
        _ => None,
    }
}

fn apply_binary(left: i64, op: &str, right: i64) -> Option<i64> {
    match op {
        "+" => Some(left.wrapping_add(right)),
        "-" => Some(left.wrapping_sub(right)),
        "*" => Some(left.wrapping_mul(right)),
        "/" => (right != 0).then(|| left.wrapping_div(right)),
        "%" => (right != 0).then(|| left.wrapping_rem(right)),
        "<<" => Some(left.wrapping_shl(right as u32)),
        ">>" => Some(left.wrapping_shr(right as u32)),
        "&" => Some(left & right),
        "|" => Some(left | right),
        "^" => Some(left ^ right),
        _ => None,
    }
}

/// Parse a C++ integer literal: decimal, hex, octal, binary, with digit
/// separators and integer suffixes.
fn parse_int(literal: &str) -> Option<i64> {
    let cleaned: String = literal.chars().filter(|c| *c != '\'').collect();
    let trimmed = cleaned
        .trim_end_matches(|c: char| matches!(c, 'u' | 'U' | 'l' | 'L' | 'z' | 'Z'))
        .to_string();

    let (digits, radix) = if let Some(rest) = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        (rest, 16)
    } else if let Some(rest) = trimmed
        .strip_prefix("0b")
        .or_else(|| trimmed.strip_prefix("0B"))
    {
        (rest, 2)
    } else if trimmed.len() > 1 && trimmed.starts_with('0') {
        (&trimmed[1..], 8)
    } else {
        (trimmed.as_str(), 10)
    };

    // Parse as u64 so values like 0xFFFFFFFFFFFFFFFF survive the cast
    u64::from_str_radix(digits, radix).ok().map(|v| v as i64)
}

/// Parse a character literal to its numeric value. Multi-character and wide
/// literals are not supported.
fn parse_char(literal: &str) -> Option<i64> {
    let inner = literal.strip_prefix('\'')?.strip_suffix('\'')?;
    let mut chars = inner.chars();
    let first = chars.next()?;

    if first != '\\' {
        return chars.next().is_none().then(|| first as i64);
    }

    let escape = chars.next()?;
    let value = match escape {
        'n' => 10,
        't' => 9,
        'r' => 13,
        '0' => 0,
        '\\' => 92,
        '\'' => 39,
        '"' => 34,
        'x' => i64::from_str_radix(chars.as_str(), 16).ok()?,
        _ => return None,
    };
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int_radixes() {
        assert_eq!(parse_int("42"), Some(42));
        assert_eq!(parse_int("0"), Some(0));
        assert_eq!(parse_int("0x1F"), Some(31));
        assert_eq!(parse_int("0X10"), Some(16));
        assert_eq!(parse_int("0b101"), Some(5));
        assert_eq!(parse_int("010"), Some(8));
        assert_eq!(parse_int("1'000'000"), Some(1_000_000));
    }

    #[test]
    fn test_parse_int_suffixes() {
        assert_eq!(parse_int("7u"), Some(7));
        assert_eq!(parse_int("7UL"), Some(7));
        assert_eq!(parse_int("0xFFull"), Some(255));
    }

    #[test]
    fn test_parse_int_wraps_large_unsigned() {
        assert_eq!(parse_int("0xFFFFFFFFFFFFFFFF"), Some(-1));
    }

    #[test]
    fn test_parse_char() {
        assert_eq!(parse_char("'A'"), Some(65));
        assert_eq!(parse_char("'\\n'"), Some(10));
        assert_eq!(parse_char("'\\x41'"), Some(65));
        assert_eq!(parse_char("'ab'"), None);
    }

    #[test]
    fn test_apply_binary() {
        assert_eq!(apply_binary(1, "<<", 4), Some(16));
        assert_eq!(apply_binary(6, "|", 1), Some(7));
        assert_eq!(apply_binary(10, "/", 0), None);
        assert_eq!(apply_binary(10, "??", 2), None);
    }
}
