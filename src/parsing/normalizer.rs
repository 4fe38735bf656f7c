//! Conversion of matched quantity text into a numeric value

use tracing::debug;

use crate::parsing::matcher::best_match;
use crate::regex;

/// Get a numeric value usable in computations out of the given string, or
/// None if the text cannot be read as a finite quantity. Handles vulgar
/// fraction glyphs, slash fractions with an optional leading integer, both
/// decimal separator conventions, the word "half", and trailing garbage
/// left behind while the user is still typing.
pub fn normalize(text: &str) -> Option<f64> {
    // The word form becomes an ordinary fraction before anything else, so
    // that the trailing-letter strip below cannot eat it.
    let text = regex!(r"[Hh]alf").replace(text, "1/2");

    // Remove trailing characters that cannot end a numeric literal, to
    // cover the case when the user is still typing, and any leading
    // whitespace around the edit.
    let text = text.trim_start();
    let text = regex!(r"[.,/a-zA-Z\s]+$").replace(text, "");

    if best_match(&text).is_none() {
        debug!(input = %text, "nothing numeric to normalize");
        return None;
    }

    // A plus sign is prepended to each vulgar fraction so that a leading
    // integer sums with it: "1¾" becomes "1+3/4".
    let text = expand_vulgar_fractions(&text);

    // Rewrite "1 2/3" the same way, then close up the spacing the
    // evaluator's grammar does not admit. Whitespace anywhere else is left
    // to fail evaluation: "1 1" is two half-typed quantities, not eleven.
    let text = regex!(r"(\d+)\s+(\d+)\s*/\s*(\d+)").replace(&text, "$1+$2/$3");
    let text = regex!(r"\s*/\s*").replace_all(&text, "/");
    let text = regex!(r"\s+\+").replace_all(&text, "+");

    // A separator followed by exactly 3 digits is a thousands grouping;
    // whichever "," survives is the decimal point.
    let text = regex!(r"[.,](\d{3})").replace_all(&text, "$1");
    let text = text.replacen(',', ".", 1);

    let value = evaluate(&text)?;

    if value.is_finite() {
        Some(value)
    } else {
        debug!(input = %text, value, "normalized to a non-finite value");
        None
    }
}

fn expand_vulgar_fractions(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match vulgar_fraction(c) {
            Some(expansion) => result.push_str(expansion),
            None => result.push(c),
        }
    }
    result
}

fn vulgar_fraction(c: char) -> Option<&'static str> {
    match c {
        '½' => Some("+1/2"),
        '⅓' => Some("+1/3"),
        '⅔' => Some("+2/3"),
        '¼' => Some("+1/4"),
        '¾' => Some("+3/4"),
        '⅕' => Some("+1/5"),
        '⅖' => Some("+2/5"),
        '⅗' => Some("+3/5"),
        '⅘' => Some("+4/5"),
        '⅙' => Some("+1/6"),
        '⅚' => Some("+5/6"),
        '⅐' => Some("+1/7"),
        '⅛' => Some("+1/8"),
        '⅜' => Some("+3/8"),
        '⅝' => Some("+5/8"),
        '⅞' => Some("+7/8"),
        '⅑' => Some("+1/9"),
        '⅒' => Some("+1/10"),
        _ => None,
    }
}

/// Evaluate a sum-of-fractions expression. This is deliberately a tiny
/// dedicated evaluator for the grammar
///
/// ```text
/// expr   := '+'? term ('+' term)*
/// term   := number ('/' number)?
/// number := digit+ ('.' digit*)?
/// ```
///
/// and nothing more; matched text must never reach a general-purpose
/// expression engine.
fn evaluate(expr: &str) -> Option<f64> {
    let expr = expr
        .strip_prefix('+')
        .unwrap_or(expr);

    let mut total = 0.0;
    for term in expr.split('+') {
        total += evaluate_term(term)?;
    }
    Some(total)
}

fn evaluate_term(term: &str) -> Option<f64> {
    match term.split_once('/') {
        Some((numerator, denominator)) => {
            Some(parse_number(numerator)? / parse_number(denominator)?)
        }
        None => parse_number(term),
    }
}

fn parse_number(text: &str) -> Option<f64> {
    if text.is_empty()
        || !text
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.')
    {
        return None;
    }
    text.parse()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluate_plain_numbers() {
        assert_eq!(evaluate("3"), Some(3.0));
        assert_eq!(evaluate("1000.5"), Some(1000.5));
    }

    #[test]
    fn evaluate_fractions() {
        assert_eq!(evaluate("1/2"), Some(0.5));
        assert_eq!(evaluate("+3/4"), Some(0.75));
        assert_eq!(evaluate("1+1/2"), Some(1.5));
    }

    #[test]
    fn evaluate_rejects_anything_else() {
        assert_eq!(evaluate(""), None);
        assert_eq!(evaluate("1+"), None);
        assert_eq!(evaluate("1x2"), None);
        assert_eq!(evaluate("1.2.3"), None);
        assert_eq!(evaluate("1//2"), None);
        assert_eq!(evaluate("-1"), None);
    }

    #[test]
    fn evaluate_division_by_zero_is_infinite() {
        assert_eq!(evaluate("1/0"), Some(f64::INFINITY));
    }

    #[test]
    fn vulgar_fractions_expand_to_sums() {
        assert_eq!(expand_vulgar_fractions("¾"), "+3/4");
        assert_eq!(expand_vulgar_fractions("1¾"), "1+3/4");
        assert_eq!(expand_vulgar_fractions("2 ⅒"), "2 +1/10");
    }
}
