//! Pattern matching for quantities written in free-form text

use serde::Serialize;

use crate::regex;

/// The ways a quantity can be written. Listed in tie-break order: when two
/// classes match substrings of equal length, the earlier-listed class wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PatternClass {
    /// A unicode vulgar fraction glyph, optionally preceded by an integer:
    /// "½", "1½", "1 ½".
    VulgarFraction,
    /// A slash fraction, optionally preceded by an integer: "1/2",
    /// "1 / 2", "1 1/2".
    SlashFraction,
    /// A decimal with "." as decimal separator and "," grouping thousands:
    /// "1", "1.2", "1,000.25".
    DecimalPoint,
    /// A decimal with "," as decimal separator and "." grouping thousands:
    /// "1,2", "1.000,25".
    DecimalComma,
    /// The literal word "half" or "Half".
    HalfWord,
}

/// The best quantity occurrence found in a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuantityMatch<'i> {
    pub text: &'i str,
    pub start: usize,
    pub end: usize,
    pub class: PatternClass,
}

/// Find the single best quantity occurrence in the given text, or None if
/// nothing matches. Each pattern class is tried independently and the
/// longest matched substring wins, wherever it sits in the input; a shorter
/// match of another class earlier in the text does not take precedence.
/// This is what keeps "1 1/2" from being read as the bare integer "1".
///
/// The decimal separator conventions are guessed automatically, assuming at
/// most 2 decimal places are in use: whichever of the two decimal classes
/// covers more of the input governs.
pub fn best_match(text: &str) -> Option<QuantityMatch<'_>> {
    let patterns = [
        (
            PatternClass::VulgarFraction,
            regex!(r"([1-9]\d*\s?)?(½|⅓|⅔|¼|¾|⅕|⅖|⅗|⅘|⅙|⅚|⅐|⅛|⅜|⅝|⅞|⅑|⅒)"),
        ),
        (
            PatternClass::SlashFraction,
            regex!(r"([1-9]\d*\s)?[1-9]\d*\s?/\s?[1-9]\d*"),
        ),
        (
            PatternClass::DecimalPoint,
            regex!(r"[1-9](\d|,\d{3})*(\.\d{1,2})?"),
        ),
        (
            PatternClass::DecimalComma,
            regex!(r"[1-9](\d|\.\d{3})*(,\d{1,2})?"),
        ),
        (PatternClass::HalfWord, regex!(r"[Hh]alf")),
    ];

    let mut best: Option<QuantityMatch> = None;
    let mut best_length = 0;

    for (class, pattern) in patterns {
        if let Some(found) = pattern.find(text) {
            // Lengths are compared in characters, not bytes, so a vulgar
            // fraction glyph counts the same as any other single character.
            let length = found
                .as_str()
                .chars()
                .count();
            if length > best_length {
                best_length = length;
                best = Some(QuantityMatch {
                    text: found.as_str(),
                    start: found.start(),
                    end: found.end(),
                    class,
                });
            }
        }
    }

    best
}
