//! Types representing quantity occurrences tracked within a region of text

use crate::regex;
use serde::Serialize;

/// Byte offsets of a matched quantity within the scanned text. The core
/// records these as provenance for the caller to splice with; it never
/// consumes them itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// Identity of a token within one QuantitySet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TokenId(pub usize);

/// One detected quantity occurrence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuantityToken<'i> {
    /// The exact substring that matched, as written.
    pub raw_text: &'i str,
    pub span: Span,
    /// Numeric value at creation time. Fixed for the token's lifetime;
    /// every later displayed value is derived as baseline × ratio.
    pub baseline_value: f64,
    /// Whether rescaled values should be rendered as a common fraction
    /// when one fits.
    pub render_as_fraction: bool,
}

impl<'i> QuantityToken<'i> {
    /// Create a token, deciding up front whether rescaled values should
    /// prefer fraction form. They should if the matched text was itself
    /// written as a fraction, or if the surrounding text names a
    /// measuring-spoon family unit.
    pub fn new(
        raw_text: &'i str,
        span: Span,
        baseline_value: f64,
        surrounding_text: &str,
    ) -> QuantityToken<'i> {
        let render_as_fraction =
            is_fraction_literal(raw_text) || names_measuring_unit(surrounding_text);

        QuantityToken {
            raw_text,
            span,
            baseline_value,
            render_as_fraction,
        }
    }
}

/// The tokens currently linked within one region. Unordered for
/// propagation purposes; ids exist so the just-edited token can be
/// excluded when the rest are rescaled.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct QuantitySet<'i> {
    tokens: Vec<QuantityToken<'i>>,
}

impl<'i> QuantitySet<'i> {
    pub fn new() -> QuantitySet<'i> {
        QuantitySet { tokens: Vec::new() }
    }

    pub fn insert(&mut self, token: QuantityToken<'i>) -> TokenId {
        let id = TokenId(
            self.tokens
                .len(),
        );
        self.tokens
            .push(token);
        id
    }

    pub fn get(&self, id: TokenId) -> Option<&QuantityToken<'i>> {
        self.tokens
            .get(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (TokenId, &QuantityToken<'i>)> {
        self.tokens
            .iter()
            .enumerate()
            .map(|(i, token)| (TokenId(i), token))
    }

    pub fn len(&self) -> usize {
        self.tokens
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens
            .is_empty()
    }
}

/// Was the text written as a fraction? Covers the vulgar fraction glyphs,
/// slash fractions, and the word "half".
pub fn is_fraction_literal(text: &str) -> bool {
    let re = regex!(r"[½⅓⅔¼¾⅕⅖⅗⅘⅙⅚⅐⅛⅜⅝⅞⅑⅒/]|[Hh]alf");
    re.is_match(text)
}

/// Does the surrounding text mention a small-volume measuring unit?
/// Quantities of those read better as fractions ("1/2 tsp", not "0.5 tsp").
pub fn names_measuring_unit(text: &str) -> bool {
    let re = regex!(r"(?i)\b(?:tablespoon|tbsp|cup|teaspoon|tsp)s?\b");
    re.is_match(text)
}
