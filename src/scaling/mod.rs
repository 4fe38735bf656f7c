//! Proportional propagation of an edit across linked quantities

use tracing::debug;

use crate::formatting::format;
use crate::language::{QuantitySet, TokenId};
use crate::parsing::{normalize, scan};

/// Recompute the display text of every token linked to the one just
/// edited. The edited token's new text is normalized and divided by that
/// token's baseline to get the ratio; everyone else is rendered from their
/// own baseline times that ratio. The edited token itself is left exactly
/// as the user typed it.
///
/// Returns the empty mapping when there is nothing safe to do: unreadable
/// new text (the user may be mid-edit), a degenerate ratio (zero or
/// non-finite baseline arithmetic), or an unknown id. Displays are then
/// left untouched.
///
/// Because each candidate is always derived from an immutable baseline,
/// repeated edits never compound rounding error, and calling this twice
/// with the same inputs yields the same mapping.
pub fn propagate<'i>(
    set: &QuantitySet<'i>,
    edited: TokenId,
    new_text: &str,
) -> Vec<(TokenId, String)> {
    let Some(token) = set.get(edited) else {
        debug!(?edited, "propagate called with an unknown token");
        return Vec::new();
    };

    let Some(value) = normalize(new_text) else {
        debug!(new_text, "edit not yet readable, leaving displays alone");
        return Vec::new();
    };

    let ratio = value / token.baseline_value;
    if !ratio.is_finite() {
        debug!(ratio, "degenerate ratio, leaving displays alone");
        return Vec::new();
    }

    set.iter()
        .filter(|(id, _)| *id != edited)
        .map(|(id, other)| {
            let candidate = other.baseline_value * ratio;
            (id, format(candidate, other.render_as_fraction))
        })
        .collect()
}

/// One editing session over a region of text. Construct it once when the
/// region is selected, hold it while the region is editable, and drop it
/// to discard the tokens; there is no process-wide state.
#[derive(Debug)]
pub struct Rescaler<'i> {
    set: QuantitySet<'i>,
}

impl<'i> Rescaler<'i> {
    /// Scan the selected region and link every quantity found in it.
    pub fn scan(text: &'i str) -> Rescaler<'i> {
        Rescaler { set: scan(text) }
    }

    pub fn tokens(&self) -> &QuantitySet<'i> {
        &self.set
    }

    /// Report that one token's displayed text changed; see [propagate].
    pub fn propagate(&self, edited: TokenId, new_text: &str) -> Vec<(TokenId, String)> {
        propagate(&self.set, edited, new_text)
    }
}
