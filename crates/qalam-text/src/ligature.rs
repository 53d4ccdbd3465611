#![forbid(unsafe_code)]

//! Lam-Alef ligature resolution.
//!
//! Resolution runs in two separate passes over the arena: [`mark_ligatures`]
//! rewrites each Lam that precedes an Alef variant into the ligature glyph and
//! tombstones the Alef slot, then [`purge_removed`] compacts the tombstones
//! away. Diacritics between the two letters are stepped over and kept.

use crate::classify::{CharFlags, CharInfo, ConnectionType};
use crate::shaper::can_connect_to_previous;
use crate::tables::{self, LAM};

/// Form Lam-Alef ligatures and drop the consumed Alef slots.
pub fn resolve_ligatures(chars: &mut Vec<CharInfo>) {
    let formed = mark_ligatures(chars);
    if formed > 0 {
        purge_removed(chars);
    }
}

/// Mark pass. Returns the number of ligatures formed.
pub fn mark_ligatures(chars: &mut [CharInfo]) -> usize {
    let mut formed = 0;
    for i in 0..chars.len().saturating_sub(1) {
        if chars[i].original != LAM {
            continue;
        }
        let Some(alef_index) = next_non_diacritic(chars, i) else {
            continue;
        };
        let connected = can_connect_to_previous(chars, i);
        let Some(glyph) = tables::lam_alef_ligature(chars[alef_index].original, connected) else {
            continue;
        };

        let lam = &mut chars[i];
        lam.processed = glyph;
        lam.flags.insert(CharFlags::LIGATURE);
        // Ligatures never join forward.
        lam.connection = ConnectionType::Right;
        chars[alef_index].flags.insert(CharFlags::REMOVE);
        formed += 1;
    }
    formed
}

/// Compaction pass: drop every tombstoned slot, keeping order.
pub fn purge_removed(chars: &mut Vec<CharInfo>) {
    chars.retain(|c| !c.should_remove());
}

fn next_non_diacritic(chars: &[CharInfo], start: usize) -> Option<usize> {
    chars
        .iter()
        .enumerate()
        .skip(start + 1)
        .find(|(_, c)| !c.is_diacritic())
        .map(|(i, _)| i)
}
