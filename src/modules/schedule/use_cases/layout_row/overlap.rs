// Overlap of fact intervals with one plan segment, and the late/early gaps.
//
// A fact overlaps unless it ends strictly before the segment starts or starts
// strictly after it ends, so a fact touching a segment edge counts. Overlaps are
// clamped into the segment; late and early are always measured against the
// segment's own ends.

use crate::shared::core::primitives::{Interval, Millis};

pub fn find_overlaps(seg: &Interval, facts: &[Interval]) -> Vec<Interval> {
    facts
        .iter()
        .filter(|fact| fact.intersects(seg))
        .map(|fact| fact.clamp_to(seg.s, seg.e))
        .collect()
}

/// Delay between the planned start and the (clamped) actual start.
pub fn late_ms(seg: &Interval, overlap: &Interval) -> Millis {
    (overlap.s - seg.s).max(0)
}

/// Shortfall between the (clamped) actual end and the planned end.
pub fn early_ms(seg: &Interval, overlap: &Interval) -> Millis {
    (seg.e - overlap.e).max(0)
}
