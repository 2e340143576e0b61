//! Horizontal kick offsets tried when a rotation does not fit in place.
//!
//! The sequence is `+1, -1, +2, -2, ...`: smaller magnitudes first, positive
//! before negative. It stops after magnitude `max_magnitude`, which the
//! controller sets to the rotated shape's width (not the grid width).

use std::iter::FusedIterator;

/// Bounded iterator over kick offsets
///
/// The bound is inclusive: every magnitude from 1 up to and including
/// `max_magnitude` is tried in both directions, so a width-3 shape gets six
/// candidates ending in `+3, -3`. Narrow shapes are not limited to fewer
/// kicks, and the last negative offset is not dropped.
#[derive(Debug, Clone)]
pub struct KickOffsets {
    magnitude: i32,
    max_magnitude: i32,
    negative_next: bool,
}

impl KickOffsets {
    pub fn new(max_magnitude: u8) -> Self {
        Self {
            magnitude: 1,
            max_magnitude: max_magnitude as i32,
            negative_next: false,
        }
    }
}

impl Iterator for KickOffsets {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        if self.magnitude > self.max_magnitude {
            return None;
        }

        if self.negative_next {
            let offset = -self.magnitude;
            self.magnitude += 1;
            self.negative_next = false;
            Some(offset)
        } else {
            self.negative_next = true;
            Some(self.magnitude)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining_mags = (self.max_magnitude - self.magnitude + 1).max(0) as usize;
        let n = (remaining_mags * 2).saturating_sub(self.negative_next as usize);
        (n, Some(n))
    }
}

impl ExactSizeIterator for KickOffsets {}
impl FusedIterator for KickOffsets {}

/// Kick offsets for a rotated shape of the given width
pub fn kick_offsets(shape_width: u8) -> KickOffsets {
    KickOffsets::new(shape_width)
}
