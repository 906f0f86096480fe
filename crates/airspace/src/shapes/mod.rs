//! Shape assembler: closed outlines built from sampled arcs.
//!
//! | shape        | outline                                              |
//! |--------------|------------------------------------------------------|
//! | circle       | full arc from North back to North                    |
//! | sector       | center, arc start → arc end, center                  |
//! | segment      | arc start → arc end, closed by the chord             |
//! | ring         | outer arc forward, inner arc backward (keyhole seam) |
//! | ring sector  | outer arc forward over the range, inner arc backward |
//!
//! A sector/segment whose range has `start == end` is a full turn and is
//! produced as a circle; a ring sector over a full turn is a ring.

mod assemble;
mod types;

pub use assemble::{
    build_circle, build_circle_with, build_ring, build_ring_sector, build_ring_sector_with,
    build_ring_with, build_sector, build_sector_with, build_segment, build_segment_with,
};
pub use types::{Shape, ShapeKind};

#[cfg(test)]
mod tests;
