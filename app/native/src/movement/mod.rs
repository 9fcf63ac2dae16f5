//! Movement geometry: displacement between two positions and animation speed.
//!
//! Distances are measured in grid spaces (world distance divided by the grid
//! size) and durations in milliseconds. Both values are derived from a
//! [`DisplacementRequest`], which the host creates once per movement event.

mod displacement;
mod speed;

pub use displacement::{Displacement, DisplacementRequest, Point};
pub use speed::EffectiveSpeed;
