//! `horde-sense` — obstacle sensing for the movement core.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                |
//! |----------------|---------------------------------------------------------|
//! | [`mask`]       | `LayerMask` — obstacle classification bitmask           |
//! | [`field`]      | `Obstacle`, `ObstacleField` (R-tree + segment tests)    |
//! | [`probe`]      | `ProbeRequest`, `ProbeCaster` trait, rayon/serial impls |
//! | [`visibility`] | single-ray line-of-sight helper                         |
//!
//! # The batch contract
//!
//! All obstacle probing flows through [`ProbeCaster::cast_all`]: one boolean
//! result per request, in request order, computed by any internally-concurrent
//! backend the implementation likes.  The call returns only after every
//! result is written — the caller never observes a partially-filled batch.

pub mod field;
pub mod mask;
pub mod probe;
pub mod visibility;


pub use field::{Obstacle, ObstacleField, ObstacleFieldBuilder};
pub use mask::LayerMask;
pub use probe::{ProbeCaster, ProbeRequest, RayonCaster, SerialCaster};
pub use visibility::line_of_sight;
