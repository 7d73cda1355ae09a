//! `horde-steer` — the pure per-agent steering function.
//!
//! # Crate layout
//!
//! | Module     | Contents                                      |
//! |------------|-----------------------------------------------|
//! | [`tuning`] | `SteerTuning` — fixed steering constants      |
//! | [`kernel`] | `SteerInput`, `SteerOutput`, [`kernel::steer`] |
//!
//! # Purity
//!
//! [`kernel::steer`] is a mapping from explicit inputs to explicit outputs:
//! no globals, no interior mutability, no randomness.  The one piece of state
//! carried across ticks — the previous steering direction — enters through
//! `SteerInput` and leaves through `SteerOutput`.  The scheduler exploits this
//! by invoking the kernel across all agents concurrently with no
//! synchronization.

pub mod kernel;
pub mod tuning;


pub use kernel::{SteerInput, SteerOutput, steer};
pub use tuning::SteerTuning;
