//! `horde-move` — movement state and the per-tick scheduling pass.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`buffers`]   | `MoveBuffers`, `MotionParams` — per-agent movement columns    |
//! | [`layout`]    | `ProbeLayout` — probe fan geometry                            |
//! | [`speed`]     | `SpeedSource` trait, `BaseSpeed`                              |
//! | [`scheduler`] | `MovementScheduler` — the five-step tick pass                 |
//! | [`error`]     | `MoveError`, `MoveResult<T>`                                  |
//!
//! # Tick shape
//!
//! ```text
//! tick(registry, buffers, field, …):
//!   ① Refresh  — pull each agent's live speed into the speed column.
//!   ② Assemble — three probe requests per agent (center / left / right)
//!                from chest height along the current facing; scratch is
//!                resized only when 3 × active_count changed.
//!   ③ Sense    — one batched ProbeCaster::cast_all (internally concurrent;
//!                complete when it returns — the probe join).
//!   ④ Steer    — the pure kernel over all agents on Rayon's pool; every
//!                invocation reads shared immutable state plus its own probe
//!                triple and writes only its own output slot (the steering
//!                join is the collect).
//!   ⑤ Commit   — sequential write-back of positions, facings, and smoothed
//!                directions in index order.
//! ```
//!
//! Both joins complete before `tick` returns, and all scratch lives inside
//! the scheduler, so no parallel work can ever outlive the buffers it reads.

pub mod buffers;
pub mod error;
pub mod layout;
pub mod scheduler;
pub mod speed;

#[cfg(test)]
mod tests;

pub use buffers::{MotionParams, MoveBuffers};
pub use error::{MoveError, MoveResult};
pub use layout::ProbeLayout;
pub use scheduler::MovementScheduler;
pub use speed::{BaseSpeed, SpeedSource};
