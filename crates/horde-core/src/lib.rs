//! `horde-core` — foundational types for the `rust_horde` simulation core.
//!
//! This crate is a dependency of every other `horde-*` crate.  It intentionally
//! has no `horde-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                          |
//! |--------------|---------------------------------------------------|
//! | [`ids`]      | `AgentId`, `ColliderId`, `ObstacleId`             |
//! | [`vec`]      | `Vec3`, movement-plane helpers                    |
//! | [`time`]     | `Tick`, `TickClock`                               |
//! | [`rng`]      | `SimRng` (deterministic, seed-mixed)              |
//! | [`config`]   | `SwarmConfig`                                     |
//! | [`error`]    | `HordeError`, `HordeResult`                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                |
//! |---------|-------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.   |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;
pub mod vec;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SwarmConfig;
pub use error::{HordeError, HordeResult};
pub use ids::{AgentId, ColliderId, ObstacleId};
pub use rng::SimRng;
pub use time::{Tick, TickClock};
pub use vec::Vec3;
