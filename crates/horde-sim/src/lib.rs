//! `horde-sim` — the swarm orchestrator.
//!
//! # Crate layout
//!
//! | Module        | Contents                                       |
//! |---------------|------------------------------------------------|
//! | [`reference`] | `ReferenceFeed` trait, `FixedReference`        |
//! | [`observer`]  | `SwarmObserver` trait, `NoopObserver`          |
//! | [`builder`]   | `SwarmBuilder`                                 |
//! | [`swarm`]     | `Swarm` — the public operation set             |
//! | [`error`]     | `SwarmError`, `SwarmResult<T>`                 |
//!
//! # Tick-boundary discipline
//!
//! [`Swarm::tick`] takes `&mut self` and returns only after the probe join,
//! the steering join, and the sequential commit have all completed.  Every
//! read surface ([`Swarm::targets`], the lookup and query methods) borrows
//! `&self`.  A targeting query against an in-progress tick therefore is not a
//! forbidden call — it is an unsatisfiable borrow.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use horde_core::SwarmConfig;
//! use horde_sense::RayonCaster;
//! use horde_sim::{FixedReference, NoopObserver, SwarmBuilder};
//!
//! let mut swarm = SwarmBuilder::new(
//!     SwarmConfig::new(2_000, 42),
//!     FixedReference(player_position),
//!     RayonCaster,
//! )
//! .obstacles(field)
//! .build()?;
//!
//! swarm.register_agent(handle, collider, spawn_pos, facing, params);
//! swarm.tick(frame_dt, &mut NoopObserver)?;
//! let victim = swarm.nearest_target(turret_pos, 30.0, true);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod reference;
pub mod swarm;


pub use builder::SwarmBuilder;
pub use error::{SwarmError, SwarmResult};
pub use observer::{NoopObserver, SwarmObserver};
pub use reference::{FixedReference, ReferenceFeed};
pub use swarm::Swarm;
