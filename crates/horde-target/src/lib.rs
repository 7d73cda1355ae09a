//! `horde-target` — pure target-selection queries.
//!
//! # Crate layout
//!
//! | Module       | Contents                                          |
//! |--------------|---------------------------------------------------|
//! | [`snapshot`] | `TargetView` — borrowed post-tick agent snapshot  |
//! | [`query`]    | `Targeting` — nearest / densest-cluster / random  |
//!
//! Queries never mutate anything and run against a [`TargetView`] borrowed
//! from the registry *between* ticks — the orchestrator's `&mut self` tick
//! makes a mid-tick view unobtainable, so snapshot stability is a
//! compile-time fact rather than a runtime check.

pub mod query;
pub mod snapshot;


pub use query::{PANIC_RADIUS, Targeting};
pub use snapshot::TargetView;
