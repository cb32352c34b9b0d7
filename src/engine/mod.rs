// src/engine/mod.rs
//! # Prediction engine
//!
//! Pure numeric models over the coefficient tables in `config`:
//!
//! - `status`   – wear reading → Normal / Warning / Critical
//! - `tyre`     – compounding per-lap wear for car parts and the tyre set
//! - `fuel`     – temperature-corrected fuel band
//! - `strategy` – input validation, defaults, stint plan
//! - `engine`   – `Engine`, the one-stop facade the CLI and embedders use
//!
//! Nothing here touches the network or the filesystem. Every call is a
//! function of its arguments and the borrowed tables, so one `Engine` can be
//! shared across threads freely.
//!
//! ```text
//! Params ──resolve──▶ RaceParameters ──recommend──▶ ResourcePrediction
//!                                        ├─ tyre::predict_wear
//!                                        ├─ fuel::predict_fuel
//!                                        └─ stint plan
//! ```
pub mod types;
pub mod status;
pub mod tyre;
pub mod fuel;
pub mod strategy;
#[allow(clippy::module_inception)]
pub mod engine;

pub use engine::Engine;
pub use status::classify;
pub use types::*;
