// src/core/mod.rs

pub mod sanitize;

pub use sanitize::{label_key, normalize_ws};
