// src/config/mod.rs

pub mod consts;
pub mod overrides;
pub mod tables;

pub use tables::{CoefficientTables, SupplierFactors};
