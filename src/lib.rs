// src/lib.rs
// #![allow(dead_code)]

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod params;

pub use config::CoefficientTables;
pub use engine::{
    CarPart, Engine, FuelBand, PartState, RaceParameters, ResourcePrediction, SessionType,
    StintPlan, TemperatureFactors, TrackWearLevel, TyreCompound, TyreSupplier, WearStatus, Weather,
};
pub use error::{Error, Result};
pub use params::{Params, PartInput, TelemetryInput};
