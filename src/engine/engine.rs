// src/engine/engine.rs
//
// Single entry point over the models. Holds nothing but a borrow of the
// tables, so it is `Copy` and can be handed to as many threads as needed.

use std::collections::BTreeMap;

use crate::config::CoefficientTables;
use crate::error::Result;
use crate::params::Params;
use super::fuel::FuelModel;
use super::status;
use super::strategy::Advisor;
use super::tyre::TyreWearModel;
use super::types::*;

#[derive(Clone, Copy, Debug)]
pub struct Engine<'t> {
    tables: &'t CoefficientTables,
}

impl<'t> Engine<'t> {
    pub fn new(tables: &'t CoefficientTables) -> Self { Self { tables } }

    pub fn tables(&self) -> &'t CoefficientTables { self.tables }

    pub fn classify(&self, wear: f64) -> WearStatus { status::classify(wear) }

    pub fn tyre_model(&self) -> TyreWearModel<'t> { TyreWearModel::new(self.tables) }
    pub fn fuel_model(&self) -> FuelModel<'t> { FuelModel::new(self.tables) }
    pub fn advisor(&self) -> Advisor<'t> { Advisor::new(self.tables) }

    pub fn predict_wear(
        &self,
        compound: TyreCompound,
        supplier: TyreSupplier,
        track: TrackWearLevel,
        parts: &BTreeMap<CarPart, PartState>,
        laps: i64,
    ) -> Result<BTreeMap<CarPart, f64>> {
        self.tyre_model().predict_wear(compound, supplier, track, parts, laps)
    }

    pub fn predict_wear_named<S: AsRef<str>>(
        &self,
        compound: &str,
        supplier: &str,
        track: &str,
        parts: &[(S, PartState)],
        laps: i64,
    ) -> Result<BTreeMap<CarPart, f64>> {
        self.tyre_model().predict_wear_named(compound, supplier, track, parts, laps)
    }

    pub fn predict_fuel(&self, laps: i64, telemetry: Option<&TemperatureFactors>) -> FuelBand {
        self.fuel_model().predict_fuel(laps, telemetry)
    }

    pub fn recommend(&self, race: &RaceParameters) -> Result<ResourcePrediction> {
        self.advisor().recommend(race)
    }

    pub fn recommend_params(&self, params: &Params) -> Result<ResourcePrediction> {
        self.advisor().recommend_params(params)
    }
}
