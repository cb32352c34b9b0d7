// src/config/tables.rs
//
// Coefficient tables: built once at startup (defaults, optionally patched by an
// override file), then only ever read. Share by reference across threads.

use std::path::Path;

use super::consts::*;
use crate::core::sanitize::normalize_ws;
use crate::engine::types::{CarPart, TrackWearLevel, TyreCompound, TyreSupplier};
use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SupplierFactors {
    /// Wear-rate premium in percent.
    pub base: u32,
    /// Per-lap compound degradation, as a fraction.
    pub degradation: f64,
}

impl SupplierFactors {
    pub fn multiplier(&self) -> f64 {
        (1.0 + f64::from(self.base) / 100.0) * (1.0 + self.degradation)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CoefficientTables {
    pub(super) compound: [f64; 5],
    pub(super) part: [Option<f64>; 11],
    pub(super) supplier: [SupplierFactors; 6],
    pub(super) base_wear: f64,
    pub(super) track_step: f64,
    pub(super) tyre_ratio: f64,
    pub(super) fuel_time_coefficient: f64,
    pub(super) corner_factor: f64,
    pub(super) temp_base: f64,
}

impl Default for CoefficientTables {
    fn default() -> Self {
        let mut part = [None; 11];
        for (slot, factor) in part.iter_mut().zip(PART_LEVEL_FACTORS) {
            *slot = Some(factor);
        }
        let supplier = TYRE_SUPPLIERS.map(|(_, base, degradation)| SupplierFactors { base, degradation });

        Self {
            compound: WEAR_FACTORS,
            part,
            supplier,
            base_wear: BASE_WEAR,
            track_step: TRACK_WEAR_STEP,
            tyre_ratio: TYRE_WEAR_RATIO,
            fuel_time_coefficient: FUEL_TIME_COEFFICIENT,
            corner_factor: COMPOUND_CALC_CORNER_FACTOR,
            temp_base: COMPOUND_CALC_TEMP_BASE,
        }
    }
}

impl CoefficientTables {
    /// Built-in tables patched by `key=value` override text.
    pub fn with_overrides(text: &str) -> Result<Self> {
        let mut tables = Self::default();
        super::overrides::apply(&mut tables, text)?;
        logf!("Tables: overrides applied");
        Ok(tables)
    }

    /// Read an override file once. Missing file is an error, not a fallback.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        logf!("Tables: loading overrides from {}", path.display());
        Self::with_overrides(&text)
    }

    /* ---------- by enum ---------- */

    /// Retained condition fraction per lap.
    pub fn compound_factor(&self, compound: TyreCompound) -> f64 {
        self.compound[compound.index()]
    }

    /// `None` when the part's level doesn't influence its wear.
    pub fn part_factor(&self, part: CarPart) -> Option<f64> {
        self.part[part.index()]
    }

    pub fn supplier(&self, supplier: TyreSupplier) -> SupplierFactors {
        self.supplier[supplier.index()]
    }

    /// 1.0 at Medium, `track_step` per level either side.
    pub fn track_multiplier(&self, track: TrackWearLevel) -> f64 {
        let offset = f64::from(track.ordinal()) - f64::from(TrackWearLevel::Medium.ordinal());
        1.0 + self.track_step * offset
    }

    pub fn base_wear(&self) -> f64 { self.base_wear }
    pub fn tyre_ratio(&self) -> f64 { self.tyre_ratio }
    pub fn fuel_time_coefficient(&self) -> f64 { self.fuel_time_coefficient }
    pub fn corner_factor(&self) -> f64 { self.corner_factor }
    pub fn temp_base(&self) -> f64 { self.temp_base }

    /* ---------- by external name ---------- */

    pub fn compound_named(&self, name: &str) -> Result<TyreCompound> {
        lookup(TyreCompound::TABLE, name, TyreCompound::from_name)
    }

    pub fn part_named(&self, name: &str) -> Result<CarPart> {
        lookup(CarPart::TABLE, name, CarPart::from_name)
    }

    pub fn track_named(&self, name: &str) -> Result<TrackWearLevel> {
        lookup(TrackWearLevel::TABLE, name, TrackWearLevel::from_name)
    }

    pub fn supplier_named(&self, name: &str) -> Result<TyreSupplier> {
        lookup(TyreSupplier::TABLE, name, TyreSupplier::from_name)
    }
}

fn lookup<T>(table: &'static str, name: &str, find: fn(&str) -> Option<T>) -> Result<T> {
    find(name).ok_or_else(|| Error::lookup(table, normalize_ws(name)))
}
