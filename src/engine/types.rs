// src/engine/types.rs
use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::consts::{
    DEFAULT_FUEL_LOWER, DEFAULT_FUEL_UPPER, DEFAULT_PART_LEVEL, DEFAULT_PART_WEAR, DEFAULT_SESSION,
    DEFAULT_WEATHER,
};

named_enum! {
    /// Tyre rubber formulation, in wear-factor table order.
    pub enum TyreCompound : "tyre compound" {
        ExtraSoft => "Extra", "Extra Soft",
        Soft => "Soft", "Soft",
        Medium => "Medium", "Medium",
        Hard => "Hard", "Hard",
        Rain => "Rain", "Rain",
    }
}

impl TyreCompound {
    /// Short label used in the race setup dropdown.
    pub fn short_name(self) -> &'static str { self.key() }
}

named_enum! {
    /// Car components in the order the car page lists them.
    pub enum CarPart : "car part" {
        Chassis => "Chassis", "Chassis",
        Engine => "Engine", "Engine",
        FrontWing => "FWing", "Front Wing",
        RearWing => "RWing", "Rear Wing",
        Underbody => "Underbody", "Underbody",
        Sidepods => "Sidepods", "Sidepods",
        Cooling => "Cooling", "Cooling",
        Gearbox => "Gearbox", "Gearbox",
        Brakes => "Brakes", "Brakes",
        Suspension => "Suspension", "Suspension",
        Electronics => "Electronics", "Electronics",
    }
}

named_enum! {
    /// Track abrasiveness as shown on the track details page.
    pub enum TrackWearLevel : "track wear level" {
        VeryLow => "VeryLow", "Very low",
        Low => "Low", "Low",
        Medium => "Medium", "Medium",
        High => "High", "High",
        VeryHigh => "VeryHigh", "Very high",
    }
}

impl TrackWearLevel {
    pub fn ordinal(self) -> u8 { self.index() as u8 }
}

named_enum! {
    pub enum TyreSupplier : "tyre supplier" {
        Pipirelli => "Pipirelli", "Pipirelli",
        Avonn => "Avonn", "Avonn",
        Yokomama => "Yokomama", "Yokomama",
        Dunnolop => "Dunnolop", "Dunnolop",
        Contimental => "Contimental", "Contimental",
        Badyear => "Badyear", "Badyear",
    }
}

named_enum! {
    pub enum Weather : "weather" {
        Dry => "Dry", "Dry",
        Wet => "Wet", "Wet",
    }
}

named_enum! {
    pub enum SessionType : "session" {
        Practice => "Practice", "Practice",
        Qualify => "Qualify", "Qualify",
        Race => "Race", "Race",
    }
}

impl Default for Weather {
    fn default() -> Self { DEFAULT_WEATHER }
}

impl Default for SessionType {
    fn default() -> Self { DEFAULT_SESSION }
}

/// Current level and measured wear (percent) of one part.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PartState {
    pub level: u32,
    pub wear: f64,
}

impl PartState {
    pub fn new(level: u32, wear: f64) -> Self { Self { level, wear } }
}

impl Default for PartState {
    fn default() -> Self {
        Self { level: DEFAULT_PART_LEVEL, wear: DEFAULT_PART_WEAR }
    }
}

/// Severity tier for a wear reading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum WearStatus {
    Normal,
    Warning,
    Critical,
}

impl WearStatus {
    pub fn label(self) -> &'static str {
        match self {
            WearStatus::Normal => "Normal",
            WearStatus::Warning => "Warning",
            WearStatus::Critical => "Critical",
        }
    }
}

/// Race-day conditions feeding the fuel model.
///
/// * `temp_min` / `temp_max` - (°C) forecast temperature range
/// * `corners` - corners per lap
/// * `lap_seconds` - (s) expected race lap time
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TemperatureFactors {
    pub temp_min: f64,
    pub temp_max: f64,
    pub corners: u32,
    pub lap_seconds: f64,
}

/// Fuel needed, in litres, as a lower/upper pair.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FuelBand {
    pub lower: f64,
    pub upper: f64,
}

impl FuelBand {
    pub fn new(lower: f64, upper: f64) -> Self { Self { lower, upper } }

    pub fn scaled(self, laps: u32) -> Self {
        let n = f64::from(laps);
        Self { lower: self.lower * n, upper: self.upper * n }
    }

    /// Whole litres for the setup form: lower rounds down, upper rounds up.
    pub fn display(&self) -> (String, String) {
        (
            join!(&format!("{}", self.lower.floor()), " L"),
            join!(&format!("{}", self.upper.ceil()), " L"),
        )
    }
}

impl Default for FuelBand {
    fn default() -> Self { Self::new(DEFAULT_FUEL_LOWER, DEFAULT_FUEL_UPPER) }
}

/// How a race splits into tyre stints.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct StintPlan {
    /// Laps a fresh set lasts before reaching the wear target.
    pub stint_laps: u32,
    pub pit_stops: u32,
    /// Fuel for one stint (or the whole race, if shorter).
    pub stint_fuel: FuelBand,
}

/// Validated input bundle for one calculation.
#[derive(Clone, Debug, PartialEq)]
pub struct RaceParameters {
    pub compound: TyreCompound,
    pub supplier: TyreSupplier,
    pub track: TrackWearLevel,
    pub parts: BTreeMap<CarPart, PartState>,
    pub laps: Option<i64>,
    /// Raw wear target text; validated by the advisor.
    pub wear_target: Option<String>,
    pub weather: Option<Weather>,
    pub session: Option<SessionType>,
    pub telemetry: Option<TemperatureFactors>,
}

impl RaceParameters {
    pub fn new(compound: TyreCompound, supplier: TyreSupplier, track: TrackWearLevel) -> Self {
        Self {
            compound,
            supplier,
            track,
            parts: BTreeMap::new(),
            laps: None,
            wear_target: None,
            weather: None,
            session: None,
            telemetry: None,
        }
    }
}

/// Everything the advisor hands back to the caller.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResourcePrediction {
    pub compound: TyreCompound,
    pub supplier: TyreSupplier,
    pub track: TrackWearLevel,
    pub weather: Weather,
    pub session: SessionType,
    pub laps: u32,
    pub wear_target: u32,
    /// Projected wear per part after `laps`.
    pub part_wear: BTreeMap<CarPart, f64>,
    /// Projected wear of a fresh tyre set after `laps`.
    pub tyre_wear: f64,
    pub fuel: FuelBand,
    pub stints: StintPlan,
}

impl ResourcePrediction {
    /// Parts whose projected wear reaches the warning threshold or above.
    pub fn flagged_parts(&self) -> Vec<(CarPart, WearStatus)> {
        self.part_wear
            .iter()
            .map(|(part, wear)| (*part, super::status::classify(*wear)))
            .filter(|(_, status)| *status != WearStatus::Normal)
            .collect()
    }
}
