// src/config/consts.rs
use crate::engine::types::{SessionType, Weather};

// Wear status thresholds (inclusive lower bounds)
pub const WEAR_THRESHOLD_WARNING: f64 = 80.0;
pub const WEAR_THRESHOLD_CRITICAL: f64 = 90.0;

const _: () = assert!(WEAR_THRESHOLD_WARNING < WEAR_THRESHOLD_CRITICAL);

// Defaults for optional strategy inputs
pub const DEFAULT_WEAR_PERCENTAGE: u32 = 20;
pub const DEFAULT_LAPS: u32 = 1;
pub const DEFAULT_WEATHER: Weather = Weather::Dry;
pub const DEFAULT_SESSION: SessionType = SessionType::Race;

// Single-lap fuel band shown before any telemetry exists (litres)
pub const DEFAULT_FUEL_LOWER: f64 = 0.0;
pub const DEFAULT_FUEL_UPPER: f64 = 1.0;

// Baseline for a part the caller didn't report ("000" on the setup page)
pub const DEFAULT_PART_LEVEL: u32 = 0;
pub const DEFAULT_PART_WEAR: f64 = 0.0;

// Tyre compounds, Extra Soft → Rain (retained condition per lap)
pub const WEAR_FACTORS: [f64; 5] = [
    0.998163750229071, // Extra Soft
    0.997064844817654, // Soft
    0.996380346554349, // Medium
    0.995862526048112, // Hard
    0.996087854384523, // Rain
];

// Part level factors, index-aligned with the first nine car parts
pub const PART_LEVEL_FACTORS: [f64; 9] = [
    1.0193, 1.0100, 1.0073, 1.0053, 1.0043,
    1.0037, 1.0043, 1.0097, 1.0052,
];

// Tyre suppliers: (name, base wear-rate %, compound degradation)
pub const TYRE_SUPPLIERS: [(&str, u32, f64); 6] = [
    ("Pipirelli", 1, 0.0),
    ("Avonn", 8, 0.015),
    ("Yokomama", 3, 0.05),
    ("Dunnolop", 4, 0.07),
    ("Contimental", 8, 0.07),
    ("Badyear", 7, 0.09),
];

pub const BASE_WEAR: f64 = 129.776458172062;

// Track wear: multiplier step per level away from Medium
pub const TRACK_WEAR_STEP: f64 = 0.25;

// A tyre set loses condition this many times faster than a car part
pub const TYRE_WEAR_RATIO: f64 = 10.0;

// Fuel (litres per second of lap time)
pub const FUEL_TIME_COEFFICIENT: f64 = 0.0025;

pub const COMPOUND_CALC_CORNER_FACTOR: f64 = 0.00018;
pub const COMPOUND_CALC_TEMP_BASE: f64 = 50.0;

// Upper bound accepted for a wear target (percent)
pub const MAX_WEAR_TARGET: u32 = 100;
