// src/params.rs
//
// Raw request as it arrives from a form or the command line. Nothing here is
// validated yet; `strategy::Advisor::resolve` turns it into `RaceParameters`.

use std::path::PathBuf;

use crate::core::sanitize::normalize_ws;

/// One row of the car page: part name, level and wear, all as typed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PartInput {
    pub name: String,
    pub level: Option<String>,
    pub wear: Option<String>,
}

/// Race-day conditions as entered. `lap_time` takes seconds or `m:ss.fff`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TelemetryInput {
    pub temp_min: String,
    pub temp_max: String,
    pub corners: String,
    pub lap_time: String,
}

#[derive(Clone, Debug, Default)]
pub struct Params {
    pub compound: String,
    pub supplier: String,
    pub track_wear: String,
    pub parts: Vec<PartInput>,
    pub laps: Option<String>,
    pub wear_target: Option<String>,
    pub weather: Option<String>,
    pub session: Option<String>,
    pub telemetry: Option<TelemetryInput>,

    pub tables: Option<PathBuf>,        // coefficient override file
    pub log: Option<PathBuf>,           // log sink
    pub json: bool,                     // print prediction as JSON
    pub classify: Option<String>,       // classify one wear reading then exit
}

impl Params {
    pub fn new() -> Self { Self::default() }

    /// Record a part row, replacing an earlier row with the same name.
    pub fn set_part(&mut self, name: &str, level: Option<&str>, wear: Option<&str>) {
        let name = normalize_ws(name);
        let row = PartInput {
            name: name.clone(),
            level: level.map(String::from),
            wear: wear.map(String::from),
        };
        match self.parts.iter_mut().find(|p| p.name == name) {
            Some(slot) => *slot = row,
            None => self.parts.push(row),
        }
    }
}
