// src/engine/fuel.rs
use crate::config::CoefficientTables;
use super::types::{FuelBand, TemperatureFactors};

#[derive(Clone, Copy, Debug)]
pub struct FuelModel<'t> {
    tables: &'t CoefficientTables,
}

impl<'t> FuelModel<'t> {
    pub fn new(tables: &'t CoefficientTables) -> Self { Self { tables } }

    /// Consumption multiplier at `temp` °C for a track with `corners` corners.
    /// Colder than the base temperature burns more. Never negative.
    pub fn correction(&self, temp: f64, corners: u32) -> f64 {
        let t = self.tables;
        let c = 1.0 + t.corner_factor() * f64::from(corners) * (t.temp_base() - temp);
        c.max(0.0)
    }

    /// Litres for one lap across the forecast temperature range.
    /// Without telemetry this is the placeholder band.
    pub fn per_lap(&self, telemetry: Option<&TemperatureFactors>) -> FuelBand {
        let Some(tf) = telemetry else {
            return FuelBand::default();
        };

        let lap = |temp: f64| {
            self.tables.fuel_time_coefficient() * tf.lap_seconds * self.correction(temp, tf.corners)
        };
        let (a, b) = (lap(tf.temp_min), lap(tf.temp_max));
        FuelBand::new(a.min(b), a.max(b))
    }

    /// Fuel band for `laps` laps: the per-lap band times `laps`. Below one
    /// lap (including negative counts) the single-lap default comes back
    /// unchanged. Counts past `u32::MAX` saturate; the advisor rejects those
    /// before they get here.
    pub fn predict_fuel(&self, laps: i64, telemetry: Option<&TemperatureFactors>) -> FuelBand {
        if laps < 1 {
            return FuelBand::default();
        }
        let laps = u32::try_from(laps).unwrap_or(u32::MAX);
        let band = self.per_lap(telemetry).scaled(laps);
        logd!("Fuel: {} laps -> {:.2}..{:.2} L", laps, band.lower, band.upper);
        band
    }
}
