// src/engine/strategy.rs
//
// Turns a race request into a full prediction: validates the loose inputs,
// fills in defaults, runs both models and derives a stint plan.

use crate::config::CoefficientTables;
use crate::config::consts::{DEFAULT_LAPS, DEFAULT_PART_LEVEL, DEFAULT_PART_WEAR, DEFAULT_WEAR_PERCENTAGE, MAX_WEAR_TARGET};
use crate::core::sanitize::{
    is_integer, parse_float_field, parse_int_field, parse_lap_time, parse_optional_int,
    parse_signed_float_field,
};
use crate::error::{Error, Result};
use crate::params::{Params, TelemetryInput};
use super::fuel::FuelModel;
use super::tyre::TyreWearModel;
use super::types::*;

#[derive(Clone, Copy, Debug)]
pub struct Advisor<'t> {
    tables: &'t CoefficientTables,
    tyre: TyreWearModel<'t>,
    fuel: FuelModel<'t>,
}

impl<'t> Advisor<'t> {
    pub fn new(tables: &'t CoefficientTables) -> Self {
        Self {
            tables,
            tyre: TyreWearModel::new(tables),
            fuel: FuelModel::new(tables),
        }
    }

    /// Validate raw form text. Unknown names here are bad input, not table
    /// misses, so they come back as `InvalidArgument`.
    pub fn resolve(&self, params: &Params) -> Result<RaceParameters> {
        let t = self.tables;
        let compound = t.compound_named(&params.compound).map_err(Error::into_invalid)?;
        let supplier = t.supplier_named(&params.supplier).map_err(Error::into_invalid)?;
        let track = t.track_named(&params.track_wear).map_err(Error::into_invalid)?;

        let mut race = RaceParameters::new(compound, supplier, track);

        for row in &params.parts {
            let part = t.part_named(&row.name).map_err(Error::into_invalid)?;
            let level = parse_optional_int(part.display_name(), row.level.as_deref())?
                .unwrap_or(DEFAULT_PART_LEVEL);
            let wear = match non_blank(row.wear.as_deref()) {
                Some(w) => parse_float_field(part.display_name(), w)?,
                None => DEFAULT_PART_WEAR,
            };
            if race.parts.insert(part, PartState::new(level, wear)).is_some() {
                return Err(Error::invalid(format!("{part} listed more than once")));
            }
        }

        race.laps = non_blank(params.laps.as_deref()).map(parse_laps).transpose()?;
        race.wear_target = params.wear_target.clone();
        race.weather = non_blank(params.weather.as_deref())
            .map(|w| named(Weather::TABLE, w, Weather::from_name))
            .transpose()?;
        race.session = non_blank(params.session.as_deref())
            .map(|s| named(SessionType::TABLE, s, SessionType::from_name))
            .transpose()?;
        race.telemetry = params.telemetry.as_ref().map(resolve_telemetry).transpose()?;

        Ok(race)
    }

    pub fn recommend(&self, race: &RaceParameters) -> Result<ResourcePrediction> {
        let wear_target = resolve_wear_target(race.wear_target.as_deref())?;
        let laps = resolve_laps(race.laps)?;

        let weather = race.weather.unwrap_or_else(|| {
            logd!("Advisor: no weather given, using {}", Weather::default());
            Weather::default()
        });
        let session = race.session.unwrap_or_else(|| {
            logd!("Advisor: no session given, using {}", SessionType::default());
            SessionType::default()
        });

        let (c, s, tr) = (race.compound, race.supplier, race.track);
        let part_wear = self.tyre.predict_wear(c, s, tr, &race.parts, i64::from(laps))?;
        let tyre_wear = self.tyre.tyre_wear(c, s, tr, laps);
        let fuel = self.fuel.predict_fuel(i64::from(laps), race.telemetry.as_ref());
        let stints = self.stint_plan(race, laps, wear_target);

        logf!(
            "Advisor: {} {} on {} track, {} laps: tyre {:.1}%, fuel {:.1}..{:.1} L, {} stop(s)",
            s, c, tr, laps, tyre_wear, fuel.lower, fuel.upper, stints.pit_stops
        );

        Ok(ResourcePrediction {
            compound: c,
            supplier: s,
            track: tr,
            weather,
            session,
            laps,
            wear_target,
            part_wear,
            tyre_wear,
            fuel,
            stints,
        })
    }

    /// `resolve` then `recommend`.
    pub fn recommend_params(&self, params: &Params) -> Result<ResourcePrediction> {
        let race = self.resolve(params)?;
        self.recommend(&race)
    }

    fn stint_plan(&self, race: &RaceParameters, laps: u32, wear_target: u32) -> StintPlan {
        let stint_laps = self
            .tyre
            .laps_until(race.compound, race.supplier, race.track, f64::from(wear_target))
            .unwrap_or(laps)
            .max(1);
        let pit_stops = laps.div_ceil(stint_laps).saturating_sub(1);
        let stint_fuel = self
            .fuel
            .predict_fuel(i64::from(stint_laps.min(laps)), race.telemetry.as_ref());

        StintPlan { stint_laps, pit_stops, stint_fuel }
    }
}

/// Remaining tyre condition (percent) at which to pit. Blank means the
/// default; anything that isn't a whole number up to 100 is rejected.
pub fn resolve_wear_target(text: Option<&str>) -> Result<u32> {
    let Some(t) = non_blank(text) else {
        logd!("Advisor: no wear target given, using {}", DEFAULT_WEAR_PERCENTAGE);
        return Ok(DEFAULT_WEAR_PERCENTAGE);
    };
    if !is_integer(t) {
        return Err(Error::invalid(format!("wear target: '{t}' is not a whole number")));
    }
    let target = parse_int_field("wear target", t)?;
    if target > MAX_WEAR_TARGET {
        return Err(Error::invalid(format!("wear target: {target} exceeds {MAX_WEAR_TARGET}")));
    }
    Ok(target)
}

fn resolve_laps(laps: Option<i64>) -> Result<u32> {
    match laps {
        None => {
            logd!("Advisor: no lap count given, using {}", DEFAULT_LAPS);
            Ok(DEFAULT_LAPS)
        }
        Some(n) if n < 0 => Err(Error::invalid(format!("lap count must not be negative, got {n}"))),
        Some(n) => u32::try_from(n).map_err(|_| Error::invalid(format!("lap count {n} is too large"))),
    }
}

fn non_blank(text: Option<&str>) -> Option<&str> {
    text.map(str::trim).filter(|t| !t.is_empty())
}

fn named<T>(table: &'static str, text: &str, find: fn(&str) -> Option<T>) -> Result<T> {
    find(text).ok_or_else(|| Error::invalid(format!("unknown {table} '{text}'")))
}

/// Signed whole number. Negative counts parse so `recommend` can reject them.
fn parse_laps(text: &str) -> Result<i64> {
    match text.strip_prefix('-') {
        Some(digits) => Ok(-i64::from(parse_int_field("laps", digits)?)),
        None => Ok(i64::from(parse_int_field("laps", text)?)),
    }
}

fn resolve_telemetry(input: &TelemetryInput) -> Result<TemperatureFactors> {
    Ok(TemperatureFactors {
        temp_min: parse_signed_float_field("min temperature", &input.temp_min)?,
        temp_max: parse_signed_float_field("max temperature", &input.temp_max)?,
        corners: parse_int_field("corners", &input.corners)?,
        lap_seconds: parse_lap_time("lap time", &input.lap_time)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wear_target_defaults_and_validates() {
        assert_eq!(resolve_wear_target(None).unwrap(), 20);
        assert_eq!(resolve_wear_target(Some("   ")).unwrap(), 20);
        assert_eq!(resolve_wear_target(Some("45")).unwrap(), 45);
        assert_eq!(resolve_wear_target(Some(" 0 ")).unwrap(), 0);
        assert!(resolve_wear_target(Some("abc")).unwrap_err().is_invalid_argument());
        assert!(resolve_wear_target(Some("12.5")).unwrap_err().is_invalid_argument());
        assert!(resolve_wear_target(Some("101")).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn laps_parse_signed() {
        assert_eq!(parse_laps("58").unwrap(), 58);
        assert_eq!(parse_laps("-2").unwrap(), -2);
        assert!(parse_laps("--2").is_err());
        assert!(resolve_laps(Some(-2)).unwrap_err().is_invalid_argument());
        assert_eq!(resolve_laps(None).unwrap(), 1);
    }

    #[test]
    fn stint_plan_splits_race() {
        let t = CoefficientTables::default();
        let advisor = Advisor::new(&t);
        let mut race = RaceParameters::new(TyreCompound::Soft, TyreSupplier::Dunnolop, TrackWearLevel::Medium);
        race.laps = Some(70);

        let p = advisor.recommend(&race).unwrap();
        let per_set = p.stints.stint_laps;
        assert!(per_set >= 1 && per_set < 70);
        assert_eq!(p.stints.pit_stops, 70u32.div_ceil(per_set) - 1);

        // a target of 0 never forces a stop
        race.wear_target = Some(s!("0"));
        let p = advisor.recommend(&race).unwrap();
        assert_eq!(p.stints.stint_laps, 70);
        assert_eq!(p.stints.pit_stops, 0);
    }

    #[test]
    fn negative_temperatures_accepted() {
        let tf = resolve_telemetry(&TelemetryInput {
            temp_min: s!("-4"),
            temp_max: s!("3.5"),
            corners: s!("12"),
            lap_time: s!("1:28.250"),
        })
        .unwrap();
        assert_eq!(tf.temp_min, -4.0);
        assert_eq!(tf.lap_seconds, 88.25);
    }
}
