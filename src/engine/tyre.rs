// src/engine/tyre.rs
//
// Wear projection. Every part loses a fixed fraction of its remaining
// condition each lap, so wear compounds rather than adding up linearly:
//
//   condition(n) = condition(0) × (1 − loss)^n
//   wear(n)      = 100 × (1 − condition(n))

use std::collections::BTreeMap;

use crate::config::CoefficientTables;
use crate::error::{Error, Result};
use super::types::{CarPart, PartState, TrackWearLevel, TyreCompound, TyreSupplier};

#[derive(Clone, Copy, Debug)]
pub struct TyreWearModel<'t> {
    tables: &'t CoefficientTables,
}

impl<'t> TyreWearModel<'t> {
    pub fn new(tables: &'t CoefficientTables) -> Self { Self { tables } }

    /// Loss per lap before any part-level effect.
    fn base_loss(&self, compound: TyreCompound, supplier: TyreSupplier, track: TrackWearLevel) -> f64 {
        let t = self.tables;
        (1.0 - t.compound_factor(compound))
            * t.track_multiplier(track)
            * t.supplier(supplier).multiplier()
            * t.base_wear() / 100.0
    }

    /// Fraction of remaining condition a part loses in one lap, in [0, 1].
    pub fn per_lap_loss(
        &self,
        compound: TyreCompound,
        supplier: TyreSupplier,
        track: TrackWearLevel,
        part: CarPart,
        level: u32,
    ) -> f64 {
        let base = self.base_loss(compound, supplier, track);
        if base <= 0.0 { return 0.0; }

        let level_mult = match self.tables.part_factor(part) {
            Some(factor) => factor.powf(f64::from(level)),
            None => 1.0,
        };
        let loss = base * level_mult;
        // huge levels overflow the power; that part is simply worn out in a lap
        if loss.is_finite() { loss.clamp(0.0, 1.0) } else { 1.0 }
    }

    /// Projected wear for every car part after `laps`. Parts missing from
    /// `parts` start from the baseline state.
    pub fn predict_wear(
        &self,
        compound: TyreCompound,
        supplier: TyreSupplier,
        track: TrackWearLevel,
        parts: &BTreeMap<CarPart, PartState>,
        laps: i64,
    ) -> Result<BTreeMap<CarPart, f64>> {
        let laps = check_laps(laps)?;

        let projected = CarPart::ALL
            .iter()
            .map(|&part| {
                let state = parts.get(&part).copied().unwrap_or_default();
                let wear = if laps == 0 {
                    state.wear
                } else {
                    let loss = self.per_lap_loss(compound, supplier, track, part, state.level);
                    project(state.wear, loss, laps)
                };
                (part, wear)
            })
            .collect();

        logd!(
            "Wear: {} / {} / {} over {} laps",
            compound, supplier, track, laps
        );
        Ok(projected)
    }

    /// Same as `predict_wear`, with every identifier given as scraped text.
    /// Names that aren't in the tables are lookup errors.
    pub fn predict_wear_named<S: AsRef<str>>(
        &self,
        compound: &str,
        supplier: &str,
        track: &str,
        parts: &[(S, PartState)],
        laps: i64,
    ) -> Result<BTreeMap<CarPart, f64>> {
        let compound = self.tables.compound_named(compound)?;
        let supplier = self.tables.supplier_named(supplier)?;
        let track = self.tables.track_named(track)?;

        let mut states = BTreeMap::new();
        for (name, state) in parts {
            let part = self.tables.part_named(name.as_ref())?;
            if states.insert(part, *state).is_some() {
                return Err(Error::invalid(format!("{part} listed more than once")));
            }
        }
        self.predict_wear(compound, supplier, track, &states, laps)
    }

    /// Loss per lap of the tyre set itself.
    pub fn tyre_loss(&self, compound: TyreCompound, supplier: TyreSupplier, track: TrackWearLevel) -> f64 {
        (self.base_loss(compound, supplier, track) * self.tables.tyre_ratio()).clamp(0.0, 1.0)
    }

    /// Wear (percent) of a fresh tyre set after `laps`.
    pub fn tyre_wear(&self, compound: TyreCompound, supplier: TyreSupplier, track: TrackWearLevel, laps: u32) -> f64 {
        if laps == 0 { return 0.0; }
        project(0.0, self.tyre_loss(compound, supplier, track), laps)
    }

    /// Most laps a fresh set can run while keeping at least `remaining_pct`
    /// of its condition. `None` if the set never gets that low.
    pub fn laps_until(
        &self,
        compound: TyreCompound,
        supplier: TyreSupplier,
        track: TrackWearLevel,
        remaining_pct: f64,
    ) -> Option<u32> {
        let loss = self.tyre_loss(compound, supplier, track);
        if remaining_pct <= 0.0 || loss <= 0.0 { return None; }
        if remaining_pct >= 100.0 { return Some(0); }

        let laps = (remaining_pct / 100.0).ln() / (1.0 - loss).ln();
        // float → int `as` saturates, which is what we want for huge values
        Some(laps.floor() as u32)
    }
}

fn check_laps(laps: i64) -> Result<u32> {
    if laps < 0 {
        return Err(Error::invalid(format!("lap count must not be negative, got {laps}")));
    }
    u32::try_from(laps).map_err(|_| Error::invalid(format!("lap count {laps} is too large")))
}

/// Compound `loss` over `laps` starting from `wear` percent. A part already at
/// or past 100 % has nothing left to lose.
fn project(wear: f64, loss: f64, laps: u32) -> f64 {
    if wear >= 100.0 { return wear; }
    let condition = (1.0 - wear / 100.0) * (1.0 - loss).powf(f64::from(laps));
    100.0 * (1.0 - condition)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn model(t: &CoefficientTables) -> TyreWearModel<'_> { TyreWearModel::new(t) }

    #[test]
    fn one_lap_loss_matches_factor_product() {
        let t = CoefficientTables::default();
        let loss = model(&t).per_lap_loss(
            TyreCompound::Soft, TyreSupplier::Dunnolop, TrackWearLevel::Medium, CarPart::Chassis, 0,
        );
        let expected = (1.0 - 0.997064844817654) * 1.04 * 1.07 * 129.776458172062 / 100.0;
        assert_relative_eq!(loss, expected, max_relative = 1e-12);
    }

    #[test]
    fn level_raises_loss_only_for_factored_parts() {
        let t = CoefficientTables::default();
        let m = model(&t);
        let args = (TyreCompound::Medium, TyreSupplier::Avonn, TrackWearLevel::High);

        let chassis0 = m.per_lap_loss(args.0, args.1, args.2, CarPart::Chassis, 0);
        let chassis5 = m.per_lap_loss(args.0, args.1, args.2, CarPart::Chassis, 5);
        assert!(chassis5 > chassis0);
        assert_relative_eq!(chassis5 / chassis0, 1.0193f64.powi(5), max_relative = 1e-12);

        let elec0 = m.per_lap_loss(args.0, args.1, args.2, CarPart::Electronics, 0);
        let elec5 = m.per_lap_loss(args.0, args.1, args.2, CarPart::Electronics, 5);
        assert_eq!(elec0, elec5);
    }

    #[test]
    fn extreme_levels_stay_finite() {
        let t = CoefficientTables::with_overrides("compound.Soft = 1.0").unwrap();
        let m = model(&t);
        let args = (TyreCompound::Soft, TyreSupplier::Dunnolop, TrackWearLevel::Medium);
        assert_eq!(m.per_lap_loss(args.0, args.1, args.2, CarPart::Chassis, 100_000), 0.0);

        let mut parts = BTreeMap::new();
        parts.insert(CarPart::Chassis, PartState::new(100_000, 10.0));
        let out = m.predict_wear(args.0, args.1, args.2, &parts, 10).unwrap();
        assert_relative_eq!(out[&CarPart::Chassis], 10.0, max_relative = 1e-12);

        let d = CoefficientTables::default();
        let loss = model(&d).per_lap_loss(args.0, args.1, args.2, CarPart::Chassis, 100_000);
        assert_eq!(loss, 1.0);
    }

    #[test]
    fn wear_compounds_rather_than_adds() {
        let loss = 0.05;
        let two_laps = project(0.0, loss, 2);
        assert_relative_eq!(two_laps, 100.0 * (1.0 - 0.95 * 0.95), max_relative = 1e-12);
        assert!(two_laps < 2.0 * project(0.0, loss, 1));
    }

    #[test]
    fn starts_from_current_wear() {
        let after = project(40.0, 0.1, 1);
        assert_relative_eq!(after, 46.0, max_relative = 1e-12);
        assert_eq!(project(100.0, 0.1, 10), 100.0);
    }

    #[test]
    fn laps_must_be_non_negative() {
        let t = CoefficientTables::default();
        let err = model(&t)
            .predict_wear(TyreCompound::Hard, TyreSupplier::Badyear, TrackWearLevel::Low, &BTreeMap::new(), -1)
            .unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn tyre_stint_length_respects_target() {
        let t = CoefficientTables::default();
        let m = model(&t);
        let (c, s, tr) = (TyreCompound::Soft, TyreSupplier::Pipirelli, TrackWearLevel::Medium);

        let n = m.laps_until(c, s, tr, 20.0).unwrap();
        assert!(n > 0);
        assert!(100.0 - m.tyre_wear(c, s, tr, n) >= 20.0);
        assert!(100.0 - m.tyre_wear(c, s, tr, n + 1) < 20.0);

        assert_eq!(m.laps_until(c, s, tr, 100.0), Some(0));
        assert_eq!(m.laps_until(c, s, tr, 0.0), None);
    }
}
