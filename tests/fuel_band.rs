// tests/fuel_band.rs
//
// Tests for the fuel band: defaults, temperature correction, lap scaling.
//
use approx::assert_relative_eq;
use gapp::{CoefficientTables, Engine, FuelBand, TemperatureFactors};

fn hot_day() -> TemperatureFactors {
    TemperatureFactors { temp_min: 28.0, temp_max: 34.0, corners: 17, lap_seconds: 101.3 }
}

#[test]
fn single_lap_without_telemetry() {
    let tables = CoefficientTables::default();
    let engine = Engine::new(&tables);
    assert_eq!(engine.predict_fuel(1, None), FuelBand { lower: 0.0, upper: 1.0 });
}

#[test]
fn total_is_linear_in_laps() {
    let tables = CoefficientTables::default();
    let engine = Engine::new(&tables);
    let tf = hot_day();

    let one = engine.predict_fuel(1, Some(&tf));
    assert!(one.lower > 0.0 && one.lower <= one.upper);

    for laps in [2, 13, 71] {
        let band = engine.predict_fuel(laps, Some(&tf));
        assert_relative_eq!(band.lower, one.lower * laps as f64, max_relative = 1e-12);
        assert_relative_eq!(band.upper, one.upper * laps as f64, max_relative = 1e-12);
    }

    // placeholder band scales the same way
    let base = engine.predict_fuel(1, None);
    let sixty = engine.predict_fuel(60, None);
    assert_eq!(sixty.lower, base.lower * 60.0);
    assert_eq!(sixty.upper, base.upper * 60.0);
}

#[test]
fn non_positive_laps_give_default_band() {
    let tables = CoefficientTables::default();
    let engine = Engine::new(&tables);
    let tf = hot_day();
    assert_eq!(engine.predict_fuel(0, Some(&tf)), FuelBand::default());
    assert_eq!(engine.predict_fuel(-10, Some(&tf)), FuelBand::default());
}

#[test]
fn overrides_change_consumption() {
    let base = CoefficientTables::default();
    let thirsty = CoefficientTables::with_overrides("fuel_time_coefficient = 0.005").unwrap();
    let tf = hot_day();

    let a = Engine::new(&base).predict_fuel(40, Some(&tf));
    let b = Engine::new(&thirsty).predict_fuel(40, Some(&tf));
    assert_relative_eq!(b.upper, a.upper * 2.0, max_relative = 1e-12);
}

#[test]
fn display_rounds_outward() {
    let band = FuelBand::new(41.2, 44.1);
    assert_eq!(band.display(), (String::from("41 L"), String::from("45 L")));
}
