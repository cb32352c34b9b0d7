// benches/prediction.rs
use std::collections::BTreeMap;

use criterion::{criterion_group, criterion_main, Criterion, black_box};

use gapp::{
    CarPart, CoefficientTables, Engine, PartState, RaceParameters, TemperatureFactors,
    TrackWearLevel, TyreCompound, TyreSupplier,
};

fn full_car() -> BTreeMap<CarPart, PartState> {
    CarPart::ALL
        .iter()
        .enumerate()
        .map(|(i, &p)| (p, PartState::new(i as u32 % 9, 5.0 * i as f64)))
        .collect()
}

fn bench_prediction(c: &mut Criterion) {
    let tables = CoefficientTables::default();
    let engine = Engine::new(&tables);
    let parts = full_car();

    c.bench_function("predict_wear_70_laps", |b| {
        b.iter(|| {
            let out = engine.predict_wear(
                TyreCompound::Soft,
                TyreSupplier::Dunnolop,
                TrackWearLevel::Medium,
                black_box(&parts),
                black_box(70),
            );
            black_box(out.map(|m| m.len()).unwrap_or(0))
        })
    });

    c.bench_function("predict_wear_named", |b| {
        let named = [("Chassis", PartState::new(4, 20.0)), ("Front&nbsp;Wing", PartState::new(2, 8.0))];
        b.iter(|| {
            let out = engine.predict_wear_named(black_box("Extra Soft"), "Avonn", "Very high", &named, 50);
            black_box(out.is_ok())
        })
    });

    let mut race = RaceParameters::new(TyreCompound::Medium, TyreSupplier::Contimental, TrackWearLevel::High);
    race.parts = parts.clone();
    race.laps = Some(65);
    race.telemetry = Some(TemperatureFactors { temp_min: 17.0, temp_max: 24.0, corners: 15, lap_seconds: 95.2 });

    c.bench_function("recommend_full_race", |b| {
        b.iter(|| {
            let out = engine.recommend(black_box(&race));
            black_box(out.map(|p| p.stints.pit_stops).unwrap_or(0))
        })
    });
}

criterion_group!(benches, bench_prediction);
criterion_main!(benches);
