// tests/tables_overrides.rs
//
// Tests for loading coefficient overrides from a key=value file.
//
use std::io::Write;

use gapp::{CoefficientTables, CarPart, TyreCompound};

#[test]
fn load_reads_file_once() {
    let path = std::env::temp_dir().join(format!("gapp_tables_{}.cfg", std::process::id()));
    {
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "# season 95 fit").unwrap();
        writeln!(f, "compound.Rain = 0.9961").unwrap();
        writeln!(f, "part.Front Wing = 1.0075").unwrap();
    }

    let tables = CoefficientTables::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(tables.compound_factor(TyreCompound::Rain), 0.9961);
    assert_eq!(tables.part_factor(CarPart::FrontWing), Some(1.0075));
    // untouched rows keep built-in values
    let expected = CoefficientTables::with_overrides("compound.Rain = 0.9961\npart.FWing = 1.0075").unwrap();
    assert_eq!(tables, expected);
    assert_ne!(tables, CoefficientTables::default());
}

#[test]
fn missing_file_is_io_error() {
    let err = CoefficientTables::load("/definitely/not/here/gapp.cfg").unwrap_err();
    assert!(matches!(err, gapp::Error::Io { .. }));
    assert!(err.to_string().contains("gapp.cfg"));
}

#[test]
fn empty_override_text_is_default() {
    assert_eq!(CoefficientTables::with_overrides("\n# nothing\n\n").unwrap(), CoefficientTables::default());
}
