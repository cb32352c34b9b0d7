// src/config/overrides.rs
//
// `key=value` override file for the coefficient tables:
//
//   # comment
//   base_wear = 129.78
//   compound.Soft = 0.99706
//   part.Suspension = 1.0040      (or `none` to drop the level effect)
//   supplier.Dunnolop = 4, 0.07   (base %, degradation)
//
// Names go through the same lookup as scraped text, so an unknown compound or
// part is a lookup error; a bad number or unknown key is an invalid argument.

use super::tables::{CoefficientTables, SupplierFactors};
use crate::core::sanitize::{parse_float_field, parse_int_field};
use crate::error::{Error, Result};

pub fn apply(tables: &mut CoefficientTables, text: &str) -> Result<()> {
    for (n, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') { continue; }

        let Some((key, val)) = line.split_once('=') else {
            return Err(Error::invalid(format!("line {}: expected key=value, got '{}'", n + 1, line)));
        };
        let (key, val) = (key.trim(), val.trim());

        match key.split_once('.') {
            Some((table, name)) => apply_entry(tables, table.trim(), name.trim(), val)?,
            None => apply_scalar(tables, key, val)?,
        }
        logd!("Tables: override {} = {}", key, val);
    }
    Ok(())
}

fn apply_scalar(tables: &mut CoefficientTables, key: &str, val: &str) -> Result<()> {
    let slot = match key {
        "base_wear" => &mut tables.base_wear,
        "track_step" => &mut tables.track_step,
        "tyre_ratio" => &mut tables.tyre_ratio,
        "fuel_time_coefficient" => &mut tables.fuel_time_coefficient,
        "corner_factor" => &mut tables.corner_factor,
        "temp_base" => &mut tables.temp_base,
        other => return Err(Error::invalid(format!("unknown setting '{other}'"))),
    };
    *slot = parse_float_field(key, val)?;
    Ok(())
}

fn apply_entry(tables: &mut CoefficientTables, table: &str, name: &str, val: &str) -> Result<()> {
    match table {
        "compound" => {
            let compound = tables.compound_named(name)?;
            let factor = parse_float_field("compound factor", val)?;
            if factor > 1.0 {
                return Err(Error::invalid(format!("compound factor for {compound} must not exceed 1, got {val}")));
            }
            tables.compound[compound.index()] = factor;
        }
        "part" => {
            let part = tables.part_named(name)?;
            tables.part[part.index()] = if val.eq_ignore_ascii_case("none") {
                None
            } else {
                Some(parse_float_field("part factor", val)?)
            };
        }
        "supplier" => {
            let supplier = tables.supplier_named(name)?;
            let Some((base, degradation)) = val.split_once(',') else {
                return Err(Error::invalid(format!("supplier {supplier}: expected '<base>, <degradation>', got '{val}'")));
            };
            tables.supplier[supplier.index()] = SupplierFactors {
                base: parse_int_field("supplier base", base)?,
                degradation: parse_float_field("supplier degradation", degradation)?,
            };
        }
        other => return Err(Error::invalid(format!("unknown table '{other}'"))),
    }
    Ok(())
}
