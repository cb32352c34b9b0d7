// src/cli.rs
use std::env;
use std::fmt::Write as _;
use std::path::PathBuf;

use crate::config::CoefficientTables;
use crate::core::sanitize::parse_signed_float_field;
use crate::engine::{classify, Engine, ResourcePrediction};
use crate::error::{Error, Result};
use crate::params::{Params, TelemetryInput};

pub enum Mode {
    Help,
    Run(Params),
}

pub fn run() -> Result<()> {
    match parse_args(env::args().skip(1))? {
        Mode::Help => eprintln!(include_str!("cli_help.txt")),
        Mode::Run(params) => match execute(&params) {
            Ok(out) => print!("{out}"),
            Err(e) => {
                loge!("CLI: {e}");
                return Err(e);
            }
        },
    }
    Ok(())
}

/// Run one request and return what the CLI would print.
pub fn execute(params: &Params) -> Result<String> {
    if let Some(path) = &params.log {
        if !crate::log::set_log_file(path) {
            logd!("CLI: log file already set, ignoring {}", path.display());
        }
    }

    if let Some(text) = &params.classify {
        let wear = parse_signed_float_field("wear", text)?;
        return Ok(format!("{wear}: {}\n", classify(wear).label()));
    }

    let tables = match &params.tables {
        Some(path) => CoefficientTables::load(path)?,
        None => CoefficientTables::default(),
    };
    let prediction = Engine::new(&tables).recommend_params(params)?;

    if params.json {
        let mut out = serde_json::to_string_pretty(&prediction)?;
        out.push('\n');
        Ok(out)
    } else {
        Ok(render_text(&prediction))
    }
}

pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Mode> {
    let mut params = Params::new();
    let (mut temp, mut corners, mut lap_time) = (None, None, None);

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        let mut value = |flag: &str| {
            args.next().ok_or_else(|| Error::invalid(format!("missing value for {flag}")))
        };
        match a.as_str() {
            "--compound" => params.compound = value(&a)?,
            "--supplier" => params.supplier = value(&a)?,
            "--track" => params.track_wear = value(&a)?,
            "--laps" => params.laps = Some(value(&a)?),
            "--wear-target" => params.wear_target = Some(value(&a)?),
            "--weather" => params.weather = Some(value(&a)?),
            "--session" => params.session = Some(value(&a)?),
            "--part" => {
                let v = value(&a)?;
                let (name, level, wear) = split_part(&v)?;
                params.set_part(name, level, wear);
            }
            "--temp" => temp = Some(value(&a)?),
            "--corners" => corners = Some(value(&a)?),
            "--lap-time" => lap_time = Some(value(&a)?),
            "--tables" => params.tables = Some(PathBuf::from(value(&a)?)),
            "--log" => params.log = Some(PathBuf::from(value(&a)?)),
            "--json" => params.json = true,
            "--classify" => params.classify = Some(value(&a)?),
            "-h" | "--help" => return Ok(Mode::Help),
            _ => return Err(Error::invalid(format!("unknown arg: {a}"))),
        }
    }

    params.telemetry = match (temp, corners, lap_time) {
        (None, None, None) => None,
        (Some(temp), Some(corners), Some(lap_time)) => {
            let Some((temp_min, temp_max)) = temp.split_once(',') else {
                return Err(Error::invalid(format!("--temp: expected <min>,<max>, got '{temp}'")));
            };
            Some(TelemetryInput {
                temp_min: s!(temp_min),
                temp_max: s!(temp_max),
                corners,
                lap_time,
            })
        }
        _ => return Err(Error::invalid("--temp, --corners and --lap-time go together")),
    };

    Ok(Mode::Run(params))
}

/// `Name=level:wear`, either side of the colon may be empty.
fn split_part(v: &str) -> Result<(&str, Option<&str>, Option<&str>)> {
    let Some((name, rest)) = v.split_once('=') else {
        return Err(Error::invalid(format!("--part: expected Name=level:wear, got '{v}'")));
    };
    let (level, wear) = match rest.split_once(':') {
        Some((l, w)) => (l, Some(w)),
        None => (rest, None),
    };
    let level = Some(level).filter(|l| !l.trim().is_empty());
    Ok((name, level, wear))
}

fn render_text(p: &ResourcePrediction) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {} on {} wear track ({}, {})", p.supplier, p.compound, p.track, p.session, p.weather);
    let _ = writeln!(out, "Laps: {}   Wear target: {}%", p.laps, p.wear_target);
    let _ = writeln!(out);

    let _ = writeln!(out, "{:<12} {:>7}  Status", "Part", "Wear");
    for (part, wear) in &p.part_wear {
        let _ = writeln!(out, "{:<12} {:>6.2}%  {}", part.display_name(), wear, classify(*wear).label());
    }
    let _ = writeln!(out);

    let (lo, hi) = p.fuel.display();
    let (stint_lo, stint_hi) = p.stints.stint_fuel.display();
    let _ = writeln!(out, "Tyres: {:.2}% worn", p.tyre_wear);
    let _ = writeln!(out, "Fuel:  {lo} .. {hi}");
    let _ = writeln!(
        out,
        "Stints: {} laps per set, {} pit stop(s), {stint_lo} .. {stint_hi} per stint",
        p.stints.stint_laps, p.stints.pit_stops
    );
    out
}
