//! CLI Command Implementations
//!
//! Implements the actual logic for each CLI command. Output goes to the
//! supplied writer so commands can be exercised without a terminal.

use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::Path;

use log::info;
use serde_json::json;

use crate::cli::{Commands, TargetArg};
use crate::error::{GhanError, Result};
use crate::sheet::LogSheet;
use crate::units::{parse_or_zero, to_centimeters, to_meters, Unit};
use crate::volume::{compute_detailed, compute_formatted};

/// Dispatch a parsed command.
pub fn run(cmd: Commands, out: &mut dyn Write) -> Result<()> {
    match cmd {
        Commands::Log {
            length,
            circumference,
            length_unit,
            circumference_unit,
            json,
        } => log_volume(
            &length,
            &circumference,
            length_unit.into(),
            circumference_unit.into(),
            json,
            out,
        ),
        Commands::Total { path, json } => {
            let sheet = load_sheet(&path)?;
            total(&sheet, json, out)
        }
        Commands::Convert { value, from, to } => convert(&value, from.into(), to, out),
    }
}

/// Print the volume of a single log.
pub fn log_volume(
    length: &str,
    circumference: &str,
    length_unit: Unit,
    circumference_unit: Unit,
    as_json: bool,
    out: &mut dyn Write,
) -> Result<()> {
    info!(
        "Computing volume for length={}{} circumference={}{}",
        length, length_unit, circumference, circumference_unit
    );

    let formatted = compute_formatted(length, circumference, length_unit, circumference_unit);
    let detailed = compute_detailed(length, circumference, length_unit, circumference_unit);

    if as_json {
        let report = json!({
            "volume": formatted,
            "individual": detailed.individual,
            "final": detailed.final_volume,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    writeln!(out, "Volume: {} m³", formatted)?;
    writeln!(out, "Rounded: {} m³", detailed.display_cubic_meters())?;
    writeln!(out, "Ghan-foot: {} ft³", detailed.display_final())?;
    Ok(())
}

/// Read a sheet from a JSON file, or from stdin when `path` is `-`.
pub fn load_sheet(path: &Path) -> Result<LogSheet> {
    load_sheet_from(path, io::stdin().lock())
}

/// Like [`load_sheet`], with `stdin` standing in for standard input.
pub fn load_sheet_from(path: &Path, mut stdin: impl Read) -> Result<LogSheet> {
    if path.as_os_str() == "-" {
        info!("Reading sheet from stdin");
        let mut text = String::new();
        stdin.read_to_string(&mut text)?;
        return Ok(serde_json::from_str(&text)?);
    }

    info!("Reading sheet: {}", path.display());
    if !path.exists() {
        return Err(GhanError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

/// Print each row's volume and the sheet total.
pub fn total(sheet: &LogSheet, as_json: bool, out: &mut dyn Write) -> Result<()> {
    info!("Totalling {} logs", sheet.len());

    let volumes = sheet.row_volumes();
    let total = sheet.total();

    if as_json {
        let report = json!({
            "rows": volumes,
            "total": total,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    for (i, volume) in volumes.iter().enumerate() {
        writeln!(out, "Log #{}: {} m³", i + 1, volume.display_cubic_meters())?;
    }
    writeln!(out, "{:-<30}", "")?;
    writeln!(out, "Total: {} ft³", total)?;
    Ok(())
}

/// Print `value` converted to meters or centimeters.
pub fn convert(value: &str, from: Unit, to: TargetArg, out: &mut dyn Write) -> Result<()> {
    let converted = match to {
        TargetArg::M => to_meters(parse_or_zero(value), from),
        TargetArg::Cm => to_centimeters(value, from),
    };
    let target = match to {
        TargetArg::M => Unit::Meter,
        TargetArg::Cm => Unit::Centimeter,
    };

    writeln!(out, "{} {}", converted, target)?;
    Ok(())
}
