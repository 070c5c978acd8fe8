//! CLI Module
//!
//! Command-line interface for the ghan-foot calculator.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::units::Unit;

/// Ghanfoot - timber log volume calculator
#[derive(Parser, Debug)]
#[command(name = "ghanfoot")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the volume of a single log
    #[command(name = "log")]
    Log {
        /// Length of the log
        #[arg(allow_hyphen_values = true)]
        length: String,

        /// Circumference of the log
        #[arg(allow_hyphen_values = true)]
        circumference: String,

        /// Unit of the length
        #[arg(short, long, value_enum, default_value_t = UnitArg::M)]
        length_unit: UnitArg,

        /// Unit of the circumference
        #[arg(short, long, value_enum, default_value_t = UnitArg::Cm)]
        circumference_unit: UnitArg,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Total a sheet of logs read from a JSON file
    #[command(name = "total")]
    Total {
        /// JSON array of log entries, or '-' for stdin
        path: PathBuf,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert a measurement to meters or centimeters
    #[command(name = "convert")]
    Convert {
        /// Value to convert
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Unit the value is in
        #[arg(short, long, value_enum)]
        from: UnitArg,

        /// Target unit
        #[arg(short, long, value_enum, default_value_t = TargetArg::M)]
        to: TargetArg,
    },
}

/// Units accepted on the command line
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnitArg {
    M,
    Cm,
    Ft,
    In,
}

impl From<UnitArg> for Unit {
    fn from(arg: UnitArg) -> Self {
        match arg {
            UnitArg::M => Unit::Meter,
            UnitArg::Cm => Unit::Centimeter,
            UnitArg::Ft => Unit::Foot,
            UnitArg::In => Unit::Inch,
        }
    }
}

/// Targets of the `convert` command
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetArg {
    M,
    Cm,
}
