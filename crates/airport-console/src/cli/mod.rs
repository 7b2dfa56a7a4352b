//! Command-line interface for airport-console.
//!
//! This module provides the CLI structure for the `aptctl` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    ConfigCommand, CrewCommand, CrewRoleArg, EmployeeAddArgs, EmployeesCommand, FlightAddArgs,
    FlightStatusArg, FlightsCommand, GroundCommand, ImportCommand, PassengersCommand,
    ReportCommand, ReportKind, ServeCommand, StatusCommand,
};

use crate::logging::Verbosity;

/// aptctl - Airport operations console
///
/// Manage flights, employees, crew rosters, passengers and ground operations
/// from the terminal, or serve the same actions as a REST API.
#[derive(Debug, Parser)]
#[command(name = "aptctl")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Flight schedule
    #[command(subcommand)]
    Flights(FlightsCommand),

    /// Employee administration
    #[command(subcommand)]
    Employees(EmployeesCommand),

    /// Crew rosters
    #[command(subcommand)]
    Crew(CrewCommand),

    /// Passenger manifests and flags
    #[command(subcommand)]
    Passengers(PassengersCommand),

    /// Ground operations
    #[command(subcommand)]
    Ground(GroundCommand),

    /// Traffic and staffing reports
    Report(ReportCommand),

    /// Load records from a JSON file
    Import(ImportCommand),

    /// Serve the REST API
    Serve(ServeCommand),

    /// Show database status
    Status(StatusCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.verbose, self.quiet)
    }
}
