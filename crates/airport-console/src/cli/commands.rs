//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::net::SocketAddr;
use std::path::PathBuf;

use chrono::{NaiveDate, NaiveTime};
use clap::{Args, Subcommand, ValueEnum};

use crate::models::{parse_time_of_day, CrewRole, Employee, Flight, FlightStatus};

/// Flight schedule commands.
#[derive(Debug, Subcommand)]
pub enum FlightsCommand {
    /// List scheduled flights
    List {
        /// Show only arrivals or departures
        #[arg(short, long, value_enum)]
        status: Option<FlightStatusArg>,

        /// Search flight number and airline
        #[arg(long, default_value = "")]
        search: String,

        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Schedule a flight (checked against the gate guard)
    Add(FlightAddArgs),

    /// Remove a flight
    Delete {
        /// Flight number
        flight_no: String,
    },
}

/// Arguments for `flights add`.
#[derive(Debug, Args)]
pub struct FlightAddArgs {
    /// Flight number, e.g. 6E100
    pub flight_no: String,

    /// Operating airline id
    #[arg(long)]
    pub airline_id: i64,

    /// Airline name
    #[arg(long)]
    pub airline: Option<String>,

    /// Arrival or departure
    #[arg(short, long, value_enum)]
    pub status: Option<FlightStatusArg>,

    /// Scheduled time of day (HH:MM or HH:MM:SS)
    #[arg(short, long, value_parser = parse_time_arg)]
    pub time: Option<NaiveTime>,

    /// Gate, e.g. G01
    #[arg(short, long)]
    pub gate: Option<String>,

    /// Terminal number
    #[arg(long)]
    pub terminal: Option<i64>,

    /// Source city
    #[arg(long)]
    pub from: Option<String>,

    /// Destination city
    #[arg(long)]
    pub to: Option<String>,

    /// Airport code (defaults to the configured airport)
    #[arg(long)]
    pub airport: Option<String>,
}

impl FlightAddArgs {
    /// Build the flight record. An empty airport is filled in by the console.
    #[must_use]
    pub fn into_flight(self) -> Flight {
        let mut flight = Flight::new(self.flight_no, self.airport.unwrap_or_default(), self.airline_id);
        flight.airline_name = self.airline;
        flight.status = self.status.map(FlightStatus::from);
        flight.arrival_time = self.time;
        flight.gate_no = self.gate;
        flight.terminal = self.terminal;
        flight.src_city = self.from;
        flight.des_city = self.to;
        flight
    }
}

/// Employee administration commands.
#[derive(Debug, Subcommand)]
pub enum EmployeesCommand {
    /// List administrative staff (use --all to include crew and security)
    List {
        /// Search id, name and job title
        #[arg(long, default_value = "")]
        search: String,

        /// Show only this job title
        #[arg(long)]
        title: Option<String>,

        /// Include every employee
        #[arg(short, long)]
        all: bool,

        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Add an employee
    Add(EmployeeAddArgs),

    /// Remove an employee
    Delete {
        /// Employee id
        employee_id: i64,
    },

    /// Show the average salary
    AverageSalary,
}

/// Arguments for `employees add`.
#[derive(Debug, Args)]
pub struct EmployeeAddArgs {
    /// Employee id
    pub employee_id: i64,

    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// Middle initial
    #[arg(long)]
    pub middle: Option<String>,

    /// Job title, e.g. Pilot or Ground Engineer
    #[arg(long)]
    pub title: Option<String>,

    /// Salary
    #[arg(long)]
    pub salary: Option<i64>,

    /// Hire date (YYYY-MM-DD)
    #[arg(long)]
    pub hire_date: Option<NaiveDate>,

    /// Airport code (defaults to the configured airport)
    #[arg(long)]
    pub airport: Option<String>,
}

impl EmployeeAddArgs {
    /// Build the employee record. An empty airport is filled in by the console.
    #[must_use]
    pub fn into_employee(self) -> Employee {
        let mut employee = Employee::new(
            self.employee_id,
            self.first_name,
            self.last_name,
            self.airport.unwrap_or_default(),
        );
        employee.m_initial = self.middle;
        employee.job_title = self.title;
        employee.employee_salary = self.salary;
        employee.hire_date = self.hire_date;
        employee
    }
}

/// Crew roster commands.
#[derive(Debug, Subcommand)]
pub enum CrewCommand {
    /// List crew members with per-flight pilot and attendant counts
    List {
        /// Search crew id, name and flight number
        #[arg(long, default_value = "")]
        search: String,

        /// Show only crew on this flight
        #[arg(short, long)]
        flight: Option<String>,

        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// List employees eligible for crew duty
    Eligible {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Register an employee as a crew member
    Add {
        /// Crew id
        crew_id: i64,

        /// Employee id
        employee_id: i64,

        /// Crew role
        #[arg(short, long, value_enum)]
        role: CrewRoleArg,
    },

    /// Assign an unassigned crew member to a flight (checked against the roster guard)
    Assign {
        /// Crew id
        crew_id: i64,

        /// Flight number
        flight_no: String,
    },

    /// Remove a crew member
    Delete {
        /// Crew id
        crew_id: i64,
    },
}

/// Passenger commands.
#[derive(Debug, Subcommand)]
pub enum PassengersCommand {
    /// Show a flight's manifest, normal passengers first
    List {
        /// Flight number
        flight_no: String,

        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Set a passenger's status
    Status {
        /// Passenger id
        passenger_id: i64,

        /// New status, e.g. Normal, Flagged or Illness
        status: String,
    },

    /// Resolve a flagged passenger
    Resolve {
        /// Passenger id
        passenger_id: i64,

        /// Reason: baggage_overweight, illness or theft
        reason: String,

        /// Weighed baggage in kilograms (for baggage_overweight)
        #[arg(short, long)]
        weight: Option<f64>,
    },

    /// Remove a passenger
    Delete {
        /// Passenger id
        passenger_id: i64,
    },
}

/// Ground operations commands.
#[derive(Debug, Subcommand)]
pub enum GroundCommand {
    /// Show staff, ill passengers and arrivals
    Board {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Send medical staff to an ill passenger
    AssignMedical {
        /// Passenger id
        passenger_id: i64,

        /// Medical staff employee id
        staff_id: i64,
    },

    /// Send a ground engineer to a flight
    AssignEngineer {
        /// Flight number
        flight_no: String,

        /// Ground engineer employee id
        engineer_id: i64,
    },

    /// List recorded ground assignments
    Assignments {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },
}

/// Report command arguments.
#[derive(Debug, Args)]
pub struct ReportCommand {
    /// Which report to build
    #[arg(value_enum)]
    pub kind: ReportKind,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Available reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportKind {
    /// Flights by direction, airline and route
    FlightTraffic,
    /// Headcount and salary by job title
    Employees,
    /// Passengers, tickets and baggage
    Passengers,
}

/// Import command arguments.
#[derive(Debug, Args)]
pub struct ImportCommand {
    /// JSON file with employees, flights, crew, passengers, tickets and baggage
    pub file: PathBuf,
}

/// Serve command arguments.
#[derive(Debug, Args)]
pub struct ServeCommand {
    /// Address to listen on (overrides the configuration)
    #[arg(short, long)]
    pub addr: Option<SocketAddr>,
}

/// Status command arguments.
#[derive(Debug, Args)]
pub struct StatusCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Flight direction argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FlightStatusArg {
    /// Inbound flights
    Arrival,
    /// Outbound flights
    Departure,
}

impl From<FlightStatusArg> for FlightStatus {
    fn from(arg: FlightStatusArg) -> Self {
        match arg {
            FlightStatusArg::Arrival => Self::Arrival,
            FlightStatusArg::Departure => Self::Departure,
        }
    }
}

/// Crew role argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CrewRoleArg {
    /// Pilot
    Pilot,
    /// Flight attendant
    Attendant,
}

impl From<CrewRoleArg> for CrewRole {
    fn from(arg: CrewRoleArg) -> Self {
        match arg {
            CrewRoleArg::Pilot => Self::Pilot,
            CrewRoleArg::Attendant => Self::FlightAttendant,
        }
    }
}

fn parse_time_arg(s: &str) -> Result<NaiveTime, String> {
    parse_time_of_day(s).ok_or_else(|| format!("expected HH:MM or HH:MM:SS, got {s:?}"))
}
