//! `aptctl` - CLI for airport-console
//!
//! This binary drives the console actions from a terminal and can serve them
//! as a REST API.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use airport_console::cli::{
    Cli, Command, ConfigCommand, CrewCommand, EmployeesCommand, FlightsCommand, GroundCommand,
    PassengersCommand, ReportCommand, ReportKind,
};
use airport_console::flagging::{FlagOutcome, FlagReason};
use airport_console::models::{Dataset, FlightStatus, PassengerStatus};
use airport_console::{filter, init_logging, server, Config, Console, Storage};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let mut config = Config::load_from(cli.config.clone())?;

    // Commands that never touch the store
    let command = match cli.command {
        Command::Config(config_cmd) => return handle_config(&config, config_cmd),
        Command::Serve(serve_cmd) => {
            if let Some(addr) = serve_cmd.addr {
                config.server.addr = addr;
            }
            let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
            return Ok(runtime.block_on(server::serve(&config))?);
        }
        other => other,
    };

    let storage = Storage::open(config.database_path())?;
    let console = Console::new(storage, config.console.default_airport_id.clone());

    match command {
        Command::Flights(cmd) => handle_flights(&console, cmd),
        Command::Employees(cmd) => handle_employees(&console, cmd),
        Command::Crew(cmd) => handle_crew(&console, cmd),
        Command::Passengers(cmd) => handle_passengers(&console, cmd),
        Command::Ground(cmd) => handle_ground(&console, cmd),
        Command::Report(cmd) => handle_report(&console, &cmd),
        Command::Import(cmd) => {
            let text = fs::read_to_string(&cmd.file)
                .with_context(|| format!("failed to read {}", cmd.file.display()))?;
            let dataset: Dataset = serde_json::from_str(&text)
                .with_context(|| format!("failed to parse {}", cmd.file.display()))?;
            let summary = console.import(&dataset)?;
            println!(
                "Imported {} employees, {} flights, {} crew, {} passengers, {} tickets, {} bags.",
                summary.employees,
                summary.flights,
                summary.crew,
                summary.passengers,
                summary.tickets,
                summary.baggage
            );
            Ok(())
        }
        Command::Status(cmd) => handle_status(&config, &console, cmd.json),
        Command::Config(_) | Command::Serve(_) => Ok(()),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn or_dash(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

fn handle_flights(console: &Console, cmd: FlightsCommand) -> Result<()> {
    match cmd {
        FlightsCommand::List {
            status,
            search,
            json,
        } => {
            let snapshot = console.flights()?;
            let flights = filter::flights(&snapshot, status.map(FlightStatus::from), &search);
            if json {
                return print_json(&flights);
            }
            println!(
                "{:<10} {:<16} {:<10} {:<9} {:<6} {:<8} Route",
                "Flight", "Airline", "Status", "Time", "Gate", "Terminal"
            );
            for flight in flights {
                let status = flight.status.map(|s| s.to_string());
                let time = flight.arrival_time.map(|t| t.format("%H:%M").to_string());
                let terminal = flight.terminal.map(|t| t.to_string());
                println!(
                    "{:<10} {:<16} {:<10} {:<9} {:<6} {:<8} {}",
                    flight.flight_no,
                    or_dash(flight.airline_name.as_deref()),
                    or_dash(status.as_deref()),
                    or_dash(time.as_deref()),
                    or_dash(flight.gate_no.as_deref()),
                    or_dash(terminal.as_deref()),
                    flight.route_label()
                );
            }
        }
        FlightsCommand::Add(args) => {
            let flight = args.into_flight();
            let flight_no = flight.flight_no.trim().to_string();
            console.add_flight(flight)?;
            println!("Flight {flight_no} added.");
        }
        FlightsCommand::Delete { flight_no } => {
            console.delete_flight(&flight_no)?;
            println!("Flight {flight_no} deleted.");
        }
    }
    Ok(())
}

fn handle_employees(console: &Console, cmd: EmployeesCommand) -> Result<()> {
    match cmd {
        EmployeesCommand::List {
            search,
            title,
            all,
            json,
        } => {
            let snapshot = console.employees()?;
            let employees: Vec<_> = if all {
                snapshot.iter().collect()
            } else {
                filter::administration(&snapshot, &search, title.as_deref())
            };
            if json {
                return print_json(&employees);
            }
            println!(
                "{:<8} {:<24} {:<22} {:>10} Airport",
                "ID", "Name", "Job title", "Salary"
            );
            for employee in employees {
                let salary = employee.employee_salary.map(|s| s.to_string());
                println!(
                    "{:<8} {:<24} {:<22} {:>10} {}",
                    employee.employee_id,
                    employee.display_name(),
                    or_dash(employee.job_title.as_deref()),
                    or_dash(salary.as_deref()),
                    employee.airport_id
                );
            }
        }
        EmployeesCommand::Add(args) => {
            let employee = args.into_employee();
            let id = employee.employee_id;
            console.add_employee(employee)?;
            println!("Employee {id} added.");
        }
        EmployeesCommand::Delete { employee_id } => {
            console.delete_employee(employee_id)?;
            println!("Employee {employee_id} deleted.");
        }
        EmployeesCommand::AverageSalary => {
            println!("Average salary: {:.2}", console.average_salary()?);
        }
    }
    Ok(())
}

fn handle_crew(console: &Console, cmd: CrewCommand) -> Result<()> {
    match cmd {
        CrewCommand::List {
            search,
            flight,
            json,
        } => {
            let snapshot = console.crew()?;
            let crew = filter::crew(&snapshot, &search, flight.as_deref());
            let counts = console.roster_counts()?;
            if json {
                return print_json(&serde_json::json!({ "crew": crew, "roster_counts": counts }));
            }
            println!(
                "{:<8} {:<18} {:<10} {:<24} Flight",
                "Crew", "Role", "Employee", "Name"
            );
            for member in crew {
                println!(
                    "{:<8} {:<18} {:<10} {:<24} {}",
                    member.crew_id,
                    member.crew_role.to_string(),
                    member.employee_id,
                    or_dash(member.employee_name.as_deref()),
                    or_dash(member.assigned_flight())
                );
            }
            if !counts.is_empty() {
                println!();
                println!("Per-flight roster:");
                for (flight_no, count) in &counts {
                    println!(
                        "  {flight_no:<10} pilots {}  attendants {}",
                        count.pilots, count.attendants
                    );
                }
            }
        }
        CrewCommand::Eligible { json } => {
            let staff = console.crew_eligible()?;
            if json {
                return print_json(&staff);
            }
            for member in staff {
                println!(
                    "{:<8} {:<24} {}",
                    member.employee_id,
                    or_dash(member.employee_name.as_deref()),
                    or_dash(member.job_title.as_deref())
                );
            }
        }
        CrewCommand::Add {
            crew_id,
            employee_id,
            role,
        } => {
            console.add_crew_member(crew_id, employee_id, role.into())?;
            println!("Crew member {crew_id} added.");
        }
        CrewCommand::Assign { crew_id, flight_no } => {
            console.assign_crew(crew_id, &flight_no)?;
            println!("Crew member {crew_id} assigned to {flight_no}.");
        }
        CrewCommand::Delete { crew_id } => {
            console.delete_crew(crew_id)?;
            println!("Crew member {crew_id} deleted.");
        }
    }
    Ok(())
}

fn handle_passengers(console: &Console, cmd: PassengersCommand) -> Result<()> {
    match cmd {
        PassengersCommand::List { flight_no, json } => {
            let manifest = console.manifest(&flight_no)?;
            if json {
                return print_json(&manifest);
            }
            println!(
                "{:<8} {:<24} {:<10} {:>8} Ticket",
                "ID", "Name", "Status", "Bag kg"
            );
            for row in manifest {
                let weight = row.baggage_weight.map(|w| format!("{w:.1}"));
                println!(
                    "{:<8} {:<24} {:<10} {:>8} {}",
                    row.passenger_id,
                    or_dash(row.passenger_name.as_deref()),
                    row.status.to_string(),
                    or_dash(weight.as_deref()),
                    or_dash(row.ticket_id.as_deref())
                );
            }
        }
        PassengersCommand::Status {
            passenger_id,
            status,
        } => {
            let status = PassengerStatus::from(status.as_str());
            console.update_passenger_status(passenger_id, &status)?;
            println!("Passenger {passenger_id} is now {status}.");
        }
        PassengersCommand::Resolve {
            passenger_id,
            reason,
            weight,
        } => {
            let reason = FlagReason::parse(&reason, weight)?;
            match console.resolve_flag(passenger_id, reason)? {
                FlagOutcome::Remove => println!("Passenger {passenger_id} removed ({reason})."),
                FlagOutcome::SetStatus { status } => {
                    println!("Passenger {passenger_id} is now {status} ({reason}).");
                }
            }
        }
        PassengersCommand::Delete { passenger_id } => {
            console.delete_passenger(passenger_id)?;
            println!("Passenger {passenger_id} deleted.");
        }
    }
    Ok(())
}

fn handle_ground(console: &Console, cmd: GroundCommand) -> Result<()> {
    match cmd {
        GroundCommand::Board { json } => {
            let board = console.ground_board()?;
            if json {
                return print_json(&board);
            }
            println!("Medical staff:");
            for staff in &board.medical_staff {
                println!(
                    "  {:<8} {}",
                    staff.employee_id,
                    or_dash(staff.employee_name.as_deref())
                );
            }
            println!("Ground engineers:");
            for staff in &board.ground_engineers {
                println!(
                    "  {:<8} {}",
                    staff.employee_id,
                    or_dash(staff.employee_name.as_deref())
                );
            }
            println!("Ill passengers:");
            for passenger in &board.ill_passengers {
                println!(
                    "  {:<8} {:<24} {}",
                    passenger.passenger_id,
                    or_dash(passenger.passenger_name.as_deref()),
                    passenger.flight_no
                );
            }
            println!("Arrivals:");
            for flight in &board.arrival_flights {
                let time = flight.arrival_time.map(|t| t.format("%H:%M").to_string());
                println!(
                    "  {:<10} {:<16} {}",
                    flight.flight_no,
                    or_dash(flight.airline_name.as_deref()),
                    or_dash(time.as_deref())
                );
            }
        }
        GroundCommand::AssignMedical {
            passenger_id,
            staff_id,
        } => {
            console.assign_medical(passenger_id, staff_id)?;
            println!("Medical staff {staff_id} assigned to passenger {passenger_id}.");
        }
        GroundCommand::AssignEngineer {
            flight_no,
            engineer_id,
        } => {
            console.assign_engineer(&flight_no, engineer_id)?;
            println!("Ground engineer {engineer_id} assigned to flight {flight_no}.");
        }
        GroundCommand::Assignments { json } => {
            let assignments = console.ground_assignments()?;
            if json {
                return print_json(&assignments);
            }
            for assignment in assignments {
                let target = assignment
                    .flight_no
                    .clone()
                    .or_else(|| assignment.passenger_id.map(|id| format!("passenger {id}")))
                    .unwrap_or_default();
                println!(
                    "{}  {:<10} employee {:<8} {}",
                    assignment.assigned_at.format("%Y-%m-%d %H:%M"),
                    assignment.kind.to_string(),
                    assignment.employee_id,
                    target
                );
            }
        }
    }
    Ok(())
}

fn handle_report(console: &Console, cmd: &ReportCommand) -> Result<()> {
    match cmd.kind {
        ReportKind::FlightTraffic => {
            let report = console.flight_traffic()?;
            if cmd.json {
                return print_json(&report);
            }
            println!("Flight Traffic");
            println!("==============");
            println!("Total flights:  {}", report.total_flights);
            println!("Arrivals:       {}", report.arrivals);
            println!("Departures:     {}", report.departures);
            println!();
            println!("[Airlines]");
            for (airline, count) in &report.airline_breakdown {
                println!("  {airline:<24} {count}");
            }
            println!();
            println!("[Top routes]");
            for route in &report.top_routes {
                println!("  {:<32} {}", route.route, route.flights);
            }
        }
        ReportKind::Employees => {
            let report = console.employee_stats()?;
            if cmd.json {
                return print_json(&report);
            }
            println!("Employee Statistics");
            println!("===================");
            println!("Total employees:  {}", report.total_employees);
            println!("Salary expense:   {}", report.total_salary_expense);
            println!("Average salary:   {:.2}", report.average_salary);
            println!();
            println!("[Job titles]");
            for (title, stats) in &report.job_breakdown {
                println!(
                    "  {title:<24} {:>4} staff  {:>12} total",
                    stats.count, stats.total_salary
                );
            }
        }
        ReportKind::Passengers => {
            let report = console.passenger_traffic()?;
            if cmd.json {
                return print_json(&report);
            }
            println!("Passenger Traffic");
            println!("=================");
            println!("Total passengers:  {}", report.total_passengers);
            println!("Total tickets:     {}", report.total_tickets);
            println!("Total bags:        {}", report.total_baggage);
            println!(
                "Baggage weight:    {:.1} kg (avg {:.1} kg)",
                report.baggage_stats.total_weight, report.baggage_stats.average_weight
            );
            println!();
            println!("[Ticket classes]");
            for (class, count) in &report.ticket_class_breakdown {
                println!("  {class:<24} {count}");
            }
        }
    }
    Ok(())
}

fn handle_status(config: &Config, console: &Console, json: bool) -> Result<()> {
    let stats = console.stats()?;
    if json {
        return print_json(&serde_json::json!({
            "database_path": config.database_path(),
            "default_airport_id": console.default_airport_id(),
            "stats": stats,
        }));
    }
    println!("aptctl status");
    println!("-------------");
    println!("Database:        {}", config.database_path().display());
    println!("Schema version:  {}", stats.schema_version);
    println!("Size:            {} bytes", stats.db_size_bytes);
    println!("Airport:         {}", console.default_airport_id());
    println!();
    println!("Flights:             {}", stats.flights);
    println!("Employees:           {}", stats.employees);
    println!("Crew:                {}", stats.crew);
    println!("Passengers:          {}", stats.passengers);
    println!("Tickets:             {}", stats.tickets);
    println!("Bags:                {}", stats.baggage);
    println!("Ground assignments:  {}", stats.ground_assignments);
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                print_json(config)?;
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  Database path:       {}", config.database_path().display());
                println!();
                println!("[Server]");
                println!("  Address:             {}", config.server.addr);
                println!(
                    "  Request timeout (s): {}",
                    config.server.request_timeout_secs
                );
                println!();
                println!("[Console]");
                println!(
                    "  Default airport:     {}",
                    config.console.default_airport_id
                );
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
