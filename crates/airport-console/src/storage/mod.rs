//! Storage layer for airport-console.
//!
//! A single `SQLite` database holds flights, staff, crew, passengers and
//! their tickets and baggage. Foreign keys are enforced, so removing a
//! passenger removes their baggage and tickets, removing a flight unassigns
//! its crew, and a flight that still has passengers cannot be removed.

pub mod migrations;
pub mod schema;

use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, ErrorCode, OptionalExtension, Row};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::models::{
    parse_time_of_day, wire, Baggage, CrewMember, Dataset, Employee, Flight, FlightStatus,
    GroundAssignment, Passenger, PassengerStatus, PassengerSummary, Ticket,
};

const DATE_FORMAT: &str = "%Y-%m-%d";

const FLIGHT_COLUMNS: &str = "Flight_no, Airline_name, Flight_status, arrival_time, Airport_ID, \
                              Airline_ID, Gate_no, Terminal, src_city, des_city";

const EMPLOYEE_COLUMNS: &str = "Employee_ID, F_Name, M_Initial, L_Name, Employee_name, \
                                Hire_date, Employee_Salary, Job_title, Airport_ID";

const PASSENGER_COLUMNS: &str = "Passenger_ID, F_Name, M_Name, L_Name, Passenger_name, DOB, \
                                 Passenger_Address, Flight_no, Passenger_status";

const CREW_SELECT: &str = r"
SELECT c.Crew_ID, c.Crew_role, c.Employee_ID,
       COALESCE(e.Employee_name, e.F_Name || ' ' || e.L_Name),
       c.Flight_no, f.src_city, f.des_city
FROM crew c
LEFT JOIN employees e ON e.Employee_ID = c.Employee_ID
LEFT JOIN flights f ON f.Flight_no = c.Flight_no
";

/// `SQLite` store for the airport's operational data.
#[derive(Debug)]
pub struct Storage {
    /// Path to the database file.
    path: PathBuf,
    /// Database connection.
    conn: Connection,
}

impl Storage {
    /// Open or create a database at `path`.
    ///
    /// Parent directories are created as needed and the schema is brought up
    /// to date.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or database cannot be created, or a
    /// migration fails.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        debug!("Opening database at {}", path.display());
        let conn = Connection::open(&path).map_err(|source| Error::DatabaseOpen {
            path: path.clone(),
            source,
        })?;

        conn.execute_batch(
            "PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL; PRAGMA foreign_keys=ON;",
        )?;
        migrations::initialize_schema(&conn)?;

        info!("Database opened at {}", path.display());
        Ok(Self { path, conn })
    }

    /// Create an in-memory store.
    ///
    /// # Errors
    ///
    /// Returns an error if the in-memory database cannot be created.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|source| Error::DatabaseOpen {
            path: PathBuf::from(":memory:"),
            source,
        })?;

        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        migrations::initialize_schema(&conn)?;

        Ok(Self {
            path: PathBuf::from(":memory:"),
            conn,
        })
    }

    /// Path to the database file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    // === Flights ===

    /// All flights in schedule order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn flights(&self) -> Result<Vec<Flight>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {FLIGHT_COLUMNS} FROM flights ORDER BY rowid"))?;
        let flights = stmt
            .query_map([], Self::row_to_flight)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(flights)
    }

    /// Look up one flight.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn flight(&self, flight_no: &str) -> Result<Option<Flight>> {
        let flight = self
            .conn
            .query_row(
                &format!("SELECT {FLIGHT_COLUMNS} FROM flights WHERE Flight_no = ?1"),
                [flight_no],
                Self::row_to_flight,
            )
            .optional()?;
        Ok(flight)
    }

    /// Insert a flight.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Conflict`] if the flight number is taken.
    pub fn insert_flight(&self, flight: &Flight) -> Result<()> {
        self.conn
            .execute(
                &format!(
                    "INSERT INTO flights ({FLIGHT_COLUMNS}) \
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)"
                ),
                params![
                    flight.flight_no,
                    flight.airline_name,
                    flight.status.map(|s| s.to_string()),
                    flight
                        .arrival_time
                        .map(|t| t.format(wire::TIME_FORMAT).to_string()),
                    flight.airport_id,
                    flight.airline_id,
                    flight.gate_no,
                    flight.terminal,
                    flight.src_city,
                    flight.des_city,
                ],
            )
            .map_err(|e| constraint(e, || format!("flight {} already exists", flight.flight_no)))?;

        debug!(flight_no = %flight.flight_no, "Inserted flight");
        Ok(())
    }

    /// Delete a flight. Its crew become unassigned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] for an unknown flight and
    /// [`Error::Conflict`] while passengers are still booked on it.
    pub fn delete_flight(&self, flight_no: &str) -> Result<()> {
        let deleted = self
            .conn
            .execute("DELETE FROM flights WHERE Flight_no = ?1", [flight_no])
            .map_err(|e| constraint(e, || format!("flight {flight_no} still has passengers")))?;
        if deleted == 0 {
            return Err(Error::not_found("flight", flight_no));
        }
        debug!(flight_no, "Deleted flight");
        Ok(())
    }

    // === Employees ===

    /// All employees by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn employees(&self) -> Result<Vec<Employee>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employees ORDER BY Employee_ID"
        ))?;
        let employees = stmt
            .query_map([], Self::row_to_employee)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(employees)
    }

    /// Look up one employee.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn employee(&self, employee_id: i64) -> Result<Option<Employee>> {
        let employee = self
            .conn
            .query_row(
                &format!("SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE Employee_ID = ?1"),
                [employee_id],
                Self::row_to_employee,
            )
            .optional()?;
        Ok(employee)
    }

    /// Insert an employee. A missing display name is derived from the name parts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Conflict`] if the id is taken.
    pub fn insert_employee(&self, employee: &Employee) -> Result<()> {
        self.conn
            .execute(
                &format!(
                    "INSERT INTO employees ({EMPLOYEE_COLUMNS}) \
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)"
                ),
                params![
                    employee.employee_id,
                    employee.f_name,
                    employee.m_initial,
                    employee.l_name,
                    employee.display_name(),
                    employee.hire_date.map(|d| d.format(DATE_FORMAT).to_string()),
                    employee.employee_salary,
                    employee.job_title,
                    employee.airport_id,
                ],
            )
            .map_err(|e| {
                constraint(e, || {
                    format!("employee {} already exists", employee.employee_id)
                })
            })?;

        debug!(employee_id = employee.employee_id, "Inserted employee");
        Ok(())
    }

    /// Delete an employee along with their crew record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] for an unknown employee.
    pub fn delete_employee(&self, employee_id: i64) -> Result<()> {
        let deleted = self
            .conn
            .execute("DELETE FROM employees WHERE Employee_ID = ?1", [employee_id])?;
        if deleted == 0 {
            return Err(Error::not_found("employee", employee_id));
        }
        debug!(employee_id, "Deleted employee");
        Ok(())
    }

    // === Crew ===

    /// The full roster, unassigned members included, with employee names and
    /// the assigned flight's route.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn crew(&self) -> Result<Vec<CrewMember>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CREW_SELECT} ORDER BY c.Crew_ID"))?;
        let crew = stmt
            .query_map([], Self::row_to_crew)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(crew)
    }

    /// Look up one crew member.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn crew_member(&self, crew_id: i64) -> Result<Option<CrewMember>> {
        let member = self
            .conn
            .query_row(
                &format!("{CREW_SELECT} WHERE c.Crew_ID = ?1"),
                [crew_id],
                Self::row_to_crew,
            )
            .optional()?;
        Ok(member)
    }

    /// Insert a crew record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Conflict`] if the crew id is taken, the employee
    /// already has a crew record, or a referenced row is missing.
    pub fn insert_crew(&self, member: &CrewMember) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO crew (Crew_ID, Crew_role, Employee_ID, Flight_no) \
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    member.crew_id,
                    member.crew_role.job_title(),
                    member.employee_id,
                    member.assigned_flight(),
                ],
            )
            .map_err(|e| {
                constraint(e, || {
                    format!(
                        "crew member {} (employee {}) conflicts with the roster",
                        member.crew_id, member.employee_id
                    )
                })
            })?;

        debug!(crew_id = member.crew_id, "Inserted crew member");
        Ok(())
    }

    /// Put an unassigned crew member on a flight.
    ///
    /// Returns `false` when no unassigned crew member with that id exists.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Conflict`] if the flight does not exist.
    pub fn assign_crew(&self, crew_id: i64, flight_no: &str) -> Result<bool> {
        let updated = self
            .conn
            .execute(
                "UPDATE crew SET Flight_no = ?2 \
                 WHERE Crew_ID = ?1 AND (Flight_no IS NULL OR Flight_no IN ('', 'NULL'))",
                params![crew_id, flight_no],
            )
            .map_err(|e| constraint(e, || format!("flight {flight_no} does not exist")))?;
        debug!(crew_id, flight_no, updated, "Assigned crew member");
        Ok(updated > 0)
    }

    /// Delete a crew record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] for an unknown crew id.
    pub fn delete_crew(&self, crew_id: i64) -> Result<()> {
        let deleted = self
            .conn
            .execute("DELETE FROM crew WHERE Crew_ID = ?1", [crew_id])?;
        if deleted == 0 {
            return Err(Error::not_found("crew member", crew_id));
        }
        debug!(crew_id, "Deleted crew member");
        Ok(())
    }

    // === Passengers ===

    /// All passengers by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn passengers(&self) -> Result<Vec<Passenger>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {PASSENGER_COLUMNS} FROM passengers ORDER BY Passenger_ID"
        ))?;
        let passengers = stmt
            .query_map([], Self::row_to_passenger)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(passengers)
    }

    /// Manifest rows for one flight in store order, each with the
    /// passenger's first bag and ticket.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn passengers_for_flight(&self, flight_no: &str) -> Result<Vec<PassengerSummary>> {
        let mut stmt = self.conn.prepare(
            r"
            SELECT p.Passenger_ID,
                   COALESCE(p.Passenger_name, p.F_Name || ' ' || p.L_Name),
                   p.Passenger_status,
                   (SELECT b.Baggage_weight FROM baggage b
                    WHERE b.Passenger_ID = p.Passenger_ID ORDER BY b.Baggage_ID LIMIT 1),
                   (SELECT b.Baggage_ID FROM baggage b
                    WHERE b.Passenger_ID = p.Passenger_ID ORDER BY b.Baggage_ID LIMIT 1),
                   (SELECT t.Ticket_no FROM tickets t
                    WHERE t.Passenger_ID = p.Passenger_ID ORDER BY t.rowid LIMIT 1)
            FROM passengers p
            WHERE p.Flight_no = ?1
            ORDER BY p.Passenger_ID
            ",
        )?;
        let rows = stmt
            .query_map([flight_no], |row| {
                let status: String = row.get(2)?;
                Ok(PassengerSummary {
                    passenger_id: row.get(0)?,
                    passenger_name: row.get(1)?,
                    status: PassengerStatus::from(status),
                    baggage_weight: row.get(3)?,
                    baggage_id: row.get(4)?,
                    ticket_id: row.get(5)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Insert a passenger.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Conflict`] if the id is taken or the flight does not exist.
    pub fn insert_passenger(&self, passenger: &Passenger) -> Result<()> {
        self.conn
            .execute(
                &format!(
                    "INSERT INTO passengers ({PASSENGER_COLUMNS}) \
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)"
                ),
                params![
                    passenger.passenger_id,
                    passenger.f_name,
                    passenger.m_name,
                    passenger.l_name,
                    passenger.display_name(),
                    passenger.dob.map(|d| d.format(DATE_FORMAT).to_string()),
                    passenger.passenger_address,
                    passenger.flight_no,
                    passenger.status.to_string(),
                ],
            )
            .map_err(|e| {
                constraint(e, || {
                    format!(
                        "passenger {} cannot be booked on flight {}",
                        passenger.passenger_id, passenger.flight_no
                    )
                })
            })?;

        debug!(passenger_id = passenger.passenger_id, "Inserted passenger");
        Ok(())
    }

    /// Change a passenger's status.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] for an unknown passenger.
    pub fn set_passenger_status(&self, passenger_id: i64, status: &PassengerStatus) -> Result<()> {
        let updated = self.conn.execute(
            "UPDATE passengers SET Passenger_status = ?2 WHERE Passenger_ID = ?1",
            params![passenger_id, status.to_string()],
        )?;
        if updated == 0 {
            return Err(Error::not_found("passenger", passenger_id));
        }
        debug!(passenger_id, %status, "Updated passenger status");
        Ok(())
    }

    /// Remove a passenger along with their tickets and baggage.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] for an unknown passenger.
    pub fn delete_passenger(&self, passenger_id: i64) -> Result<()> {
        let deleted = self
            .conn
            .execute("DELETE FROM passengers WHERE Passenger_ID = ?1", [passenger_id])?;
        if deleted == 0 {
            return Err(Error::not_found("passenger", passenger_id));
        }
        debug!(passenger_id, "Deleted passenger");
        Ok(())
    }

    // === Tickets and baggage ===

    /// All tickets.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn tickets(&self) -> Result<Vec<Ticket>> {
        let mut stmt = self.conn.prepare(
            "SELECT Ticket_no, Flight_no, Passenger_ID, Price, Seat_No, Booking_date, Class \
             FROM tickets ORDER BY rowid",
        )?;
        let tickets = stmt
            .query_map([], |row| {
                let booking_date: Option<String> = row.get(5)?;
                Ok(Ticket {
                    ticket_no: row.get(0)?,
                    flight_no: row.get(1)?,
                    passenger_id: row.get(2)?,
                    price: row.get(3)?,
                    seat_no: row.get(4)?,
                    booking_date: booking_date.as_deref().and_then(parse_date),
                    class: row.get(6)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(tickets)
    }

    /// Insert a ticket.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Conflict`] if the ticket number is taken or the
    /// passenger does not exist.
    pub fn insert_ticket(&self, ticket: &Ticket) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO tickets \
                 (Ticket_no, Flight_no, Passenger_ID, Price, Seat_No, Booking_date, Class) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    ticket.ticket_no,
                    ticket.flight_no,
                    ticket.passenger_id,
                    ticket.price,
                    ticket.seat_no,
                    ticket.booking_date.map(|d| d.format(DATE_FORMAT).to_string()),
                    ticket.class,
                ],
            )
            .map_err(|e| constraint(e, || format!("ticket {} rejected", ticket.ticket_no)))?;
        Ok(())
    }

    /// All checked bags.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn baggage(&self) -> Result<Vec<Baggage>> {
        let mut stmt = self.conn.prepare(
            "SELECT Baggage_ID, Passenger_ID, Flight_no, Baggage_weight, Baggage_status \
             FROM baggage ORDER BY Baggage_ID",
        )?;
        let baggage = stmt
            .query_map([], |row| {
                Ok(Baggage {
                    baggage_id: row.get(0)?,
                    passenger_id: row.get(1)?,
                    flight_no: row.get(2)?,
                    weight_kg: row.get(3)?,
                    status: row.get(4)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(baggage)
    }

    /// Insert a checked bag.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Conflict`] if the bag id is taken or the passenger
    /// does not exist.
    pub fn insert_baggage(&self, bag: &Baggage) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO baggage \
                 (Baggage_ID, Passenger_ID, Flight_no, Baggage_weight, Baggage_status) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    bag.baggage_id,
                    bag.passenger_id,
                    bag.flight_no,
                    bag.weight_kg,
                    bag.status,
                ],
            )
            .map_err(|e| constraint(e, || format!("baggage {} rejected", bag.baggage_id)))?;
        Ok(())
    }

    // === Ground operations ===

    /// Record a ground-staff dispatch and return its id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Conflict`] if a referenced row is missing.
    pub fn insert_ground_assignment(&self, assignment: &GroundAssignment) -> Result<i64> {
        self.conn
            .execute(
                "INSERT INTO ground_assignments \
                 (kind, employee_id, passenger_id, flight_no, assigned_at) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    assignment.kind.to_string(),
                    assignment.employee_id,
                    assignment.passenger_id,
                    assignment.flight_no,
                    assignment.assigned_at.to_rfc3339(),
                ],
            )
            .map_err(|e| constraint(e, || "ground assignment references a missing record".to_string()))?;

        let id = self.conn.last_insert_rowid();
        debug!(id, kind = %assignment.kind, "Recorded ground assignment");
        Ok(id)
    }

    /// All ground-staff dispatches, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is malformed.
    pub fn ground_assignments(&self) -> Result<Vec<GroundAssignment>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, kind, employee_id, passenger_id, flight_no, assigned_at \
             FROM ground_assignments ORDER BY id",
        )?;
        let assignments = stmt
            .query_map([], |row| {
                let kind: String = row.get(1)?;
                let assigned_at: String = row.get(5)?;
                Ok(GroundAssignment {
                    id: Some(row.get(0)?),
                    kind: parse_column(1, &kind)?,
                    employee_id: row.get(2)?,
                    passenger_id: row.get(3)?,
                    flight_no: row.get(4)?,
                    assigned_at: DateTime::parse_from_rfc3339(&assigned_at)
                        .map(|dt| dt.with_timezone(&Utc))
                        .map_err(|e| conversion_failure(5, e))?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(assignments)
    }

    // === Bulk ===

    /// Load a dataset in one transaction. Nothing is written if any record
    /// is rejected.
    ///
    /// # Errors
    ///
    /// Returns the first insert error.
    pub fn import(&self, dataset: &Dataset) -> Result<ImportSummary> {
        let tx = self.conn.unchecked_transaction()?;

        for employee in &dataset.employees {
            self.insert_employee(employee)?;
        }
        for flight in &dataset.flights {
            self.insert_flight(flight)?;
        }
        for member in &dataset.crew {
            self.insert_crew(member)?;
        }
        for passenger in &dataset.passengers {
            self.insert_passenger(passenger)?;
        }
        for ticket in &dataset.tickets {
            self.insert_ticket(ticket)?;
        }
        for bag in &dataset.baggage {
            self.insert_baggage(bag)?;
        }

        tx.commit()?;

        let summary = ImportSummary {
            employees: dataset.employees.len(),
            flights: dataset.flights.len(),
            crew: dataset.crew.len(),
            passengers: dataset.passengers.len(),
            tickets: dataset.tickets.len(),
            baggage: dataset.baggage.len(),
        };
        info!(?summary, "Imported dataset");
        Ok(summary)
    }

    /// Row counts and file size.
    ///
    /// # Errors
    ///
    /// Returns an error if a query fails.
    pub fn stats(&self) -> Result<StorageStats> {
        let db_size_bytes = if self.path.to_string_lossy() == ":memory:" {
            0
        } else {
            std::fs::metadata(&self.path).map(|m| m.len()).unwrap_or(0)
        };

        Ok(StorageStats {
            flights: self.count("flights")?,
            employees: self.count("employees")?,
            crew: self.count("crew")?,
            passengers: self.count("passengers")?,
            tickets: self.count("tickets")?,
            baggage: self.count("baggage")?,
            ground_assignments: self.count("ground_assignments")?,
            schema_version: migrations::get_schema_version(&self.conn)?,
            db_size_bytes,
        })
    }

    fn count(&self, table: &'static str) -> Result<i64> {
        let count = self
            .conn
            .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))?;
        Ok(count)
    }

    // === Row mapping ===

    fn row_to_flight(row: &Row) -> rusqlite::Result<Flight> {
        let flight_no: String = row.get(0)?;
        let status: Option<String> = row.get(2)?;
        let arrival_time: Option<String> = row.get(3)?;

        let status = status.and_then(|s| match s.parse::<FlightStatus>() {
            Ok(status) => Some(status),
            Err(e) => {
                warn!(%flight_no, "Ignoring stored flight status: {e}");
                None
            }
        });
        let arrival_time = arrival_time.and_then(|t| {
            let parsed = parse_time_of_day(&t);
            if parsed.is_none() {
                warn!(%flight_no, "Ignoring stored arrival time {t:?}");
            }
            parsed
        });

        Ok(Flight {
            flight_no,
            airline_name: row.get(1)?,
            status,
            arrival_time,
            airport_id: row.get(4)?,
            airline_id: row.get(5)?,
            gate_no: row.get(6)?,
            terminal: row.get(7)?,
            src_city: row.get(8)?,
            des_city: row.get(9)?,
        })
    }

    fn row_to_employee(row: &Row) -> rusqlite::Result<Employee> {
        let hire_date: Option<String> = row.get(5)?;
        Ok(Employee {
            employee_id: row.get(0)?,
            f_name: row.get(1)?,
            m_initial: row.get(2)?,
            l_name: row.get(3)?,
            employee_name: row.get(4)?,
            hire_date: hire_date.as_deref().and_then(parse_date),
            employee_salary: row.get(6)?,
            job_title: row.get(7)?,
            airport_id: row.get(8)?,
        })
    }

    fn row_to_crew(row: &Row) -> rusqlite::Result<CrewMember> {
        let role: String = row.get(1)?;
        Ok(CrewMember {
            crew_id: row.get(0)?,
            crew_role: parse_column(1, &role)?,
            employee_id: row.get(2)?,
            employee_name: row.get(3)?,
            flight_no: row.get(4)?,
            src_city: row.get(5)?,
            des_city: row.get(6)?,
        })
    }

    fn row_to_passenger(row: &Row) -> rusqlite::Result<Passenger> {
        let dob: Option<String> = row.get(5)?;
        let status: String = row.get(8)?;
        Ok(Passenger {
            passenger_id: row.get(0)?,
            f_name: row.get(1)?,
            m_name: row.get(2)?,
            l_name: row.get(3)?,
            passenger_name: row.get(4)?,
            dob: dob.as_deref().and_then(parse_date),
            passenger_address: row.get(6)?,
            flight_no: row.get(7)?,
            status: PassengerStatus::from(status),
        })
    }
}

/// Map constraint violations to [`Error::Conflict`]; anything else stays a
/// query error.
fn constraint(err: rusqlite::Error, message: impl FnOnce() -> String) -> Error {
    if err.sqlite_error_code() == Some(ErrorCode::ConstraintViolation) {
        Error::Conflict(message())
    } else {
        Error::DatabaseQuery(err)
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

fn parse_column<T>(idx: usize, raw: &str) -> rusqlite::Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    raw.parse().map_err(|e: T::Err| conversion_failure(idx, e))
}

fn conversion_failure(idx: usize, err: impl Display) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, err.to_string().into())
}

/// How many records an import wrote, per table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    /// Employees written.
    pub employees: usize,
    /// Flights written.
    pub flights: usize,
    /// Crew records written.
    pub crew: usize,
    /// Passengers written.
    pub passengers: usize,
    /// Tickets written.
    pub tickets: usize,
    /// Bags written.
    pub baggage: usize,
}

/// Statistics about the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StorageStats {
    /// Scheduled flights.
    pub flights: i64,
    /// Employees.
    pub employees: i64,
    /// Crew records.
    pub crew: i64,
    /// Passengers.
    pub passengers: i64,
    /// Tickets.
    pub tickets: i64,
    /// Checked bags.
    pub baggage: i64,
    /// Ground-staff dispatches.
    pub ground_assignments: i64,
    /// Schema version of the database.
    pub schema_version: i32,
    /// Size of the database file in bytes.
    pub db_size_bytes: u64,
}
