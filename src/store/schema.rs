//! DDL for the fleet database.
//!
//! Column order matches the tables written by earlier desktop releases.
//! Files from the minimal desktop release lack `call_schedules.job_type`;
//! the store adds that column on open and leaves every row in place.
//! Foreign keys are declared for documentation only. The bundled `SQLite`
//! enforces them by default, so the store switches the pragma off on every
//! connection it opens.

/// Per-connection settings applied before any other statement.
pub(crate) const CONNECTION_PRAGMAS: &str = "PRAGMA foreign_keys = OFF;";

/// Vehicles, maintenance and call schedule tables.
pub(crate) const FLEET_TABLES: &str = "
CREATE TABLE IF NOT EXISTS vehicles (
    vehicle_id TEXT PRIMARY KEY NOT NULL,
    make TEXT NOT NULL,
    model TEXT NOT NULL,
    year INTEGER NOT NULL,
    status TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS maintenance (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    vehicle_id TEXT NOT NULL,
    date TEXT NOT NULL,
    description TEXT NOT NULL,
    completed INTEGER NOT NULL DEFAULT 0,
    FOREIGN KEY(vehicle_id) REFERENCES vehicles(vehicle_id)
);
CREATE TABLE IF NOT EXISTS call_schedules (
    call_id TEXT PRIMARY KEY NOT NULL,
    customer_name TEXT NOT NULL,
    date TEXT NOT NULL,
    time TEXT NOT NULL,
    job_type TEXT,
    vehicle_id TEXT,
    FOREIGN KEY(vehicle_id) REFERENCES vehicles(vehicle_id)
);
";

/// Adds the job type column to call schedule tables that predate it.
pub(crate) const ADD_CALL_JOB_TYPE: &str = "ALTER TABLE call_schedules ADD COLUMN job_type TEXT;";

/// Counts the columns of a table with a given name.
pub(crate) const COUNT_COLUMN: &str =
    "SELECT COUNT(*) AS total FROM pragma_table_info(?) WHERE name = ?";

/// Service-kit stock table, created only when inventory is persistent.
pub(crate) const INVENTORY_TABLE: &str = "
CREATE TABLE IF NOT EXISTS inventory (
    item TEXT PRIMARY KEY NOT NULL,
    quantity INTEGER NOT NULL CHECK (quantity >= 0)
);
";
