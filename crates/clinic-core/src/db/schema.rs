//! SQLite schema definition.

/// Complete database schema for the clinic store.
///
/// `AUTOINCREMENT` keeps ids monotonic and never reused. Visit references
/// are plain integer columns: they are validated in the service layer at
/// creation time, and a patient reference may dangle afterwards because
/// patient deletion does not cascade.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS doctors (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    surname TEXT NOT NULL,
    specialization TEXT NOT NULL,
    version INTEGER NOT NULL DEFAULT 0
);

CREATE TABLE IF NOT EXISTS patients (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    surname TEXT NOT NULL,
    address TEXT NOT NULL,
    version INTEGER NOT NULL DEFAULT 0
);

CREATE TABLE IF NOT EXISTS visits (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    date_time TEXT NOT NULL,
    location TEXT NOT NULL,
    doctor_id INTEGER NOT NULL,
    patient_id INTEGER NOT NULL,
    version INTEGER NOT NULL DEFAULT 0
);

CREATE INDEX IF NOT EXISTS idx_visits_doctor ON visits(doctor_id);
CREATE INDEX IF NOT EXISTS idx_visits_patient ON visits(patient_id);
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_schema_valid() {
        let conn = Connection::open_in_memory().unwrap();
        let result = conn.execute_batch(SCHEMA);
        assert!(result.is_ok(), "Schema should be valid SQL: {:?}", result);
    }

    #[test]
    fn test_version_defaults_to_zero() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(SCHEMA).unwrap();

        conn.execute(
            "INSERT INTO doctors (name, surname, specialization) VALUES (?, ?, ?)",
            ["Jim", "Bim", "surgeon"],
        )
        .unwrap();

        let version: i64 = conn
            .query_row("SELECT version FROM doctors WHERE name = 'Jim'", [], |row| {
                row.get(0)
            })
            .unwrap();
        assert_eq!(version, 0);
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(SCHEMA).unwrap();

        conn.execute(
            "INSERT INTO patients (name, surname, address) VALUES ('a', 'b', 'c')",
            [],
        )
        .unwrap();
        let first = conn.last_insert_rowid();
        conn.execute("DELETE FROM patients WHERE id = ?", [first])
            .unwrap();

        conn.execute(
            "INSERT INTO patients (name, surname, address) VALUES ('d', 'e', 'f')",
            [],
        )
        .unwrap();
        let second = conn.last_insert_rowid();

        assert!(second > first);
    }
}
