use anyhow::Result;
use rusqlite::Connection;
use tracing::info;

/// Create every table if missing. Column names match the existing campus
/// database so an old file can be opened in place.
///
/// No UNIQUE constraints: duplicate emails and roll numbers are accepted.
pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS lost_item (
            id                  INTEGER PRIMARY KEY AUTOINCREMENT,
            item_name           TEXT NOT NULL,
            item_description    TEXT NOT NULL,
            founder_name        TEXT NOT NULL,
            founder_number      TEXT NOT NULL,
            founder_class       TEXT NOT NULL,
            founder_branch      TEXT NOT NULL,
            file_path           TEXT,
            time                TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS student_id (
            id                  INTEGER PRIMARY KEY AUTOINCREMENT,
            name                TEXT NOT NULL,
            roll_number         TEXT NOT NULL,
            branch              TEXT NOT NULL,
            year                TEXT NOT NULL,
            college_name        TEXT NOT NULL,
            college_contact     TEXT NOT NULL,
            id_image_path       TEXT NOT NULL,
            qr_path             TEXT NOT NULL,
            password            TEXT NOT NULL,
            time                TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_student_id_roll
            ON student_id(roll_number);

        CREATE TABLE IF NOT EXISTS student_register (
            id                  INTEGER PRIMARY KEY AUTOINCREMENT,
            name                TEXT NOT NULL,
            email               TEXT NOT NULL,
            phone               TEXT NOT NULL,
            branch              TEXT NOT NULL,
            year                TEXT NOT NULL,
            password_hash       TEXT NOT NULL,
            photo_path          TEXT NOT NULL,
            time                TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_student_register_email
            ON student_register(email);

        CREATE TABLE IF NOT EXISTS staff_register (
            id                  INTEGER PRIMARY KEY AUTOINCREMENT,
            name                TEXT NOT NULL,
            email               TEXT NOT NULL,
            phone               TEXT NOT NULL,
            department          TEXT NOT NULL,
            designation         TEXT NOT NULL,
            password_hash       TEXT NOT NULL,
            photo_path          TEXT NOT NULL,
            time                TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_staff_register_email
            ON staff_register(email);

        CREATE TABLE IF NOT EXISTS senior_connect (
            id                  INTEGER PRIMARY KEY AUTOINCREMENT,
            name                TEXT NOT NULL,
            branch              TEXT NOT NULL,
            year                TEXT NOT NULL,
            skills              TEXT NOT NULL,
            availability        TEXT NOT NULL,
            contact             TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS junior_request (
            id                  INTEGER PRIMARY KEY AUTOINCREMENT,
            name                TEXT NOT NULL,
            branch              TEXT NOT NULL,
            year                TEXT NOT NULL,
            query               TEXT NOT NULL,
            skill_needed        TEXT NOT NULL
        );
        ",
    )?;

    info!("Database migrations complete");
    Ok(())
}
