use crate::Database;
use crate::models::{
    AccountKind, CredentialRow, IdCardRow, LostItemRow, NewIdCard, NewJuniorRequest, NewLostItem,
    NewSenior, NewStaff, NewStudent, SeniorMatchRow,
};
use anyhow::Result;
use rusqlite::{Connection, params};

impl Database {
    // -- Lost & found --

    pub fn insert_lost_item(&self, item: &NewLostItem) -> Result<i64> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO lost_item (item_name, item_description, founder_name, founder_number, founder_class, founder_branch, file_path, time)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    item.item_name,
                    item.item_description,
                    item.founder_name,
                    item.founder_number,
                    item.founder_class,
                    item.founder_branch,
                    item.file_path,
                    item.time,
                ],
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    /// Newest first. Ordered by row id because `time` is a day-first string
    /// and does not sort chronologically.
    pub fn list_lost_items(&self) -> Result<Vec<LostItemRow>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT item_name, item_description, file_path FROM lost_item ORDER BY id DESC",
            )?;

            let rows = stmt
                .query_map([], |row| {
                    Ok(LostItemRow {
                        item_name: row.get(0)?,
                        item_description: row.get(1)?,
                        file_path: row.get(2)?,
                    })
                })?
                .collect::<std::result::Result<Vec<_>, _>>()?;

            Ok(rows)
        })
    }

    // -- ID cards --

    pub fn insert_id_card(&self, card: &NewIdCard) -> Result<i64> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO student_id (name, roll_number, branch, year, college_name, college_contact, id_image_path, qr_path, password, time)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
                params![
                    card.name,
                    card.roll_number,
                    card.branch,
                    card.year,
                    card.college_name,
                    card.college_contact,
                    card.id_image_path,
                    card.qr_path,
                    card.password_digest,
                    card.time,
                ],
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    /// Single lookup on the (roll number, digest) pair. A wrong password and
    /// an unknown roll number are the same miss.
    pub fn find_id_card(&self, roll_number: &str, password_digest: &str) -> Result<Option<IdCardRow>> {
        self.with_conn(|conn| query_id_card(conn, roll_number, password_digest))
    }

    // -- Accounts --

    pub fn insert_student(&self, student: &NewStudent) -> Result<i64> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO student_register (name, email, phone, branch, year, password_hash, photo_path, time)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    student.name,
                    student.email,
                    student.phone,
                    student.branch,
                    student.year,
                    student.password_hash,
                    student.photo_path,
                    student.time,
                ],
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    pub fn insert_staff(&self, staff: &NewStaff) -> Result<i64> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO staff_register (name, email, phone, department, designation, password_hash, photo_path, time)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    staff.name,
                    staff.email,
                    staff.phone,
                    staff.department,
                    staff.designation,
                    staff.password_hash,
                    staff.photo_path,
                    staff.time,
                ],
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    /// Earliest registration for the email wins when duplicates exist.
    pub fn get_credentials(&self, kind: AccountKind, email: &str) -> Result<Option<CredentialRow>> {
        self.with_conn(|conn| query_credentials(conn, kind, email))
    }

    // -- Senior/junior connect --

    pub fn insert_senior(&self, senior: &NewSenior) -> Result<i64> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO senior_connect (name, branch, year, skills, availability, contact)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    senior.name,
                    senior.branch,
                    senior.year,
                    senior.skills,
                    senior.availability,
                    senior.contact,
                ],
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    pub fn insert_junior_request(&self, request: &NewJuniorRequest) -> Result<i64> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO junior_request (name, branch, year, query, skill_needed)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    request.name,
                    request.branch,
                    request.year,
                    request.query,
                    request.skill_needed,
                ],
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    /// Seniors whose skills contain `skill` as a literal substring.
    /// Case follows SQLite `LIKE` (ASCII case-insensitive). No ordering.
    pub fn match_seniors(&self, skill: &str) -> Result<Vec<SeniorMatchRow>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT name, contact, availability FROM senior_connect
                 WHERE skills LIKE ?1 ESCAPE '\\'",
            )?;

            let rows = stmt
                .query_map([substring_pattern(skill)], |row| {
                    Ok(SeniorMatchRow {
                        name: row.get(0)?,
                        contact: row.get(1)?,
                        availability: row.get(2)?,
                    })
                })?
                .collect::<std::result::Result<Vec<_>, _>>()?;

            Ok(rows)
        })
    }
}

fn query_id_card(conn: &Connection, roll_number: &str, password_digest: &str) -> Result<Option<IdCardRow>> {
    let mut stmt = conn.prepare(
        "SELECT name, roll_number, branch, year, college_name, college_contact
         FROM student_id
         WHERE roll_number = ?1 AND password = ?2
         ORDER BY id
         LIMIT 1",
    )?;

    let row = stmt
        .query_row([roll_number, password_digest], |row| {
            Ok(IdCardRow {
                name: row.get(0)?,
                roll_number: row.get(1)?,
                branch: row.get(2)?,
                year: row.get(3)?,
                college_name: row.get(4)?,
                college_contact: row.get(5)?,
            })
        })
        .optional()?;

    Ok(row)
}

fn query_credentials(conn: &Connection, kind: AccountKind, email: &str) -> Result<Option<CredentialRow>> {
    let sql = format!(
        "SELECT name, password_hash FROM {} WHERE email = ?1 ORDER BY id LIMIT 1",
        kind.table()
    );
    let mut stmt = conn.prepare(&sql)?;

    let row = stmt
        .query_row([email], |row| {
            Ok(CredentialRow {
                name: row.get(0)?,
                password_hash: row.get(1)?,
            })
        })
        .optional()?;

    Ok(row)
}

/// `%needle%` with LIKE metacharacters escaped by backslash.
fn substring_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Extension trait for optional query results
trait OptionalExt<T> {
    fn optional(self) -> Result<Option<T>>;
}

impl<T> OptionalExt<T> for std::result::Result<T, rusqlite::Error> {
    fn optional(self) -> Result<Option<T>> {
        match self {
            Ok(val) => Ok(Some(val)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
