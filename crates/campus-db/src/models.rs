//! Database row types — these map directly to SQLite rows.
//! Distinct from campus-types API payloads to keep the DB layer independent.

/// Which account table a credential lookup targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    Student,
    Staff,
}

impl AccountKind {
    pub(crate) fn table(self) -> &'static str {
        match self {
            AccountKind::Student => "student_register",
            AccountKind::Staff => "staff_register",
        }
    }
}

pub struct NewLostItem {
    pub item_name: String,
    pub item_description: String,
    pub founder_name: String,
    pub founder_number: String,
    pub founder_class: String,
    pub founder_branch: String,
    pub file_path: String,
    pub time: String,
}

pub struct LostItemRow {
    pub item_name: String,
    pub item_description: String,
    pub file_path: Option<String>,
}

pub struct NewIdCard {
    pub name: String,
    pub roll_number: String,
    pub branch: String,
    pub year: String,
    pub college_name: String,
    pub college_contact: String,
    pub id_image_path: String,
    pub qr_path: String,
    pub password_digest: String,
    pub time: String,
}

/// Profile columns of `student_id`; the digest and file paths stay in the table.
pub struct IdCardRow {
    pub name: String,
    pub roll_number: String,
    pub branch: String,
    pub year: String,
    pub college_name: String,
    pub college_contact: String,
}

pub struct NewStudent {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub branch: String,
    pub year: String,
    pub password_hash: String,
    pub photo_path: String,
    pub time: String,
}

pub struct NewStaff {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub designation: String,
    pub password_hash: String,
    pub photo_path: String,
    pub time: String,
}

pub struct CredentialRow {
    pub name: String,
    pub password_hash: String,
}

pub struct NewSenior {
    pub name: String,
    pub branch: String,
    pub year: String,
    pub skills: String,
    pub availability: String,
    pub contact: String,
}

pub struct NewJuniorRequest {
    pub name: String,
    pub branch: String,
    pub year: String,
    pub query: String,
    pub skill_needed: String,
}

pub struct SeniorMatchRow {
    pub name: String,
    pub contact: String,
    pub availability: String,
}
