use axum::{Json, extract::State};
use tracing::{info, warn};

use campus_db::models::{AccountKind, NewStaff, NewStudent};
use campus_types::api::MessageResponse;

use crate::error::{ApiError, OrInternal};
use crate::form::FormData;
use crate::state::{AppState, blocking, timestamp};
use crate::storage::UploadDir;

/// Same text for unknown email and wrong password.
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

const REGISTRATION_FAILED: &str = "Registration failed";
const LOGIN_FAILED: &str = "Login failed";

/// POST /student/register/ — photo is stored as `student_{email}_{filename}`.
pub async fn register_student(
    State(state): State<AppState>,
    mut form: FormData,
) -> Result<Json<MessageResponse>, ApiError> {
    let name = form.text("name")?;
    let email = form.text("email")?;
    let phone = form.text("phone")?;
    let branch = form.text("branch")?;
    let year = form.text("year")?;
    let password = form.text("password")?;
    let photo = form.file("photo")?;

    let photo_path = state
        .storage
        .save(
            UploadDir::StudentPhotos,
            &format!("student_{}_{}", email, photo.file_name),
            &photo.bytes,
        )
        .await
        .or_internal(REGISTRATION_FAILED)?;

    let st = state.clone();
    let id = blocking(move || {
        let password_hash = st.account_hasher.hash(&password)?;
        st.db.insert_student(&NewStudent {
            name,
            email,
            phone,
            branch,
            year,
            password_hash,
            photo_path: photo_path.display().to_string(),
            time: timestamp(),
        })
    })
    .await
    .or_internal(REGISTRATION_FAILED)?;

    info!("Student registered (row {})", id);
    Ok(Json(MessageResponse::new("Student registered successfully!")))
}

/// POST /staff/register/ — photo is stored as `staff_{email}_{filename}`.
pub async fn register_staff(
    State(state): State<AppState>,
    mut form: FormData,
) -> Result<Json<MessageResponse>, ApiError> {
    let name = form.text("name")?;
    let email = form.text("email")?;
    let phone = form.text("phone")?;
    let department = form.text("department")?;
    let designation = form.text("designation")?;
    let password = form.text("password")?;
    let photo = form.file("photo")?;

    let photo_path = state
        .storage
        .save(
            UploadDir::StaffPhotos,
            &format!("staff_{}_{}", email, photo.file_name),
            &photo.bytes,
        )
        .await
        .or_internal(REGISTRATION_FAILED)?;

    let st = state.clone();
    let id = blocking(move || {
        let password_hash = st.account_hasher.hash(&password)?;
        st.db.insert_staff(&NewStaff {
            name,
            email,
            phone,
            department,
            designation,
            password_hash,
            photo_path: photo_path.display().to_string(),
            time: timestamp(),
        })
    })
    .await
    .or_internal(REGISTRATION_FAILED)?;

    info!("Staff registered (row {})", id);
    Ok(Json(MessageResponse::new("Staff registered successfully!")))
}

pub async fn login_student(
    State(state): State<AppState>,
    form: FormData,
) -> Result<Json<MessageResponse>, ApiError> {
    login(state, AccountKind::Student, form).await
}

pub async fn login_staff(
    State(state): State<AppState>,
    form: FormData,
) -> Result<Json<MessageResponse>, ApiError> {
    login(state, AccountKind::Staff, form).await
}

async fn login(
    state: AppState,
    kind: AccountKind,
    form: FormData,
) -> Result<Json<MessageResponse>, ApiError> {
    let email = form.text("email")?;
    let password = form.text("password")?;

    let st = state.clone();
    let greeted = blocking(move || {
        let Some(account) = st.db.get_credentials(kind, &email)? else {
            return Ok(None);
        };
        let verified = st.account_hasher.verify(&password, &account.password_hash)?;
        Ok(verified.then_some(account.name))
    })
    .await
    .or_internal(LOGIN_FAILED)?;

    match greeted {
        Some(name) => {
            info!("{:?} login succeeded", kind);
            Ok(Json(MessageResponse::new(format!("Welcome back, {}!", name))))
        }
        None => {
            warn!("Rejected {:?} login", kind);
            Err(ApiError::Unauthorized(INVALID_CREDENTIALS))
        }
    }
}
