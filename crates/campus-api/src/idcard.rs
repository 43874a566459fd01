use axum::{Json, extract::State};
use tracing::{info, warn};

use campus_db::models::NewIdCard;
use campus_types::api::{IdCardProfile, IdCardUploadResponse};

use crate::error::{ApiError, OrInternal};
use crate::form::FormData;
use crate::qr;
use crate::state::{AppState, blocking, timestamp};
use crate::storage::UploadDir;

const UPLOAD_FAILED: &str = "Internal server error";
const VIEW_FAILED: &str = "Database error";
pub const INVALID_CARD_CREDENTIALS: &str = "Invalid roll number or password";

/// POST /idcard/upload/
///
/// Stores the card image as `{roll}_{filename}`, writes `{roll}_qr.png`
/// pointing at the view URL, and keeps the fast digest of the password.
pub async fn upload_id_card(
    State(state): State<AppState>,
    mut form: FormData,
) -> Result<Json<IdCardUploadResponse>, ApiError> {
    let name = form.text("name")?;
    let roll_number = form.text("roll_number")?;
    let branch = form.text("branch")?;
    let year = form.text("year")?;
    let college_name = form.text("college_name")?;
    let college_contact = form.text("college_contact")?;
    let password = form.text("password")?;
    let card = form.file("file")?;

    let image_path = state
        .storage
        .save(
            UploadDir::IdCards,
            &format!("{}_{}", roll_number, card.file_name),
            &card.bytes,
        )
        .await
        .or_internal(UPLOAD_FAILED)?;

    let qr_link = qr::view_link(&state.public_url, &roll_number);
    let qr_file_name = format!("{}_qr.png", roll_number);
    let link = qr_link.clone();
    let png = blocking(move || qr::render_png(&link))
        .await
        .or_internal(UPLOAD_FAILED)?;
    let qr_path = state
        .storage
        .save(UploadDir::QrCodes, &qr_file_name, &png)
        .await
        .or_internal(UPLOAD_FAILED)?;

    let st = state.clone();
    let row_roll = roll_number.clone();
    blocking(move || {
        // Digest of the raw password; the view side trims before hashing.
        let password_digest = st.card_hasher.hash(&password)?;
        st.db.insert_id_card(&NewIdCard {
            name,
            roll_number: row_roll,
            branch,
            year,
            college_name,
            college_contact,
            id_image_path: image_path.display().to_string(),
            qr_path: qr_path.display().to_string(),
            password_digest,
            time: timestamp(),
        })
    })
    .await
    .or_internal(UPLOAD_FAILED)?;

    info!("ID card uploaded for {}", roll_number);
    Ok(Json(IdCardUploadResponse {
        message: "ID card uploaded successfully!".into(),
        qr_link,
        qr_image: state.public_file_url(UploadDir::QrCodes.name(), &qr_file_name),
    }))
}

/// POST /idcard/view_secure/ — one query on (roll number, digest).
pub async fn view_id_card_secure(
    State(state): State<AppState>,
    form: FormData,
) -> Result<Json<IdCardProfile>, ApiError> {
    let roll_number = form.text("roll_number")?;
    let password = form.text("password")?;

    let st = state.clone();
    let lookup_roll = roll_number.clone();
    let card = blocking(move || {
        let digest = st.card_hasher.hash(password.trim())?;
        st.db.find_id_card(&lookup_roll, &digest)
    })
    .await
    .or_internal(VIEW_FAILED)?;

    let Some(card) = card else {
        warn!("Rejected ID card view for {}", roll_number);
        return Err(ApiError::Unauthorized(INVALID_CARD_CREDENTIALS));
    };

    Ok(Json(IdCardProfile {
        name: card.name,
        roll_number: card.roll_number,
        branch: card.branch,
        year: card.year,
        college_name: card.college_name,
        college_contact: card.college_contact,
    }))
}
