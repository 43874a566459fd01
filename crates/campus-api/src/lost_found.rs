use axum::{Json, extract::State};
use tracing::info;

use campus_db::models::NewLostItem;
use campus_types::api::{LostItemSummary, MessageResponse};

use crate::error::{ApiError, OrInternal};
use crate::form::FormData;
use crate::state::{AppState, blocking, timestamp};
use crate::storage::{UploadDir, file_name_of};

/// Shown for rows saved without a file.
const DEFAULT_IMAGE: &str = "default.jpg";

/// POST /item/lost_item/ — the photo keeps its client file name, so a later
/// upload with the same name replaces it on disk.
pub async fn submit_lost_item(
    State(state): State<AppState>,
    mut form: FormData,
) -> Result<Json<MessageResponse>, ApiError> {
    let item_name = form.text("item_name")?;
    let item_description = form.text("item_description")?;
    let founder_name = form.text("founder_name")?;
    let founder_number = form.text("founder_number")?;
    let founder_class = form.text("founder_class")?;
    let founder_branch = form.text("founder_branch")?;
    let file = form.file("file")?;

    let file_path = state
        .storage
        .save(UploadDir::LostItems, &file.file_name, &file.bytes)
        .await
        .or_internal("Internal server error")?;

    let item = NewLostItem {
        item_name,
        item_description,
        founder_name,
        founder_number,
        founder_class,
        founder_branch,
        file_path: file_path.display().to_string(),
        time: timestamp(),
    };

    let st = state.clone();
    let id = blocking(move || st.db.insert_lost_item(&item))
        .await
        .or_internal("Internal server error")?;

    info!("Lost item {} submitted", id);
    Ok(Json(MessageResponse::new("Lost item submitted successfully!")))
}

/// GET /item/lost_items/ — newest first.
pub async fn list_lost_items(
    State(state): State<AppState>,
) -> Result<Json<Vec<LostItemSummary>>, ApiError> {
    let st = state.clone();
    let rows = blocking(move || st.db.list_lost_items())
        .await
        .or_internal("Failed to fetch items")?;

    let mount = UploadDir::LostItems.name();
    let items = rows
        .into_iter()
        .map(|row| {
            let file_name = row
                .file_path
                .as_deref()
                .and_then(file_name_of)
                .unwrap_or(DEFAULT_IMAGE);
            LostItemSummary {
                img: state.public_file_url(mount, file_name),
                name: row.item_name,
                desc: row.item_description,
            }
        })
        .collect();

    Ok(Json(items))
}
