use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use tracing::info;

use campus_db::models::{NewJuniorRequest, NewSenior};
use campus_types::api::{MessageResponse, SeniorMatch};

use crate::error::{ApiError, OrInternal};
use crate::form::FormData;
use crate::state::{AppState, blocking};

#[derive(Debug, Deserialize)]
pub struct MatchQuery {
    pub skill: Option<String>,
}

pub async fn register_senior(
    State(state): State<AppState>,
    form: FormData,
) -> Result<Json<MessageResponse>, ApiError> {
    let senior = NewSenior {
        name: form.text("name")?,
        branch: form.text("branch")?,
        year: form.text("year")?,
        skills: form.text("skills")?,
        availability: form.text("availability")?,
        contact: form.text("contact")?,
    };

    let st = state.clone();
    let id = blocking(move || st.db.insert_senior(&senior))
        .await
        .or_internal("Registration failed")?;

    info!("Senior profile {} registered", id);
    Ok(Json(MessageResponse::new("Senior registered successfully!")))
}

pub async fn request_junior(
    State(state): State<AppState>,
    form: FormData,
) -> Result<Json<MessageResponse>, ApiError> {
    let request = NewJuniorRequest {
        name: form.text("name")?,
        branch: form.text("branch")?,
        year: form.text("year")?,
        query: form.text("query")?,
        skill_needed: form.text("skill_needed")?,
    };

    let st = state.clone();
    let id = blocking(move || st.db.insert_junior_request(&request))
        .await
        .or_internal("Request failed")?;

    info!("Junior request {} submitted", id);
    Ok(Json(MessageResponse::new("Junior request submitted successfully!")))
}

/// GET /connect/match/?skill= — every senior whose skills contain `skill`.
/// An empty skill matches everyone.
pub async fn match_seniors(
    State(state): State<AppState>,
    Query(query): Query<MatchQuery>,
) -> Result<Json<Vec<SeniorMatch>>, ApiError> {
    let skill = query.skill.ok_or(ApiError::MissingField("skill"))?;

    let st = state.clone();
    let rows = blocking(move || st.db.match_seniors(&skill))
        .await
        .or_internal("Matching failed")?;

    Ok(Json(
        rows.into_iter()
            .map(|row| SeniorMatch {
                name: row.name,
                contact: row.contact,
                availability: row.availability,
            })
            .collect(),
    ))
}
