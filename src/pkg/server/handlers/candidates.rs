use axum::{
    Json,
    extract::{Multipart, State},
};
use serde::Deserialize;
use serde_json::{Value, json};
use validator::Validate;

use crate::{
    pkg::{
        internal::{
            adaptors::candidates::{
                mutators::{CandidateMutator, NewCandidate},
                selectors::CandidateSelector,
                spec::{CandidateChanges, FIRST_DATA_ROW},
            },
            blob::resume_mime_type,
        },
        server::state::AppState,
    },
    prelude::{AppError, Result},
};

#[derive(Default, Validate)]
pub struct SubmitInput {
    #[validate(length(min = 1, message = "Full name, email, and mobile are required."))]
    pub full_name: String,
    #[validate(email(message = "A valid email address is required."))]
    pub email: String,
    #[validate(length(min = 1, message = "Full name, email, and mobile are required."))]
    pub mobile: String,
    pub city: String,
    pub experience: String,
    pub skills: String,
    pub short_note: String,
}

/// Public registration endpoint. Multipart form: contact fields plus the
/// resume file. Uploads the resume, then appends the candidate row.
pub async fn submit(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Value>> {
    let mut input = SubmitInput::default();
    let mut resume: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "fullName" => input.full_name = field.text().await?.trim().to_string(),
            "email" => input.email = field.text().await?.trim().to_string(),
            "mobile" => input.mobile = field.text().await?.trim().to_string(),
            "city" => input.city = field.text().await?.trim().to_string(),
            "experience" => input.experience = field.text().await?.trim().to_string(),
            "skills" => input.skills = field.text().await?,
            "shortNote" => input.short_note = field.text().await?,
            "resume" => {
                let filename = field.file_name().unwrap_or("resume").to_string();
                resume = Some((filename, field.bytes().await?.to_vec()));
            }
            other => {
                tracing::debug!("ignoring unknown form field {}", other);
            }
        }
    }
    input
        .validate()
        .map_err(|e| AppError::InvalidArgument(e.to_string()))?;
    let (filename, bytes) = resume.filter(|(_, bytes)| !bytes.is_empty()).ok_or_else(|| {
        AppError::InvalidArgument("Resume file (PDF or DOCX) is required.".into())
    })?;
    let mime_type = resume_mime_type(&filename)
        .ok_or_else(|| AppError::InvalidArgument("Resume must be PDF or DOCX only.".into()))?;

    let resume_link = state.blob.upload_resume(bytes, &filename, mime_type).await?;
    let record = CandidateMutator::new(&state.sheets)
        .create(NewCandidate {
            name: input.full_name,
            email: input.email,
            mobile: input.mobile,
            city: input.city,
            experience: input.experience,
            skills: input.skills,
            short_note: input.short_note,
            resume_link,
        })
        .await?;
    tracing::info!("registered candidate {}", &record.candidate_id);

    Ok(Json(json!({
        "success": true,
        "message": "Registration successful. We will get in touch soon."
    })))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Value>> {
    let candidates = CandidateSelector::new(&state.sheets).list().await?;
    Ok(Json(json!({ "candidates": candidates })))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCandidateInput {
    pub row_index: i64,
    #[serde(flatten)]
    pub changes: CandidateChanges,
}

pub async fn update(
    State(state): State<AppState>,
    Json(input): Json<UpdateCandidateInput>,
) -> Result<Json<Value>> {
    CandidateMutator::new(&state.sheets)
        .update(input.row_index, &input.changes)
        .await?;
    tracing::info!("updated candidate row {}", input.row_index);
    Ok(Json(json!({ "success": true })))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCandidateInput {
    pub row_index: i64,
}

/// Removes a candidate row and, when the resume lives in the app's own
/// store, the resume blob as well. A failed blob delete is logged and the
/// row delete proceeds; the file may already be gone.
pub async fn delete(
    State(state): State<AppState>,
    Json(input): Json<DeleteCandidateInput>,
) -> Result<Json<Value>> {
    if input.row_index < FIRST_DATA_ROW {
        return Err(AppError::InvalidArgument(
            "Valid rowIndex is required.".into(),
        ));
    }
    let candidate = CandidateSelector::new(&state.sheets)
        .get_by_row(input.row_index)
        .await?
        .ok_or_else(|| AppError::NotFound("Candidate not found.".into()))?;

    let resume_link = candidate.record.resume_link.trim();
    if !resume_link.is_empty() && state.blob.owns(resume_link) {
        if let Err(err) = state.blob.delete_resume(resume_link).await {
            tracing::warn!("resume cleanup failed for row {}: {}", input.row_index, err);
        }
    }

    CandidateMutator::new(&state.sheets)
        .delete(input.row_index)
        .await?;
    tracing::info!("deleted candidate row {}", input.row_index);
    Ok(Json(json!({ "success": true })))
}
