use chrono::Utc;

use crate::{
    pkg::internal::{
        adaptors::candidates::spec::{
            decode, encode, plan_update, CandidateChanges, CandidateRecord, CandidateStatus,
            FIRST_DATA_ROW,
        },
        sanitize::{sanitize, MAX_SHORT_NOTE, MAX_SKILLS},
        sheets::{SheetsClient, ValueRange},
    },
    prelude::{AppError, Result},
};

/// Form-supplied fields for a new registration. Free-text fields arrive raw
/// and are sanitized here, before anything touches the backing store.
pub struct NewCandidate {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub city: String,
    pub experience: String,
    pub skills: String,
    pub short_note: String,
    pub resume_link: String,
}

pub struct CandidateMutator<'a> {
    sheets: &'a SheetsClient,
}

impl<'a> CandidateMutator<'a> {
    pub fn new(sheets: &'a SheetsClient) -> Self {
        CandidateMutator { sheets }
    }

    /// Appends a new candidate row. Status is fixed to New; hrNotes and
    /// payment start empty; resumeLink and createdAt are set here once and
    /// have no update path.
    pub async fn create(&self, input: NewCandidate) -> Result<CandidateRecord> {
        let record = CandidateRecord {
            candidate_id: String::new(),
            name: input.name,
            email: input.email,
            mobile: input.mobile,
            city: input.city,
            experience: input.experience,
            skills: sanitize(&input.skills, MAX_SKILLS),
            short_note: sanitize(&input.short_note, MAX_SHORT_NOTE),
            resume_link: input.resume_link,
            status: CandidateStatus::New.as_str().to_string(),
            hr_notes: String::new(),
            created_at: Utc::now().to_rfc3339(),
            payment: String::new(),
        };
        let cells = encode(&record);
        self.sheets
            .append_row(&self.sheets.data_range(), cells.clone())
            .await?;
        // re-read the encoded row so the assigned candidate id is reflected
        Ok(decode(&cells))
    }

    /// Issues the sparse cell writes computed by the update planner.
    pub async fn update(&self, row_index: i64, changes: &CandidateChanges) -> Result<()> {
        let writes = plan_update(row_index, changes)?;
        let data = writes
            .into_iter()
            .map(|(column, value)| ValueRange {
                range: self.sheets.cell_range(column, row_index),
                values: vec![vec![value]],
            })
            .collect();
        self.sheets.batch_update_values(data).await
    }

    pub async fn delete(&self, row_index: i64) -> Result<()> {
        if row_index < FIRST_DATA_ROW {
            return Err(AppError::InvalidArgument(
                "Valid rowIndex is required.".into(),
            ));
        }
        self.sheets.delete_row(row_index).await
    }
}
