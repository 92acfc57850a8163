use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::prelude::{AppError, Result};

/// First data row of the sheet tab; row 1 is the header.
pub const FIRST_DATA_ROW: i64 = 2;

/// Canonical column layout, columns A through M. Older 8/9-column tabs are a
/// one-time migration concern, not a runtime mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    CandidateId,
    Name,
    Email,
    Mobile,
    City,
    Experience,
    Skills,
    ShortNote,
    ResumeLink,
    Status,
    HrNotes,
    CreatedAt,
    Payment,
}

impl Column {
    pub const ALL: [Column; 13] = [
        Column::CandidateId,
        Column::Name,
        Column::Email,
        Column::Mobile,
        Column::City,
        Column::Experience,
        Column::Skills,
        Column::ShortNote,
        Column::ResumeLink,
        Column::Status,
        Column::HrNotes,
        Column::CreatedAt,
        Column::Payment,
    ];

    pub fn letter(&self) -> &'static str {
        match self {
            Column::CandidateId => "A",
            Column::Name => "B",
            Column::Email => "C",
            Column::Mobile => "D",
            Column::City => "E",
            Column::Experience => "F",
            Column::Skills => "G",
            Column::ShortNote => "H",
            Column::ResumeLink => "I",
            Column::Status => "J",
            Column::HrNotes => "K",
            Column::CreatedAt => "L",
            Column::Payment => "M",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Column::CandidateId => "CandidateId",
            Column::Name => "Name",
            Column::Email => "Email",
            Column::Mobile => "Mobile",
            Column::City => "City",
            Column::Experience => "Experience",
            Column::Skills => "Skills",
            Column::ShortNote => "ShortNote",
            Column::ResumeLink => "ResumeLink",
            Column::Status => "Status",
            Column::HrNotes => "HRNotes",
            Column::CreatedAt => "CreatedAt",
            Column::Payment => "Payment",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateStatus {
    New,
    CvShared,
    InterviewScheduled,
    Selected,
    Rejected,
    Old,
}

impl CandidateStatus {
    pub const ALL: [CandidateStatus; 6] = [
        CandidateStatus::New,
        CandidateStatus::CvShared,
        CandidateStatus::InterviewScheduled,
        CandidateStatus::Selected,
        CandidateStatus::Rejected,
        CandidateStatus::Old,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CandidateStatus::New => "New",
            CandidateStatus::CvShared => "CV Shared",
            CandidateStatus::InterviewScheduled => "Interview Scheduled",
            CandidateStatus::Selected => "Selected",
            CandidateStatus::Rejected => "Rejected",
            CandidateStatus::Old => "Old",
        }
    }

    pub fn parse(s: &str) -> Option<CandidateStatus> {
        CandidateStatus::ALL.iter().copied().find(|v| v.as_str() == s)
    }
}

/// One registrant, as stored in the sheet. Status is kept as a raw string so
/// that decode stays total: legacy or hand-edited rows list without failing,
/// while writes go through [`plan_update`] which is strict.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRecord {
    pub candidate_id: String,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub city: String,
    pub experience: String,
    pub skills: String,
    pub short_note: String,
    pub resume_link: String,
    pub status: String,
    pub hr_notes: String,
    pub created_at: String,
    pub payment: String,
}

/// A record plus the 1-based sheet row it currently occupies. The row index
/// shifts when an earlier row is deleted, so it is a short-lived handle
/// re-fetched per listing, never a durable identifier.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateWithRow {
    #[serde(flatten)]
    pub record: CandidateRecord,
    pub row_index: i64,
}

/// Decodes one cell row into a record. Total: never fails, for any input.
/// Cells past the end of a short row decode to empty string, except status
/// which defaults to "New" when absent or empty.
pub fn decode(cells: &[String]) -> CandidateRecord {
    let cell = |i: usize| cells.get(i).cloned().unwrap_or_default();
    let status = cell(9);
    CandidateRecord {
        candidate_id: cell(0),
        name: cell(1),
        email: cell(2),
        mobile: cell(3),
        city: cell(4),
        experience: cell(5),
        skills: cell(6),
        short_note: cell(7),
        resume_link: cell(8),
        status: if status.is_empty() {
            CandidateStatus::New.as_str().to_string()
        } else {
            status
        },
        hr_notes: cell(10),
        created_at: cell(11),
        payment: cell(12),
    }
}

/// Encodes a record as one full row in canonical column order, for append.
/// Assigns a candidate id when the record carries none.
pub fn encode(record: &CandidateRecord) -> Vec<String> {
    let candidate_id = if record.candidate_id.is_empty() {
        next_candidate_id()
    } else {
        record.candidate_id.clone()
    };
    vec![
        candidate_id,
        record.name.clone(),
        record.email.clone(),
        record.mobile.clone(),
        record.city.clone(),
        record.experience.clone(),
        record.skills.clone(),
        record.short_note.clone(),
        record.resume_link.clone(),
        record.status.clone(),
        record.hr_notes.clone(),
        record.created_at.clone(),
        record.payment.clone(),
    ]
}

// Microsecond timestamps are monotone enough for a manual intake form; the
// write rate is a few submissions per minute at most.
fn next_candidate_id() -> String {
    format!("CAND-{}", Utc::now().timestamp_micros())
}

/// Admin-editable fields. Everything else is write-once at creation.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateChanges {
    pub status: Option<String>,
    pub hr_notes: Option<String>,
    pub payment: Option<String>,
}

impl CandidateChanges {
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.hr_notes.is_none() && self.payment.is_none()
    }
}

/// Computes the sparse cell writes for a partial update: exactly one
/// (column, value) pair per field present, never a full-row rewrite.
///
/// Strict at the boundary: rejects row indices before the first data row,
/// empty change sets, and status values outside the fixed enum.
pub fn plan_update(row_index: i64, changes: &CandidateChanges) -> Result<Vec<(Column, String)>> {
    if row_index < FIRST_DATA_ROW {
        return Err(AppError::InvalidArgument(
            "Valid rowIndex is required.".into(),
        ));
    }
    if changes.is_empty() {
        return Err(AppError::InvalidArgument(
            "Provide status, hrNotes and/or payment to update.".into(),
        ));
    }
    let mut writes = Vec::new();
    if let Some(status) = &changes.status {
        let status = CandidateStatus::parse(status).ok_or_else(|| {
            AppError::InvalidArgument(format!("Invalid status value: {status}"))
        })?;
        writes.push((Column::Status, status.as_str().to_string()));
    }
    if let Some(notes) = &changes.hr_notes {
        writes.push((Column::HrNotes, notes.clone()));
    }
    if let Some(payment) = &changes.payment {
        writes.push((Column::Payment, payment.clone()));
    }
    Ok(writes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn full_record() -> CandidateRecord {
        CandidateRecord {
            candidate_id: "CAND-1700000000000000".into(),
            name: "Asha Rao".into(),
            email: "asha@example.com".into(),
            mobile: "9876543210".into(),
            city: "Pune".into(),
            experience: "4 years".into(),
            skills: "rust, sql".into(),
            short_note: "open to relocation".into(),
            resume_link: "https://files.example.com/resumes/1-abc-cv.pdf".into(),
            status: "CV Shared".into(),
            hr_notes: "strong backend profile".into(),
            created_at: "2026-08-01T10:00:00+00:00".into(),
            payment: "advance received".into(),
        }
    }

    #[test]
    fn decode_is_total_over_short_rows() {
        let empty = decode(&[]);
        assert_eq!(empty.candidate_id, "");
        assert_eq!(empty.status, "New");

        let short = decode(&cells(&["CAND-1", "Ravi"]));
        assert_eq!(short.candidate_id, "CAND-1");
        assert_eq!(short.name, "Ravi");
        assert_eq!(short.email, "");
        assert_eq!(short.status, "New");
        assert_eq!(short.payment, "");
    }

    #[test]
    fn decode_defaults_empty_status_to_new() {
        let mut row = encode(&full_record());
        row[9] = String::new();
        assert_eq!(decode(&row).status, "New");
    }

    #[test]
    fn decode_passes_unknown_status_through() {
        let mut row = encode(&full_record());
        row[9] = "Archived".into();
        assert_eq!(decode(&row).status, "Archived");
    }

    #[test]
    fn encode_produces_canonical_column_order() {
        let row = encode(&full_record());
        assert_eq!(row.len(), Column::ALL.len());
        assert_eq!(row[0], "CAND-1700000000000000");
        assert_eq!(row[9], "CV Shared");
        assert_eq!(row[11], "2026-08-01T10:00:00+00:00");
        assert_eq!(row[12], "advance received");
    }

    #[test]
    fn encode_assigns_candidate_id_when_missing() {
        let mut record = full_record();
        record.candidate_id = String::new();
        let row = encode(&record);
        assert!(row[0].starts_with("CAND-"));
        assert!(row[0].len() > "CAND-".len());
    }

    #[test]
    fn round_trip_preserves_every_field() {
        let record = full_record();
        assert_eq!(decode(&encode(&record)), record);
    }

    #[test]
    fn plan_update_rejects_bad_row_index() {
        let changes = CandidateChanges {
            hr_notes: Some("x".into()),
            ..Default::default()
        };
        assert!(plan_update(1, &changes).is_err());
        assert!(plan_update(0, &changes).is_err());
        assert!(plan_update(-3, &changes).is_err());
    }

    #[test]
    fn plan_update_rejects_empty_change_set() {
        assert!(plan_update(5, &CandidateChanges::default()).is_err());
    }

    #[test]
    fn plan_update_rejects_unknown_status() {
        let changes = CandidateChanges {
            status: Some("Bogus".into()),
            ..Default::default()
        };
        assert!(plan_update(3, &changes).is_err());
    }

    #[test]
    fn plan_update_is_sparse() {
        let changes = CandidateChanges {
            hr_notes: Some("ok".into()),
            payment: Some("50% done".into()),
            ..Default::default()
        };
        let writes = plan_update(3, &changes).unwrap();
        assert_eq!(writes.len(), 2);
        assert!(writes.iter().all(|(col, _)| *col != Column::Status));
        assert_eq!(writes[0], (Column::HrNotes, "ok".to_string()));
        assert_eq!(writes[1], (Column::Payment, "50% done".to_string()));
    }

    #[test]
    fn plan_update_addresses_the_canonical_columns() {
        let changes = CandidateChanges {
            status: Some("Old".into()),
            hr_notes: Some("follow up".into()),
            payment: Some("paid".into()),
        };
        let writes = plan_update(4, &changes).unwrap();
        let letters: Vec<&str> = writes.iter().map(|(col, _)| col.letter()).collect();
        assert_eq!(letters, vec!["J", "K", "M"]);
    }

    #[test]
    fn status_parse_accepts_the_fixed_set_only() {
        for status in CandidateStatus::ALL {
            assert_eq!(CandidateStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(CandidateStatus::parse("new"), None);
        assert_eq!(CandidateStatus::parse(""), None);
    }
}
