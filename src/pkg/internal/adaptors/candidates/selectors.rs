use crate::{
    pkg::internal::{
        adaptors::candidates::spec::{decode, CandidateWithRow, FIRST_DATA_ROW},
        sheets::SheetsClient,
    },
    prelude::Result,
};

pub struct CandidateSelector<'a> {
    sheets: &'a SheetsClient,
}

impl<'a> CandidateSelector<'a> {
    pub fn new(sheets: &'a SheetsClient) -> Self {
        CandidateSelector { sheets }
    }

    /// All candidates in sheet order, each paired with the row it currently
    /// occupies. The header row is skipped; a malformed row degrades to
    /// default fields instead of failing the whole listing.
    pub async fn list(&self) -> Result<Vec<CandidateWithRow>> {
        let rows = self.sheets.get_values(&self.sheets.data_range()).await?;
        Ok(rows
            .into_iter()
            .skip(1)
            .enumerate()
            .map(|(i, cells)| CandidateWithRow {
                record: decode(&cells),
                row_index: i as i64 + FIRST_DATA_ROW,
            })
            .collect())
    }

    pub async fn get_by_row(&self, row_index: i64) -> Result<Option<CandidateWithRow>> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .find(|c| c.row_index == row_index))
    }
}
