use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{
    conf::settings,
    pkg::internal::adaptors::candidates::spec::Column,
    prelude::Result,
};

/// One contiguous block of cell values, addressed in A1 notation.
#[derive(Debug, Serialize, Deserialize)]
pub struct ValueRange {
    pub range: String,
    pub values: Vec<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct ValuesResponse {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

/// Thin client for the spreadsheet values API. Holds no candidate logic;
/// encoding, decoding and update planning live in the candidates adaptor.
#[derive(Debug, Clone)]
pub struct SheetsClient {
    http: Client,
}

impl SheetsClient {
    pub fn new() -> Result<Self> {
        Ok(SheetsClient {
            http: Client::builder().build()?,
        })
    }

    /// A1 range covering all 13 candidate columns of the configured tab.
    pub fn data_range(&self) -> String {
        format!("{}!A:M", settings.sheet_tab)
    }

    /// A1 range for a single cell of the configured tab.
    pub fn cell_range(&self, column: Column, row_index: i64) -> String {
        format!("{}!{}{}", settings.sheet_tab, column.letter(), row_index)
    }

    fn values_url(&self, suffix: &str) -> String {
        format!(
            "{}/v4/spreadsheets/{}/values/{}",
            settings.sheet_api_base, settings.sheet_id, suffix
        )
    }

    pub async fn get_values(&self, range: &str) -> Result<Vec<Vec<String>>> {
        let resp: ValuesResponse = self
            .http
            .get(self.values_url(range))
            .bearer_auth(&settings.sheet_api_token)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(resp.values)
    }

    /// Appends one row after the last data row of the range.
    pub async fn append_row(&self, range: &str, row: Vec<String>) -> Result<()> {
        self.http
            .post(format!("{}:append", self.values_url(range)))
            .query(&[
                ("valueInputOption", "USER_ENTERED"),
                ("insertDataOption", "INSERT_ROWS"),
            ])
            .bearer_auth(&settings.sheet_api_token)
            .json(&json!({ "values": [row] }))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// Writes a sparse set of cell ranges in one request. This is the write
    /// path for partial updates; the store charges per cell-range operation,
    /// so callers hand over only the cells that changed.
    pub async fn batch_update_values(&self, data: Vec<ValueRange>) -> Result<()> {
        self.http
            .post(format!(
                "{}/v4/spreadsheets/{}/values:batchUpdate",
                settings.sheet_api_base, settings.sheet_id
            ))
            .bearer_auth(&settings.sheet_api_token)
            .json(&json!({ "valueInputOption": "USER_ENTERED", "data": data }))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// Removes one row. Later rows shift up, so any previously fetched row
    /// index is stale after this call.
    pub async fn delete_row(&self, row_index: i64) -> Result<()> {
        self.http
            .post(format!(
                "{}/v4/spreadsheets/{}:batchUpdate",
                settings.sheet_api_base, settings.sheet_id
            ))
            .bearer_auth(&settings.sheet_api_token)
            .json(&json!({
                "requests": [{
                    "deleteDimension": {
                        "range": {
                            "sheetId": settings.sheet_gid,
                            "dimension": "ROWS",
                            "startIndex": row_index - 1,
                            "endIndex": row_index
                        }
                    }
                }]
            }))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// Writes the header row when the tab is still blank.
    pub async fn ensure_header(&self) -> Result<()> {
        let header_range = format!("{}!A1:M1", settings.sheet_tab);
        let existing = self.get_values(&header_range).await?;
        if !existing.is_empty() {
            tracing::debug!("header row already present, leaving as-is");
            return Ok(());
        }
        let titles: Vec<String> = Column::ALL.iter().map(|c| c.title().to_string()).collect();
        self.http
            .put(self.values_url(&header_range))
            .query(&[("valueInputOption", "RAW")])
            .bearer_auth(&settings.sheet_api_token)
            .json(&json!({ "values": [titles] }))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
