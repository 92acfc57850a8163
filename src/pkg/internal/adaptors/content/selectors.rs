use crate::{
    pkg::internal::{
        adaptors::content::spec::{
            decode_consultant_content, decode_recommendation, ConsultantContent, Recommendation,
            CONSULTANT_TAB, RECOMMENDATIONS_TAB,
        },
        sheets::SheetsClient,
    },
    prelude::Result,
};

pub struct ContentSelector<'a> {
    sheets: &'a SheetsClient,
}

impl<'a> ContentSelector<'a> {
    pub fn new(sheets: &'a SheetsClient) -> Self {
        ContentSelector { sheets }
    }

    /// Testimonials in sheet order, header skipped, rows without text
    /// dropped.
    pub async fn recommendations(&self) -> Result<Vec<Recommendation>> {
        let rows = self
            .sheets
            .get_values(&format!("{RECOMMENDATIONS_TAB}!A:C"))
            .await?;
        Ok(rows
            .into_iter()
            .skip(1)
            .map(|cells| decode_recommendation(&cells))
            .filter(|rec| !rec.text.is_empty())
            .collect())
    }

    pub async fn consultant_content(&self) -> Result<ConsultantContent> {
        let rows: Vec<Vec<String>> = self
            .sheets
            .get_values(&format!("{CONSULTANT_TAB}!A:B"))
            .await?
            .into_iter()
            .skip(1)
            .collect();
        Ok(decode_consultant_content(&rows))
    }
}
