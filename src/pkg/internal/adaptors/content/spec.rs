use serde::Serialize;

/// Sheet tabs feeding the public candidate page, alongside the main
/// candidates tab.
pub const RECOMMENDATIONS_TAB: &str = "Recommendations";
pub const CONSULTANT_TAB: &str = "ConsultantInfo";

/// One testimonial row from the recommendations tab (Author, Text, Date).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Recommendation {
    pub author: String,
    pub text: String,
    pub date: String,
}

/// Total, like the candidate decode: short rows fill with empty strings.
pub fn decode_recommendation(cells: &[String]) -> Recommendation {
    let cell = |i: usize| cells.get(i).map(|s| s.trim().to_string()).unwrap_or_default();
    Recommendation {
        author: cell(0),
        text: cell(1),
        date: cell(2),
    }
}

/// Consultant section content, keyed rows (Key, Value) on its own tab.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConsultantContent {
    pub title: String,
    pub description: String,
    pub charges: String,
    pub notes: String,
    pub disclaimer: String,
}

/// Folds key/value rows into the fixed content fields. Keys match
/// case-insensitively, unknown keys are ignored, a repeated key wins with
/// its last value. Total over any row shape.
pub fn decode_consultant_content(rows: &[Vec<String>]) -> ConsultantContent {
    let mut content = ConsultantContent::default();
    for row in rows {
        let key = row.first().map(|k| k.trim().to_lowercase()).unwrap_or_default();
        let value = row.get(1).map(|v| v.trim().to_string()).unwrap_or_default();
        match key.as_str() {
            "title" => content.title = value,
            "description" => content.description = value,
            "charges" => content.charges = value,
            "notes" => content.notes = value,
            "disclaimer" => content.disclaimer = value,
            _ => {}
        }
    }
    content
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn recommendation_decode_is_total_and_trims() {
        let empty = decode_recommendation(&[]);
        assert_eq!(empty, Recommendation::default());

        let rec = decode_recommendation(&cells(&[" Priya N ", " great mentor "]));
        assert_eq!(rec.author, "Priya N");
        assert_eq!(rec.text, "great mentor");
        assert_eq!(rec.date, "");
    }

    #[test]
    fn consultant_content_maps_known_keys() {
        let rows = vec![
            cells(&["Title", "Career guidance"]),
            cells(&["description", "One-on-one sessions"]),
            cells(&["CHARGES", "free for students"]),
            cells(&["notes", "weekends only"]),
            cells(&["disclaimer", "no placement guarantee"]),
        ];
        let content = decode_consultant_content(&rows);
        assert_eq!(content.title, "Career guidance");
        assert_eq!(content.description, "One-on-one sessions");
        assert_eq!(content.charges, "free for students");
        assert_eq!(content.notes, "weekends only");
        assert_eq!(content.disclaimer, "no placement guarantee");
    }

    #[test]
    fn consultant_content_ignores_unknown_keys_and_keeps_last_value() {
        let rows = vec![
            cells(&["title", "first"]),
            cells(&["banner", "ignored"]),
            cells(&["title", "second"]),
            cells(&[]),
            cells(&["notes"]),
        ];
        let content = decode_consultant_content(&rows);
        assert_eq!(content.title, "second");
        assert_eq!(content.notes, "");
        assert_eq!(content.description, "");
    }
}
