//! Human-readable rendering of teacher records.
//!
//! The printed summary is this tool's only output artifact. Absent numeric
//! fields render as `-`, never as a literal null.

use crate::models::TeacherRecord;

fn score(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.1}"),
        None => "-".to_string(),
    }
}

fn percent(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.0}%"),
        None => "-".to_string(),
    }
}

fn count(value: Option<i64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "-".to_string(),
    }
}

/// Multi-line summary for the top match.
pub fn format_summary(record: &TeacherRecord) -> String {
    let school = record
        .school
        .as_ref()
        .and_then(|s| s.name.as_deref())
        .unwrap_or("-");
    format!(
        "{name}\n\
         School:           {school}\n\
         Rating:           {rating} / 5 (difficulty {difficulty} / 5)\n\
         Ratings:          {ratings}\n\
         Would take again: {again}",
        name = record.display_name(),
        school = school,
        rating = score(record.avg_rating),
        difficulty = score(record.avg_difficulty),
        ratings = count(record.num_ratings),
        again = percent(record.would_take_again_percent),
    )
}

/// One-line rendering for additional matches beyond the first.
pub fn format_compact(record: &TeacherRecord) -> String {
    let school = record
        .school
        .as_ref()
        .and_then(|s| s.name.as_deref())
        .unwrap_or("-");
    format!(
        "{} ({}) rating {}, {} ratings",
        record.display_name(),
        school,
        score(record.avg_rating),
        count(record.num_ratings),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(body: &str) -> TeacherRecord {
        serde_json::from_str(body).expect("test record must deserialize")
    }

    #[test]
    fn test_summary_renders_all_fields() {
        let summary = format_summary(&record(
            r#"{"id":"T1","firstName":"Jane","lastName":"Doe",
               "school":{"name":"Acme U"},
               "avgRating":4.5,"avgDifficulty":2.1,"numRatings":37,
               "wouldTakeAgainPercent":84.0}"#,
        ));
        assert!(summary.contains("Jane Doe"));
        assert!(summary.contains("Acme U"));
        assert!(summary.contains("4.5 / 5"));
        assert!(summary.contains("difficulty 2.1"));
        assert!(summary.contains("37"));
        assert!(summary.contains("84%"));
    }

    #[test]
    fn test_null_would_take_again_renders_placeholder() {
        let summary = format_summary(&record(
            r#"{"id":"T1","firstName":"Jane","lastName":"Doe",
               "avgRating":4.5,"wouldTakeAgainPercent":null}"#,
        ));
        assert!(summary.contains("Would take again: -"));
        assert!(!summary.contains("null"));
    }

    #[test]
    fn test_missing_school_and_counts_render_placeholders() {
        let line = format_compact(&record(r#"{"id":"T2","lastName":"Doe"}"#));
        assert_eq!(line, "Doe (-) rating -, - ratings");
    }
}
