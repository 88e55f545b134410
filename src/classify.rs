//! Response classification.
//!
//! Decides, per attempt, whether an HTTP response is usable structured data
//! or an opaque page (typically a bot-mitigation challenge). Retry is not
//! this module's concern; it only classifies.

use crate::config::MAX_BODY_EXCERPT_CHARS;
use crate::error_handling::Diagnostic;
use crate::models::SearchResponse;

/// Outcome of inspecting one raw response.
#[derive(Debug)]
pub(crate) enum Classification {
    /// Well-formed search payload.
    Data(SearchResponse),
    /// Anything else, with enough context to report the failure.
    NonData(Diagnostic),
}

/// Classifies a raw HTTP response.
///
/// A response counts as data only if the declared content type contains a
/// JSON marker and the body deserializes into the expected search envelope.
/// Everything else becomes a diagnostic carrying the status code and a
/// bounded body excerpt.
pub(crate) fn classify(host: &str, status: u16, content_type: &str, body: &str) -> Classification {
    if !content_type.to_ascii_lowercase().contains("json") {
        log::debug!("{host}: non-JSON content type {content_type:?}");
        return Classification::NonData(Diagnostic {
            host: host.to_string(),
            status: Some(status),
            body_excerpt: excerpt(body),
        });
    }

    match serde_json::from_str::<SearchResponse>(body) {
        Ok(parsed) => Classification::Data(parsed),
        Err(e) => {
            log::debug!("{host}: JSON content type but unusable body: {e}");
            Classification::NonData(Diagnostic {
                host: host.to_string(),
                status: Some(status),
                body_excerpt: excerpt(body),
            })
        }
    }
}

/// First [`MAX_BODY_EXCERPT_CHARS`] characters of a body, char-boundary safe.
pub(crate) fn excerpt(body: &str) -> String {
    body.chars().take(MAX_BODY_EXCERPT_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATA_BODY: &str = r#"{"data":{"newSearch":{"teachers":{"edges":[]}}}}"#;

    #[test]
    fn test_json_payload_classifies_as_data() {
        let outcome = classify("https://h1/graphql", 200, "application/json", DATA_BODY);
        assert!(matches!(outcome, Classification::Data(_)));
    }

    #[test]
    fn test_json_content_type_is_matched_as_substring() {
        let outcome = classify(
            "https://h1/graphql",
            200,
            "application/json; charset=utf-8",
            DATA_BODY,
        );
        assert!(matches!(outcome, Classification::Data(_)));
    }

    #[test]
    fn test_html_challenge_page_is_non_data() {
        let outcome = classify(
            "https://h1/graphql",
            403,
            "text/html",
            "<html>Checking your browser</html>",
        );
        match outcome {
            Classification::NonData(diagnostic) => {
                assert_eq!(diagnostic.status, Some(403));
                assert!(diagnostic.body_excerpt.contains("Checking your browser"));
            }
            Classification::Data(_) => panic!("challenge page must not classify as data"),
        }
    }

    #[test]
    fn test_invalid_json_body_is_non_data() {
        let outcome = classify("https://h1/graphql", 200, "application/json", "not json at all");
        assert!(matches!(outcome, Classification::NonData(_)));
    }

    #[test]
    fn test_wrong_shape_json_is_non_data() {
        let outcome = classify(
            "https://h1/graphql",
            200,
            "application/json",
            r#"{"errors":[{"message":"rate limited"}]}"#,
        );
        assert!(matches!(outcome, Classification::NonData(_)));
    }

    #[test]
    fn test_excerpt_is_capped_at_500_chars() {
        let long_body = "x".repeat(5000);
        let outcome = classify("https://h1/graphql", 503, "text/html", &long_body);
        match outcome {
            Classification::NonData(diagnostic) => {
                assert_eq!(diagnostic.body_excerpt.chars().count(), 500);
            }
            Classification::Data(_) => panic!("expected non-data"),
        }
    }

    #[test]
    fn test_excerpt_respects_char_boundaries() {
        // 600 multi-byte characters; naive byte slicing would panic.
        let body = "é".repeat(600);
        assert_eq!(excerpt(&body).chars().count(), 500);
    }
}
