//! Query dispatch with bounded retry across hosts.
//!
//! The dispatcher owns the entire failure-handling design of the lookup:
//! it warms the session once, then walks an explicit attempt plan (hosts in
//! order, a fixed number of attempts each), classifying every response and
//! returning on the first usable payload. Transport and parse errors never
//! escape this module raw; they fold into per-attempt diagnostics, and only
//! full exhaustion surfaces as an error.

use reqwest::Client;

use crate::classify::{classify, excerpt, Classification};
use crate::config::{Endpoints, ATTEMPTS_PER_HOST, RETRY_DELAY, TEACHER_SEARCH_QUERY};
use crate::error_handling::{Diagnostic, LookupError};
use crate::models::{SearchRequest, TeacherRecord};
use crate::session::{warm_session, QueryHeaders};

/// One planned network attempt. Transient; generated by [`attempt_plan`] and
/// not retained after the loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HostAttempt {
    pub host: String,
    pub attempt: usize,
}

/// Expands the ordered host list into the full attempt sequence.
///
/// Hosts are exhausted one at a time: every attempt against the first host
/// precedes the first attempt against the second. The sequence length is the
/// hard upper bound on network round-trips per invocation.
pub(crate) fn attempt_plan(hosts: &[String]) -> Vec<HostAttempt> {
    hosts
        .iter()
        .flat_map(|host| {
            (1..=ATTEMPTS_PER_HOST).map(move |attempt| HostAttempt {
                host: host.clone(),
                attempt,
            })
        })
        .collect()
}

fn build_payload(request: &SearchRequest) -> serde_json::Value {
    serde_json::json!({
        "query": TEACHER_SEARCH_QUERY,
        "variables": {
            "query": request.query,
            "schoolID": request.school_relay_id,
        },
    })
}

/// Sends one query and classifies the outcome. Transport failures become
/// non-data diagnostics with no status code.
async fn send_query(client: &Client, host: &str, payload: &serde_json::Value) -> Classification {
    let exchange = async {
        let response = QueryHeaders::apply(client.post(host))
            .json(payload)
            .send()
            .await?;
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let body = response.text().await?;
        Ok::<_, reqwest::Error>((status, content_type, body))
    }
    .await;

    match exchange {
        Ok((status, content_type, body)) => classify(host, status, &content_type, &body),
        Err(e) => Classification::NonData(Diagnostic {
            host: host.to_string(),
            status: None,
            body_excerpt: excerpt(&e.to_string()),
        }),
    }
}

/// Runs one search: warm the session, then try each endpoint until one
/// answers with well-formed data.
///
/// Returns the server-ordered result list on the first usable response (an
/// empty list is a valid outcome, not an error); all remaining attempts are
/// skipped at that point. When every attempt fails, returns
/// [`LookupError::Exhausted`] carrying the diagnostic of the final attempt
/// only.
///
/// Strictly sequential: one request in flight at a time, with a fixed delay
/// between attempts. At most `hosts x ATTEMPTS_PER_HOST` round-trips are
/// made, plus the single warming request.
pub async fn run_search(
    client: &Client,
    endpoints: &Endpoints,
    request: &SearchRequest,
) -> Result<Vec<TeacherRecord>, LookupError> {
    let payload = build_payload(request);

    warm_session(client, &endpoints.homepage).await;

    let plan = attempt_plan(&endpoints.graphql_hosts);
    let total_attempts = plan.len();
    let mut last_diagnostic: Option<Diagnostic> = None;

    for (index, step) in plan.into_iter().enumerate() {
        log::debug!(
            "querying {} (attempt {}/{})",
            step.host,
            step.attempt,
            ATTEMPTS_PER_HOST
        );

        match send_query(client, &step.host, &payload).await {
            Classification::Data(parsed) => {
                let records = parsed.into_records();
                log::info!("{} received {} result(s)", step.host, records.len());
                return Ok(records);
            }
            Classification::NonData(diagnostic) => {
                log::warn!(
                    "unusable response from {} (attempt {}, status {})",
                    step.host,
                    step.attempt,
                    diagnostic.status_label()
                );
                last_diagnostic = Some(diagnostic);
            }
        }

        // Pace the next attempt; nothing to pace after the last one.
        if index + 1 < total_attempts {
            tokio::time::sleep(RETRY_DELAY).await;
        }
    }

    let diagnostic = last_diagnostic.unwrap_or_else(|| Diagnostic {
        host: "(no endpoints configured)".to_string(),
        status: None,
        body_excerpt: String::new(),
    });
    Err(LookupError::Exhausted { diagnostic })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hosts(names: &[&str]) -> Vec<String> {
        names.iter().map(|h| h.to_string()).collect()
    }

    #[test]
    fn test_attempt_plan_exhausts_hosts_in_order() {
        let plan = attempt_plan(&hosts(&["https://h1/graphql", "https://h2/graphql"]));
        assert_eq!(plan.len(), 4);
        assert_eq!(plan[0].host, "https://h1/graphql");
        assert_eq!(plan[0].attempt, 1);
        assert_eq!(plan[1].host, "https://h1/graphql");
        assert_eq!(plan[1].attempt, 2);
        assert_eq!(plan[2].host, "https://h2/graphql");
        assert_eq!(plan[2].attempt, 1);
        assert_eq!(plan[3].host, "https://h2/graphql");
        assert_eq!(plan[3].attempt, 2);
    }

    #[test]
    fn test_attempt_plan_is_empty_for_no_hosts() {
        assert!(attempt_plan(&[]).is_empty());
    }

    #[test]
    fn test_payload_carries_query_and_school_id() {
        let request = SearchRequest::new("Jane Doe", Some("U2Nob29sLTE4NDQz".to_string()));
        let payload = build_payload(&request);
        assert_eq!(payload["variables"]["query"], "Jane Doe");
        assert_eq!(payload["variables"]["schoolID"], "U2Nob29sLTE4NDQz");
        assert_eq!(payload["query"], TEACHER_SEARCH_QUERY);
    }

    #[test]
    fn test_payload_school_id_defaults_to_null() {
        let request = SearchRequest::new("Jane Doe", None);
        let payload = build_payload(&request);
        assert!(payload["variables"]["schoolID"].is_null());
    }

    #[tokio::test]
    async fn test_empty_host_list_fails_without_network() {
        let client = reqwest::Client::new();
        let endpoints = Endpoints {
            homepage: "http://127.0.0.1:9/".to_string(),
            graphql_hosts: Vec::new(),
        };
        let request = SearchRequest::new("Jane Doe", None);
        let err = run_search(&client, &endpoints, &request)
            .await
            .expect_err("no hosts must mean no data");
        assert_eq!(err.diagnostic().status, None);
    }
}
