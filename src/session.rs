//! Session warming and fixed request headers.

use reqwest::Client;

use crate::config::{
    ACCEPT_JSON, ACCEPT_LANGUAGE, CLIENT_AUTHORIZATION, REQUESTED_WITH_AJAX, SITE_ORIGIN,
    SITE_REFERER,
};

/// The fixed header set every query carries.
///
/// Mimics what the site's own frontend sends with its GraphQL calls; the
/// bot-mitigation layer inspects these alongside the User-Agent (set at the
/// client level) and the cookies collected by [`warm_session`].
pub(crate) struct QueryHeaders;

impl QueryHeaders {
    /// Applies the standard request headers to a `reqwest::RequestBuilder`.
    pub(crate) fn apply(builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header(reqwest::header::ACCEPT, ACCEPT_JSON)
            .header(reqwest::header::ACCEPT_LANGUAGE, ACCEPT_LANGUAGE)
            .header(reqwest::header::ORIGIN, SITE_ORIGIN)
            .header(reqwest::header::REFERER, SITE_REFERER)
            .header(reqwest::header::AUTHORIZATION, CLIENT_AUTHORIZATION)
            .header(
                reqwest::header::HeaderName::from_static("x-requested-with"),
                REQUESTED_WITH_AJAX,
            )
    }
}

/// Warms the session with a throwaway GET to the homepage.
///
/// The only purpose is the side effect: the bot-mitigation layer sets its
/// cookies on the client's cookie jar, which the subsequent query then
/// presents. The GET carries the same fixed header set as the queries; a
/// bare request gets challenged without ever setting the cookies we came
/// for. Best-effort by contract: every failure (network error, timeout,
/// non-2xx status) is caught and discarded here, because an unwarmed query
/// can still succeed and the retry loop handles the case where it does not.
pub async fn warm_session(client: &Client, homepage: &str) {
    match QueryHeaders::apply(client.get(homepage)).send().await {
        Ok(response) => {
            log::debug!("session warmed: {} answered {}", homepage, response.status());
        }
        Err(e) => {
            log::debug!("session warming against {homepage} failed (ignored): {e}");
        }
    }
}
