//! Fixed HTTP header values sent with every request.
//!
//! The upstream site fronts its GraphQL endpoint with header-based bot
//! detection, so every request carries the same small set of values a
//! browser tab on the site would send. These are applied by
//! `session::QueryHeaders`.

/// `Accept` value for the GraphQL query (we only ever want JSON back).
pub const ACCEPT_JSON: &str = "application/json";

/// `Accept-Language` value (common browser default).
pub const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// `Origin` value matching the target site.
pub const SITE_ORIGIN: &str = "https://www.ratemyprofessors.com";

/// `Referer` value matching the target site's search page.
pub const SITE_REFERER: &str = "https://www.ratemyprofessors.com/search/professors";

/// Client-identifying `Authorization` value.
///
/// The site's own frontend sends this fixed basic token with every GraphQL
/// call; it identifies the public web client, not a user.
pub const CLIENT_AUTHORIZATION: &str = "Basic dGVzdDp0ZXN0";

/// `X-Requested-With` value marking the request as an AJAX call.
pub const REQUESTED_WITH_AJAX: &str = "XMLHttpRequest";
