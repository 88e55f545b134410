//! Configuration constants.
//!
//! All of these are process-wide read-only configuration: initialized once at
//! startup, never mutated. Timeouts and the retry budget are deliberately
//! small and fixed so that one invocation never issues more than four network
//! round-trips against the third-party service.

use std::time::Duration;

/// Ordered list of GraphQL endpoint URLs.
///
/// The dispatcher tries these in order; the first host that answers with
/// well-formed JSON wins. The second entry is a fallback for the occasional
/// CDN configuration where the `www` host serves a challenge page while the
/// `rmp` API host still answers normally.
pub const GRAPHQL_HOSTS: &[&str] = &[
    "https://www.ratemyprofessors.com/graphql",
    "https://rmp.ratemyprofessors.com/graphql",
];

/// Homepage URL used for session warming.
///
/// A throwaway GET here lets the site's bot-mitigation layer set its cookies
/// on our session before the real query goes out.
pub const HOMEPAGE_URL: &str = "https://www.ratemyprofessors.com/";

/// Per-request timeout in seconds (applies to warming and query requests).
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

/// Attempts per host before moving on to the next one.
pub const ATTEMPTS_PER_HOST: usize = 2;

/// Delay between attempts.
///
/// Short and fixed. The sequential 2 attempts x 2 hosts budget assumes this
/// pacing; do not parallelize the host loop.
pub const RETRY_DELAY: Duration = Duration::from_millis(800);

/// Maximum number of body characters kept in a diagnostic excerpt.
///
/// Challenge pages can be large; 500 characters is enough to recognize one
/// without bloating error output.
pub const MAX_BODY_EXCERPT_CHARS: usize = 500;

/// Default User-Agent string for HTTP requests.
///
/// A plain library User-Agent gets challenged immediately, so this mimics a
/// current desktop Chrome. Users can override it via the `--user-agent` flag
/// if the site starts rejecting this one.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// The GraphQL search document posted to every host.
///
/// Variables: `query` (professor name) and `schoolID` (relay-style school
/// identifier, or null to search across all schools). Only the first page of
/// ten results is requested. Result order is the server's relevance order;
/// by convention the first edge is the best match.
pub const TEACHER_SEARCH_QUERY: &str = "\
query TeacherSearchQuery($query: String!, $schoolID: ID) {
  newSearch {
    teachers(query: { text: $query, schoolID: $schoolID }, first: 10) {
      edges {
        node {
          id
          legacyId
          firstName
          lastName
          school {
            id
            name
            legacyId
          }
          avgRating
          avgDifficulty
          numRatings
          wouldTakeAgainPercent
        }
      }
    }
  }
}";
