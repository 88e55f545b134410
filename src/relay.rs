//! Relay-style identifier encoding.
//!
//! The GraphQL service addresses objects by opaque relay identifiers rather
//! than the legacy numeric ids users know from URLs. The encoding is just
//! base64 over `"<TypeName>-<legacy id>"`.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

/// Encodes a legacy numeric school id as a relay-style identifier.
///
/// Returns `None` when the input is absent or empty. Any non-empty string is
/// accepted and encoded as-is; the server rejects unknown ids on its side, so
/// no numeric validation happens here. Deterministic, never fails.
///
/// # Examples
///
/// ```
/// use rmp_lookup::encode_school_id;
///
/// assert_eq!(
///     encode_school_id(Some("18443")).as_deref(),
///     Some("U2Nob29sLTE4NDQz")
/// );
/// assert_eq!(encode_school_id(None), None);
/// ```
pub fn encode_school_id(legacy_id: Option<&str>) -> Option<String> {
    let id = legacy_id?.trim();
    if id.is_empty() {
        return None;
    }
    Some(BASE64.encode(format!("School-{id}")))
}
