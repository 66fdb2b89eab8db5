/*!
 Builds `otpauth://` URIs for items that only store their raw secret.
*/

use plist::{Uid, Value};

use crate::{
    archive::resolve,
    error::graph::GraphError,
    items::keys::ITEM_KEY_KEY,
    util::plist::{as_str, NULL_SENTINEL},
};

/// The scheme prefix of a one-time-password URI
pub const OTPAUTH_SCHEME: &str = "otpauth://";

/// Determine if a URL is already a full one-time-password URI
pub fn is_otpauth(url: &str) -> bool {
    url.starts_with(OTPAUTH_SCHEME)
}

/// Build a TOTP URI for a service, login and secret.
///
/// Components are inserted as-is, without percent-encoding.
///
/// # Example:
///
/// ```
/// use lockdown_archive::items::otpauth::format_uri;
///
/// assert_eq!(
///     format_uri("Example", "alice", "JBSWY3DPEHPK3PXP"),
///     "otpauth://totp/Example:alice?secret=JBSWY3DPEHPK3PXP&issuer=Example"
/// );
/// ```
pub fn format_uri(service: &str, login: &str, secret: &str) -> String {
    format!("{OTPAUTH_SCHEME}totp/{service}:{login}?secret={secret}&issuer={service}")
}

/// Build a TOTP URI from the raw secret `item_key_ref` points to.
///
/// Fails if the reference does not resolve to a string, or if the secret is empty or `$null`.
pub fn synthesize_uri(
    service: &str,
    login: &str,
    objects: &[Value],
    item_key_ref: Uid,
) -> Result<String, GraphError> {
    let secret = as_str(resolve(objects, item_key_ref)?, ITEM_KEY_KEY)?;
    if secret.is_empty() || secret == NULL_SENTINEL {
        return Err(GraphError::NullValue(ITEM_KEY_KEY.to_string()));
    }
    Ok(format_uri(service, login, secret))
}
