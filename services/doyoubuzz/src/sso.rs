//! Signed single sign-on redirects to the hosted Showcase site.
//!
//! The Showcase site trusts a visitor as the user described by the query
//! string as long as `hash` matches:
//!
//! ```text
//! hash = hex(md5(email + firstname + lastname + external_id + [extra...] + timestamp + sso_secret))
//! ```
//!
//! Field order is part of the signature and must not change.

use log::debug;
use percent_encoding::utf8_percent_encode;
use showcase_core::hash::hex_md5_signature;
use showcase_core::{Error, Result};

use crate::constants::*;
use crate::Params;

/// Build a signed SSO redirect URL on the default Showcase site.
///
/// `attributes` must hold `email`, `firstname`, `lastname` and `external_id`.
/// They are checked in that order and the first missing one fails with a
/// request error naming it. Extra attributes are kept after the mandatory
/// ones, in caller order, and are signed too.
///
/// ```
/// use showcase_doyoubuzz::{sso_redirect_url, Params};
///
/// let attributes = Params::new()
///     .with("email", "email@host.tld")
///     .with("firstname", "John")
///     .with("lastname", "Doe")
///     .with("external_id", 12345);
///
/// let url = sso_redirect_url("my_company", 1370534334, "vpsdihgfdso", &attributes)?;
/// assert!(url.starts_with("http://showcase.doyoubuzz.com/p/fr/my_company/sso?email=email%40host.tld"));
/// # Ok::<(), showcase_core::Error>(())
/// ```
pub fn sso_redirect_url(
    company_name: &str,
    timestamp: i64,
    sso_secret: &str,
    attributes: &Params,
) -> Result<String> {
    build_redirect_url(
        DEFAULT_SSO_BASE_URL,
        DEFAULT_SSO_LOCALE,
        company_name,
        timestamp,
        sso_secret,
        attributes,
    )
}

pub(crate) fn build_redirect_url(
    base_url: &str,
    locale: &str,
    company_name: &str,
    timestamp: i64,
    sso_secret: &str,
    attributes: &Params,
) -> Result<String> {
    let mut params = canonical_attributes(attributes)?;
    params.push(TIMESTAMP, timestamp);

    let hash = hex_md5_signature(sso_secret, params.iter().map(|(_, v)| v));
    params.push(HASH, hash);

    debug!(
        "built sso redirect for company {company_name} with {} signed fields",
        params.len() - 1
    );
    Ok(format!(
        "{}/p/{}/{}/sso?{}",
        base_url.trim_end_matches('/'),
        utf8_percent_encode(locale, &PATH_SEGMENT_ENCODE_SET),
        utf8_percent_encode(company_name, &PATH_SEGMENT_ENCODE_SET),
        params.to_form_urlencoded()
    ))
}

/// Reorder attributes into signing order, failing on the first missing one.
fn canonical_attributes(attributes: &Params) -> Result<Params> {
    let mut params = Params::new();
    for key in SSO_MANDATORY_ATTRIBUTES {
        let value = attributes.get(key).ok_or_else(|| {
            Error::request_invalid(format!("Missing mandatory attributes for SSO : {key}"))
        })?;
        params.push(key, value);
    }

    params.extend(attributes.iter().filter(|(k, _)| {
        !SSO_MANDATORY_ATTRIBUTES.contains(k) && *k != TIMESTAMP && *k != HASH
    }));
    Ok(params)
}
