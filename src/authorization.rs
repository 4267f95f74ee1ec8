//! Codec for `Authorization` header values using the Token scheme.

use crate::coverage::Coverage;
use crate::credentials::{check_token, Credentials};
use crate::error::*;
use crate::scheme::{self, TOKEN_SCHEME};
use log::debug;
use std::fmt;
use std::str::FromStr;

/// Parse the value of an `Authorization` header into `Credentials`.
///
/// ```
/// use http_token_auth::{authorization, Coverage};
///
/// let creds = authorization::parse(r#"Token token="h480djs93hd8""#).unwrap();
/// assert_eq!(creds.token(), "h480djs93hd8");
/// assert_eq!(creds.coverage(), Coverage::None);
/// ```
pub fn parse(header: &str) -> std::result::Result<Credentials, AuthorizationHeaderError> {
    parse_credentials(header).map_err(|e| {
        debug!("rejecting Authorization header: {}", e);
        AuthorizationHeaderError::from(e)
    })
}

fn parse_credentials(header: &str) -> Result<Credentials> {
    let (scheme, attributes) = scheme::parse(header)?;
    scheme::require_token_scheme(&scheme)?;

    let token = attributes.get("token").unwrap_or("");
    check_token(token)?;
    let coverage = Coverage::from_wire_name(attributes.get("coverage").unwrap_or(""))?;

    let mut builder = Credentials::builder(token).coverage(coverage);
    if let Some(nonce) = attributes.get("nonce") {
        builder = builder.nonce(nonce);
    }
    if let Some(auth) = attributes.get("auth") {
        builder = builder.auth(auth);
    }
    if let Some(timestamp) = scheme::parse_timestamp(attributes.get("timestamp")) {
        builder = builder.timestamp(timestamp);
    }
    builder.build()
}

/// Serialize `Credentials` into the value of an `Authorization` header.
///
/// Attributes are always written in the order `token`, `coverage`, `nonce`, `auth`,
/// `timestamp`, and only the token is written for `Coverage::None`.
pub fn serialize(credentials: &Credentials) -> String {
    credentials.to_string()
}

impl fmt::Display for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} token=\"{}\"", TOKEN_SCHEME, self.token())?;
        if self.coverage().is_none() {
            return Ok(());
        }
        write!(
            f,
            ", coverage=\"{}\", nonce=\"{}\", auth=\"{}\"",
            self.coverage(),
            self.nonce().unwrap_or_default(),
            self.auth().unwrap_or_default(),
        )?;
        if let Some(timestamp) = self.timestamp() {
            write!(f, ", timestamp=\"{}\"", timestamp)?;
        }
        Ok(())
    }
}

impl FromStr for Credentials {
    type Err = AuthorizationHeaderError;
    fn from_str(s: &str) -> std::result::Result<Credentials, AuthorizationHeaderError> {
        parse(s)
    }
}
