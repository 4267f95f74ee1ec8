//! Codec for `WWW-Authenticate` header values using the Token scheme.

use crate::challenge::Challenge;
use crate::coverage::Coverage;
use crate::error::*;
use crate::scheme::{self, TOKEN_SCHEME};
use log::debug;
use std::fmt;
use std::str::FromStr;

/// Parse the value of a `WWW-Authenticate` header into a `Challenge`.
///
/// The `coverage` attribute is a space-separated list of coverage names and defaults to `base`.
pub fn parse(header: &str) -> std::result::Result<Challenge, WWWAuthenticateHeaderError> {
    parse_challenge(header).map_err(|e| {
        debug!("rejecting WWW-Authenticate header: {}", e);
        WWWAuthenticateHeaderError::from(e)
    })
}

fn parse_challenge(header: &str) -> Result<Challenge> {
    let (scheme, attributes) = scheme::parse(header)?;
    scheme::require_token_scheme(&scheme)?;

    let realm = attributes.get("realm").unwrap_or("");
    if realm.is_empty() {
        return Err(Error::MissingAttribute("realm"));
    }
    let coverages = match attributes.get("coverage") {
        Some(value) => Coverage::parse_list(value)?,
        None => vec![],
    };
    let timestamp = scheme::parse_timestamp(attributes.get("timestamp"));

    Challenge::new(realm, coverages, timestamp)
}

/// Serialize a `Challenge` into the value of a `WWW-Authenticate` header.
///
/// The timestamp is omitted when `none` is the only supported coverage.
pub fn serialize(challenge: &Challenge) -> String {
    challenge.to_string()
}

impl fmt::Display for Challenge {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} realm=\"{}\", coverage=\"", TOKEN_SCHEME, self.realm())?;
        for (i, coverage) in self.supported_coverages().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", coverage)?;
        }
        f.write_str("\"")?;
        if let Some(timestamp) = self.timestamp() {
            write!(f, ", timestamp=\"{}\"", timestamp)?;
        }
        Ok(())
    }
}

impl FromStr for Challenge {
    type Err = WWWAuthenticateHeaderError;
    fn from_str(s: &str) -> std::result::Result<Challenge, WWWAuthenticateHeaderError> {
        parse(s)
    }
}
