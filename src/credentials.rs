use crate::coverage::Coverage;
use crate::error::*;

/// Token credentials as presented by a client in an `Authorization` header.
///
/// Credentials are validated when they are built, so a `Credentials` value always satisfies the
/// requirements of its coverage: with `Coverage::None` only the token is carried, and with any
/// other coverage the `nonce`, `auth` and `timestamp` fields are all present.
///
/// The `auth` value is carried opaquely; computing or verifying it is the caller's business.
#[derive(Clone, Debug, PartialEq)]
pub struct Credentials {
    token: String,
    coverage: Coverage,
    nonce: Option<String>,
    auth: Option<String>,
    timestamp: Option<i64>,
}

impl Credentials {
    /// Create credentials carrying only a token, with `Coverage::None`.
    pub fn new<S>(token: S) -> Result<Credentials>
    where
        S: Into<String>,
    {
        Credentials::builder(token).build()
    }

    /// Start building credentials for the given token.
    pub fn builder<S>(token: S) -> CredentialsBuilder
    where
        S: Into<String>,
    {
        CredentialsBuilder {
            token: token.into(),
            coverage: Coverage::None,
            nonce: None,
            auth: None,
            timestamp: None,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn coverage(&self) -> Coverage {
        self.coverage
    }

    pub fn nonce(&self) -> Option<&str> {
        self.nonce.as_deref()
    }

    pub fn auth(&self) -> Option<&str> {
        self.auth.as_deref()
    }

    /// The client's timestamp, in seconds since the Unix epoch.  No freshness check is applied.
    pub fn timestamp(&self) -> Option<i64> {
        self.timestamp
    }
}

/// Builder for `Credentials`; nothing is checked until `build`.
#[derive(Clone, Debug)]
pub struct CredentialsBuilder {
    token: String,
    coverage: Coverage,
    nonce: Option<String>,
    auth: Option<String>,
    timestamp: Option<i64>,
}

impl CredentialsBuilder {
    pub fn coverage(mut self, coverage: Coverage) -> Self {
        self.coverage = coverage;
        self
    }

    pub fn nonce<S: Into<String>>(mut self, nonce: S) -> Self {
        self.nonce = Some(nonce.into());
        self
    }

    pub fn auth<S: Into<String>>(mut self, auth: S) -> Self {
        self.auth = Some(auth.into());
        self
    }

    pub fn timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Validate the fields and produce the credentials.
    ///
    /// Missing fields are reported in the order `token`, `nonce`, `auth`, `timestamp`.  When the
    /// coverage is `Coverage::None` the nonce, auth and timestamp are dropped.
    pub fn build(self) -> Result<Credentials> {
        check_token(&self.token)?;

        if self.coverage.is_none() {
            return Ok(Credentials {
                token: self.token,
                coverage: Coverage::None,
                nonce: None,
                auth: None,
                timestamp: None,
            });
        }

        let nonce = require("nonce", self.nonce)?;
        let auth = require("auth", self.auth)?;
        let timestamp = self.timestamp.ok_or(Error::MissingAttribute("timestamp"))?;

        Ok(Credentials {
            token: self.token,
            coverage: self.coverage,
            nonce: Some(nonce),
            auth: Some(auth),
            timestamp: Some(timestamp),
        })
    }
}

/// Check that a token is usable, before anything else about the credentials is considered.
pub(crate) fn check_token(token: &str) -> Result<()> {
    if token.is_empty() {
        return Err(Error::MissingAttribute("token"));
    }
    check_component("token", token)
}

fn require(name: &'static str, value: Option<String>) -> Result<String> {
    match value {
        Some(value) if !value.is_empty() => {
            check_component(name, &value)?;
            Ok(value)
        }
        _ => Err(Error::MissingAttribute(name)),
    }
}

/// Header components are quoted strings without escaping, so they cannot contain `"`.
pub(crate) fn check_component(name: &'static str, value: &str) -> Result<()> {
    if value.contains('"') {
        return Err(Error::QuoteInAttribute(name));
    }
    Ok(())
}
