//! The `http_token_auth` crate parses and serializes the header values of the HTTP "Token"
//! authentication scheme.
//!
//! A client presents `Credentials` in an `Authorization` header; a server advertises a
//! `Challenge` in a `WWW-Authenticate` header.  Both carry a [`Coverage`] describing the integrity
//! protection in use.  Credentials with a coverage other than `none` also carry a `nonce`, an
//! `auth` value and a `timestamp`.
//!
//! This crate only moves these values between strings and validated types.  It does not compute
//! or verify the `auth` value, and it applies no policy to timestamps or nonces.
//!
//! # Examples
//!
//! ## Server
//!
//! A server parses the `Authorization` header from a request:
//!
//! ```
//! use http_token_auth::{authorization, Coverage};
//!
//! let header = r#"Token token="h480djs93hd8",
//!                       coverage="base",
//!                       nonce="dj83hs9s",
//!                       auth="djosJKDKJSD8743243/jdk33klY=",
//!                       timestamp="137131200""#;
//! let credentials = authorization::parse(header).unwrap();
//! assert_eq!(credentials.token(), "h480djs93hd8");
//! assert_eq!(credentials.coverage(), Coverage::Base);
//! assert_eq!(credentials.timestamp(), Some(137131200));
//!
//! // a malformed header yields an error suitable for a 400 response
//! let err = authorization::parse(r#"Token coverage="base""#).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     r#"Error parsing "Authorization" HTTP header with token scheme: "token" is missing"#
//! );
//! ```
//!
//! and answers unauthenticated requests with a challenge:
//!
//! ```
//! use http_token_auth::{www_authenticate, Challenge, Coverage};
//!
//! let challenge = Challenge::new(
//!     "http://example.com",
//!     vec![Coverage::Base, Coverage::BaseBodySha256],
//!     Some(137131200),
//! )
//! .unwrap();
//! assert_eq!(
//!     www_authenticate::serialize(&challenge),
//!     r#"Token realm="http://example.com", coverage="base base+body-sha-256", timestamp="137131200""#
//! );
//! ```
//!
//! ## Client
//!
//! A client reads the challenge and builds matching credentials:
//!
//! ```
//! use http_token_auth::{authorization, www_authenticate, Credentials, util};
//!
//! let challenge = www_authenticate::parse(
//!     r#"Token realm="http://example.com", coverage="base", timestamp="137131200""#,
//! )
//! .unwrap();
//!
//! let credentials = Credentials::builder("h480djs93hd8")
//!     .coverage(challenge.supported_coverages()[0])
//!     .nonce(util::random_nonce(12))
//!     .auth("computed-elsewhere")
//!     .timestamp(util::unix_timestamp())
//!     .build()
//!     .unwrap();
//! let header = authorization::serialize(&credentials);
//! assert!(header.starts_with(r#"Token token="h480djs93hd8", coverage="base""#));
//! ```

pub mod authorization;
pub mod scheme;
pub mod util;
pub mod www_authenticate;

mod challenge;
pub use crate::challenge::Challenge;

mod coverage;
pub use crate::coverage::Coverage;

mod credentials;
pub use crate::credentials::{Credentials, CredentialsBuilder};

mod error;
pub use crate::error::*;
