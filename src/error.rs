use failure::Fail;

pub type Result<T> = std::result::Result<T, Error>;

/// The ways in which a Token header or one of its entities can be invalid.
#[derive(Fail, Debug, Clone, PartialEq)]
pub enum Error {
    #[fail(display = "Unsupported scheme \"{}\"", _0)]
    UnsupportedScheme(String),

    #[fail(display = "No attributes provided")]
    NoAttributes,

    #[fail(display = "\"{}\" is missing", _0)]
    MissingAttribute(&'static str),

    #[fail(display = "\"{}\" cannot contain `\"`", _0)]
    QuoteInAttribute(&'static str),

    #[fail(display = "Unsupported coverage \"{}\"", _0)]
    UnsupportedCoverage(String),

    #[fail(display = "\"none\" coverage cannot be combined with other coverages")]
    NoneCombinedWithOthers,
}

/// Failure to parse an `Authorization` header with the Token scheme.
#[derive(Fail, Debug, Clone, PartialEq)]
#[fail(
    display = "Error parsing \"Authorization\" HTTP header with token scheme: {}",
    _0
)]
pub struct AuthorizationHeaderError(#[fail(cause)] Error);

impl AuthorizationHeaderError {
    /// The underlying reason the header was rejected.
    pub fn kind(&self) -> &Error {
        &self.0
    }
}

impl From<Error> for AuthorizationHeaderError {
    fn from(e: Error) -> Self {
        AuthorizationHeaderError(e)
    }
}

/// Failure to parse a `WWW-Authenticate` header with the Token scheme.
#[derive(Fail, Debug, Clone, PartialEq)]
#[fail(
    display = "Error parsing \"WWW-Authenticate\" HTTP header with token scheme: {}",
    _0
)]
pub struct WWWAuthenticateHeaderError(#[fail(cause)] Error);

impl WWWAuthenticateHeaderError {
    /// The underlying reason the header was rejected.
    pub fn kind(&self) -> &Error {
        &self.0
    }
}

impl From<Error> for WWWAuthenticateHeaderError {
    fn from(e: Error) -> Self {
        WWWAuthenticateHeaderError(e)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use failure::Fail;

    #[test]
    fn test_authorization_message() {
        let err = AuthorizationHeaderError::from(Error::MissingAttribute("token"));
        assert_eq!(
            err.to_string(),
            "Error parsing \"Authorization\" HTTP header with token scheme: \"token\" is missing"
        );
        assert_eq!(err.kind(), &Error::MissingAttribute("token"));
    }

    #[test]
    fn test_www_authenticate_message() {
        let err = WWWAuthenticateHeaderError::from(Error::UnsupportedCoverage("x".to_string()));
        assert_eq!(
            err.to_string(),
            "Error parsing \"WWW-Authenticate\" HTTP header with token scheme: \
             Unsupported coverage \"x\""
        );
    }

    #[test]
    fn test_cause() {
        let err = WWWAuthenticateHeaderError::from(Error::NoAttributes);
        let cause = err.cause().expect("wrapped error has a cause");
        assert_eq!(cause.to_string(), "No attributes provided");
    }
}
