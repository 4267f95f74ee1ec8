use crate::error::*;
use std::fmt;
use std::str::FromStr;

/// The integrity protection a Token credential claims to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coverage {
    /// No integrity check; the token alone authenticates the request.
    None,
    /// An `auth` value covering the base request elements.
    Base,
    /// An `auth` value covering the base request elements and a SHA-256 digest of the body.
    BaseBodySha256,
}

impl Coverage {
    /// Map a wire name to a Coverage.  An empty name means `Coverage::None`.
    pub fn from_wire_name(name: &str) -> Result<Coverage> {
        match name {
            "" | "none" => Ok(Coverage::None),
            "base" => Ok(Coverage::Base),
            "base+body-sha-256" => Ok(Coverage::BaseBodySha256),
            _ => Err(Error::UnsupportedCoverage(name.to_string())),
        }
    }

    /// The name used for this coverage in headers.
    pub fn wire_name(self) -> &'static str {
        match self {
            Coverage::None => "none",
            Coverage::Base => "base",
            Coverage::BaseBodySha256 => "base+body-sha-256",
        }
    }

    pub fn is_none(self) -> bool {
        self == Coverage::None
    }

    /// Parse a whitespace-separated list of coverage names, as found in a `WWW-Authenticate`
    /// header.  Order of first appearance is preserved and repeated names collapse.
    pub fn parse_list(value: &str) -> Result<Vec<Coverage>> {
        let mut coverages = vec![];
        for name in value.split_whitespace() {
            let coverage = Coverage::from_wire_name(name)?;
            if !coverages.contains(&coverage) {
                coverages.push(coverage);
            }
        }
        Ok(coverages)
    }
}

impl Default for Coverage {
    fn default() -> Self {
        Coverage::None
    }
}

impl FromStr for Coverage {
    type Err = Error;
    fn from_str(s: &str) -> Result<Coverage> {
        Coverage::from_wire_name(s)
    }
}

impl fmt::Display for Coverage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}
