use crate::error::*;
use log::{debug, trace};

/// The only authentication scheme name this crate accepts.
pub(crate) const TOKEN_SCHEME: &str = "Token";

/// The `key="value"` attributes of a header, in the order their keys first appeared.
///
/// A key appearing more than once keeps its first position but takes the last value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    /// Get the value of the named attribute, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(name, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn insert(&mut self, name: &str, value: &str) {
        match self.0.iter_mut().find(|(k, _)| k == name) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.0.push((name.to_string(), value.to_string())),
        }
    }
}

/// Split a header value into its scheme name and its attributes.
///
/// The scheme is everything before the first run of whitespace; it is returned as-is so that
/// callers can decide which schemes they accept.  A header with no whitespace after the scheme
/// fails with `Error::NoAttributes`; a blank remainder simply yields no attributes.
pub fn parse(header: &str) -> Result<(String, Attributes)> {
    let header = header.trim_start();
    match header.find(char::is_whitespace) {
        Some(i) => Ok((header[..i].to_string(), parse_attributes(&header[i..]))),
        None => Err(Error::NoAttributes),
    }
}

fn is_identifier_byte(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_'
}

/// Collect every `identifier="value"` occurrence in `s`, left to right.
///
/// Text that does not form an attribute (separators, stray whitespace, newlines) is skipped.
/// Values are taken verbatim up to the next `"`; there is no escaping.
pub fn parse_attributes(s: &str) -> Attributes {
    let bytes = s.as_bytes();
    let mut attributes = Attributes::default();
    let mut cursor = 0;

    while let Some(offset) = s[cursor..].find("=\"") {
        let eq = cursor + offset;
        let value_start = eq + 2;
        let value_end = match s[value_start..].find('"') {
            Some(len) => value_start + len,
            None => break,
        };

        // the identifier is the run of word characters immediately before `=`
        let mut start = eq;
        while start > cursor && is_identifier_byte(bytes[start - 1]) {
            start -= 1;
        }
        if start == eq {
            cursor = eq + 1;
            continue;
        }

        let (name, value) = (&s[start..eq], &s[value_start..value_end]);
        trace!("found attribute {}={:?}", name, value);
        attributes.insert(name, value);
        cursor = value_end + 1;
    }

    attributes
}

/// Check that a parsed scheme name is the Token scheme.
pub(crate) fn require_token_scheme(scheme: &str) -> Result<()> {
    if scheme != TOKEN_SCHEME {
        return Err(Error::UnsupportedScheme(scheme.to_string()));
    }
    Ok(())
}

/// Interpret a `timestamp` attribute.  A value that is not a decimal integer is treated as if the
/// attribute were absent.
pub(crate) fn parse_timestamp(value: Option<&str>) -> Option<i64> {
    let value = value?;
    match value.trim().parse::<i64>() {
        Ok(ts) => Some(ts),
        Err(_) => {
            debug!("ignoring non-numeric timestamp {:?}", value);
            None
        }
    }
}
