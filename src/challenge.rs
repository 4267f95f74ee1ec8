use crate::coverage::Coverage;
use crate::credentials::check_component;
use crate::error::*;

/// A Token challenge as issued by a server in a `WWW-Authenticate` header.
///
/// The supported coverages keep the order in which they were given, without repeats.  A
/// challenge supporting only `Coverage::None` carries no timestamp; every other challenge does.
#[derive(Clone, Debug, PartialEq)]
pub struct Challenge {
    realm: String,
    supported_coverages: Vec<Coverage>,
    timestamp: Option<i64>,
}

impl Challenge {
    /// Create a new challenge.
    ///
    /// An empty set of coverages means `[Coverage::Base]`.  Validation checks, in order, that the
    /// realm is present, that `Coverage::None` is not combined with other coverages, and that a
    /// timestamp is given unless `Coverage::None` is the only supported coverage.
    pub fn new<S, C>(realm: S, supported_coverages: C, timestamp: Option<i64>) -> Result<Challenge>
    where
        S: Into<String>,
        C: IntoIterator<Item = Coverage>,
    {
        let realm = realm.into();
        if realm.is_empty() {
            return Err(Error::MissingAttribute("realm"));
        }
        check_component("realm", &realm)?;

        let mut coverages: Vec<Coverage> = vec![];
        for coverage in supported_coverages {
            if !coverages.contains(&coverage) {
                coverages.push(coverage);
            }
        }
        if coverages.is_empty() {
            coverages.push(Coverage::Base);
        }

        if coverages.len() > 1 && coverages.contains(&Coverage::None) {
            return Err(Error::NoneCombinedWithOthers);
        }

        let timestamp = if is_none_only(&coverages) {
            None
        } else {
            Some(timestamp.ok_or(Error::MissingAttribute("timestamp"))?)
        };

        Ok(Challenge {
            realm,
            supported_coverages: coverages,
            timestamp,
        })
    }

    pub fn realm(&self) -> &str {
        &self.realm
    }

    pub fn supported_coverages(&self) -> &[Coverage] {
        &self.supported_coverages
    }

    /// The server's timestamp, in seconds since the Unix epoch.
    pub fn timestamp(&self) -> Option<i64> {
        self.timestamp
    }

    /// True if `Coverage::None` is the only supported coverage.
    pub fn is_none_only(&self) -> bool {
        is_none_only(&self.supported_coverages)
    }
}

fn is_none_only(coverages: &[Coverage]) -> bool {
    coverages.len() == 1 && coverages[0] == Coverage::None
}
