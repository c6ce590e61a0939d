//! Trusted Range Set
//!
//! Immutable snapshot of the CIDR ranges trusted for mutating requests.
//! A snapshot is built once from the upstream range list and replaced
//! wholesale on refresh, never mutated in place.

use std::net::IpAddr;

use ipnet::IpNet;

/// An immutable set of trusted CIDR ranges valid at a point in time
#[derive(Debug, Clone, Default)]
pub struct TrustedRangeSet {
    ranges: Vec<IpNet>,
}

impl TrustedRangeSet {
    /// Build a snapshot from CIDR strings.
    ///
    /// Malformed ranges are skipped with a warning: an unparsable range
    /// contributes no matches, it never becomes match-everything.
    #[must_use]
    pub fn from_cidrs<I, S>(cidrs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ranges = cidrs
            .into_iter()
            .filter_map(|cidr| match cidr.as_ref().parse::<IpNet>() {
                Ok(net) => Some(net),
                Err(_) => {
                    tracing::warn!(range = cidr.as_ref(), "Skipping malformed CIDR range");
                    None
                }
            })
            .collect();

        Self { ranges }
    }

    /// Returns true iff the address falls within at least one range
    #[must_use]
    pub fn allows(&self, addr: IpAddr) -> bool {
        self.ranges.iter().any(|net| net.contains(&addr))
    }

    /// Number of ranges in the snapshot
    #[must_use]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}
