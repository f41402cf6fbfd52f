//! Oldest node release the routing table is known to work against.

use std::{cmp::Ordering, fmt};

/// Minimum supported `gaiad` version. Not enforced by the client.
pub const MIN_NODE_VERSION: &str = "0.32.0-2-g19f0f92c";

/// `major.minor.patch` part of a node version string.
///
/// Build metadata such as `-2-g19f0f92c` is ignored, so two builds of the
/// same release compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl NodeVersion {
    /// Accepts `0.32.0`, `v0.32.0`, `0.32.0-2-g19f0f92c` and `0.32` (patch 0).
    pub fn parse(version: &str) -> Option<Self> {
        let version = version.trim().trim_matches('"');
        let version = version.strip_prefix('v').unwrap_or(version);
        let core = version.split(['-', '+']).next()?;

        let mut parts = core.split('.');
        let major = parts.next()?.parse().ok()?;
        let minor = parts.next()?.parse().ok()?;
        let patch = match parts.next() {
            Some(patch) => patch.parse().ok()?,
            None => 0,
        };
        if parts.next().is_some() {
            return None;
        }
        Some(NodeVersion {
            major,
            minor,
            patch,
        })
    }

    pub fn minimum() -> Self {
        NodeVersion {
            major: 0,
            minor: 32,
            patch: 0,
        }
    }
}

impl fmt::Display for NodeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Whether `version` is at least [`MIN_NODE_VERSION`].
pub fn is_supported_version(version: &str) -> bool {
    NodeVersion::parse(version)
        .map(|v| v.cmp(&NodeVersion::minimum()) != Ordering::Less)
        .unwrap_or(false)
}
