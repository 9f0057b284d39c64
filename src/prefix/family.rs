//! Address family types.

use std::fmt;

/// Address family collected by a single pipeline run.
///
/// A run is always homogeneous: every member of its output belongs to
/// exactly one family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AddressFamily {
    /// IPv4 prefixes.
    V4,
    /// IPv6 prefixes.
    V6,
}

impl AddressFamily {
    /// Both families, in the order a `both` selection runs them.
    pub const ALL: [Self; 2] = [Self::V4, Self::V6];

    /// Interprets a registry AFI tag (`"IPv4"`, `"IPv6"`).
    ///
    /// Only used to report disagreements with classification; the tag
    /// never decides membership.
    #[must_use]
    pub fn from_afi_tag(tag: &str) -> Option<Self> {
        if tag.eq_ignore_ascii_case("ipv4") {
            Some(Self::V4)
        } else if tag.eq_ignore_ascii_case("ipv6") {
            Some(Self::V6)
        } else {
            None
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V4 => write!(f, "IPv4"),
            Self::V6 => write!(f, "IPv6"),
        }
    }
}

/// Which families an invocation collects.
///
/// `Both` expands to one independent run per family, each with its own
/// output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FamilySelection {
    /// Collect IPv4 prefixes only.
    V4,
    /// Collect IPv6 prefixes only.
    V6,
    /// Collect IPv4, then IPv6.
    Both,
}

impl FamilySelection {
    /// Returns the families to run, in order.
    #[must_use]
    pub const fn families(self) -> &'static [AddressFamily] {
        match self {
            Self::V4 => &[AddressFamily::V4],
            Self::V6 => &[AddressFamily::V6],
            Self::Both => &AddressFamily::ALL,
        }
    }
}

impl From<AddressFamily> for FamilySelection {
    fn from(family: AddressFamily) -> Self {
        match family {
            AddressFamily::V4 => Self::V4,
            AddressFamily::V6 => Self::V6,
        }
    }
}

impl fmt::Display for FamilySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V4 => write!(f, "IPv4"),
            Self::V6 => write!(f, "IPv6"),
            Self::Both => write!(f, "Both"),
        }
    }
}
