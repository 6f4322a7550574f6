//! Typed wrappers for Facets contrived keys.
//!
//! The vendor schema joins everything on integer "contrived key" columns
//! (`MEME_CK`, `SBSB_CK`, `GRGR_CK`, `SGSG_CK`). Wrapping them keeps a
//! member key from being bound where a group key belongs.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// A strongly-typed wrapper for member contrived keys (`MEME_CK`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberCk(pub i64);

impl MemberCk {
    /// Creates a member key from a raw column value.
    #[must_use]
    pub const fn from_raw(ck: i64) -> Self {
        Self(ck)
    }

    /// Returns the raw column value.
    #[must_use]
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

impl Display for MemberCk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for MemberCk {
    fn from(ck: i64) -> Self {
        Self(ck)
    }
}

impl From<MemberCk> for i64 {
    fn from(ck: MemberCk) -> Self {
        ck.0
    }
}

/// A strongly-typed wrapper for subscriber contrived keys (`SBSB_CK`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubscriberCk(pub i64);

impl SubscriberCk {
    /// Creates a subscriber key from a raw column value.
    #[must_use]
    pub const fn from_raw(ck: i64) -> Self {
        Self(ck)
    }

    /// Returns the raw column value.
    #[must_use]
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

impl Display for SubscriberCk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for SubscriberCk {
    fn from(ck: i64) -> Self {
        Self(ck)
    }
}

impl From<SubscriberCk> for i64 {
    fn from(ck: SubscriberCk) -> Self {
        ck.0
    }
}

/// A strongly-typed wrapper for group contrived keys (`GRGR_CK`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupCk(pub i64);

impl GroupCk {
    /// Creates a group key from a raw column value.
    #[must_use]
    pub const fn from_raw(ck: i64) -> Self {
        Self(ck)
    }

    /// Returns the raw column value.
    #[must_use]
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

impl Display for GroupCk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for GroupCk {
    fn from(ck: i64) -> Self {
        Self(ck)
    }
}

impl From<GroupCk> for i64 {
    fn from(ck: GroupCk) -> Self {
        ck.0
    }
}

/// A strongly-typed wrapper for subgroup contrived keys (`SGSG_CK`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubgroupCk(pub i64);

impl SubgroupCk {
    /// Creates a subgroup key from a raw column value.
    #[must_use]
    pub const fn from_raw(ck: i64) -> Self {
        Self(ck)
    }

    /// Returns the raw column value.
    #[must_use]
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

impl Display for SubgroupCk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for SubgroupCk {
    fn from(ck: i64) -> Self {
        Self(ck)
    }
}

impl From<SubgroupCk> for i64 {
    fn from(ck: SubgroupCk) -> Self {
        ck.0
    }
}
