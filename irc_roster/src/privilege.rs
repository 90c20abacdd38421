//! Channel privilege markers and sets of them

use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoEnumIterator};

/// A channel-scoped privilege a member may hold.
///
/// Variants are declared in ascending rank, so the derived ordering is the
/// display ranking: the highest privilege held is the one shown as a badge.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    strum::Display,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Privilege {
    Voice = 1,
    HalfOp = 2,
    Operator = 3,
    Admin = 4,
    Owner = 5,
}

impl Privilege {
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    fn bit(&self) -> u8 {
        1 << self.rank()
    }

    /// The mode letter conventionally used for this privilege
    pub fn default_mode_letter(&self) -> char {
        match self {
            Self::Owner => 'q',
            Self::Admin => 'a',
            Self::Operator => 'o',
            Self::HalfOp => 'h',
            Self::Voice => 'v',
        }
    }

    /// The NAMES prefix symbol conventionally used for this privilege
    pub fn default_symbol(&self) -> char {
        match self {
            Self::Owner => '~',
            Self::Admin => '&',
            Self::Operator => '@',
            Self::HalfOp => '%',
            Self::Voice => '+',
        }
    }
}

/// The set of privileges one user holds in one channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivilegeSet(u8);

impl PrivilegeSet {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn contains(&self, privilege: Privilege) -> bool {
        (self.0 & privilege.bit()) != 0
    }

    /// Add a privilege. Returns true if it was not already held.
    pub fn insert(&mut self, privilege: Privilege) -> bool {
        let added = !self.contains(privilege);
        self.0 |= privilege.bit();
        added
    }

    /// Remove a privilege. Returns true if it was held.
    pub fn remove(&mut self, privilege: Privilege) -> bool {
        let removed = self.contains(privilege);
        self.0 &= !privilege.bit();
        removed
    }

    /// The highest-ranked privilege in the set, if any
    pub fn highest(&self) -> Option<Privilege> {
        self.iter().max()
    }

    pub fn iter(&self) -> impl Iterator<Item = Privilege> + '_ {
        Privilege::iter().filter(move |p| self.contains(*p))
    }
}

impl FromIterator<Privilege> for PrivilegeSet {
    fn from_iter<T: IntoIterator<Item = Privilege>>(iter: T) -> Self {
        let mut set = Self::new();
        for privilege in iter {
            set.insert(privilege);
        }
        set
    }
}
