use serde::{Deserialize, Serialize};

use std::collections::BTreeSet;

/// A channel and its current members, by nickname
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub name: String,
    pub members: BTreeSet<String>,
}

impl Channel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: BTreeSet::new(),
        }
    }

    pub fn has_member(&self, nick: &str) -> bool {
        self.members.contains(nick)
    }
}
