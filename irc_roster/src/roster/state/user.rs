use crate::privilege::PrivilegeSet;

use serde::{Deserialize, Serialize};

use std::collections::{BTreeMap, BTreeSet};

/// A user.
///
/// `ident`, `host` and `realname` are empty until some event tells us about
/// them; a plain NAMES reply carries only the nickname.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub nick: String,
    pub ident: String,
    pub host: String,
    pub realname: String,

    pub channels: BTreeSet<String>,
    /// Privileges held, by channel name. An entry exists only for channels in
    /// `channels`, and is never an empty set.
    pub privileges: BTreeMap<String, PrivilegeSet>,
}

impl User {
    pub fn new(nick: impl Into<String>) -> Self {
        Self {
            nick: nick.into(),
            ident: String::new(),
            host: String::new(),
            realname: String::new(),
            channels: BTreeSet::new(),
            privileges: BTreeMap::new(),
        }
    }

    pub fn is_in(&self, channel: &str) -> bool {
        self.channels.contains(channel)
    }

    /// The privileges held in a given channel
    pub fn privileges_in(&self, channel: &str) -> PrivilegeSet {
        self.privileges.get(channel).copied().unwrap_or_default()
    }

    /// The `nick!ident@host` form, if ident and host are known
    pub fn hostmask(&self) -> Option<String> {
        if self.ident.is_empty() || self.host.is_empty() {
            None
        } else {
            Some(format!("{}!{}@{}", self.nick, self.ident, self.host))
        }
    }

    /// Fill in ident and host. Missing or empty values leave the field as it
    /// is. Returns whether anything changed.
    pub(crate) fn update_details(&mut self, ident: Option<&str>, host: Option<&str>) -> bool {
        let ident_changed = replace_if_given(&mut self.ident, ident);
        let host_changed = replace_if_given(&mut self.host, host);
        ident_changed || host_changed
    }

    pub(crate) fn update_realname(&mut self, realname: Option<&str>) -> bool {
        replace_if_given(&mut self.realname, realname)
    }
}

fn replace_if_given(field: &mut String, value: Option<&str>) -> bool {
    match value.filter(|s| !s.is_empty()) {
        Some(value) if value != field.as_str() => {
            *field = value.to_string();
            true
        }
        _ => false,
    }
}
