use super::WhoisFragment;

use serde::{Deserialize, Serialize};

use std::ops::Deref;

/// Accumulates the fragments of one WHOIS query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhoisBuilder {
    /// The nick the query is for
    pub target: String,

    /// The server that sent the reply
    pub origin: String,
    pub user: String,
    pub host: String,
    pub realname: String,

    pub server: Option<String>,
    pub server_info: Option<String>,
    pub channels: Vec<String>,

    pub operator: bool,
    pub registered: bool,
    pub help_op: bool,

    pub away: bool,
    pub away_message: Option<String>,
    pub account: Option<String>,
    pub actual_host: Option<String>,

    pub idle_seconds: Option<u64>,
    pub signon: Option<i64>,

    pub secure: Option<String>,
    pub host_info: Option<String>,
    pub modes: Option<String>,
    pub special: Vec<String>,
}

impl WhoisBuilder {
    pub fn new(origin: &str, target: &str, user: &str, host: &str, realname: &str) -> Self {
        Self {
            target: target.to_string(),
            origin: origin.to_string(),
            user: user.to_string(),
            host: host.to_string(),
            realname: realname.to_string(),
            ..Default::default()
        }
    }

    /// Whether enough arrived to be worth reporting
    pub fn has_basic_info(&self) -> bool {
        !self.user.is_empty() && !self.host.is_empty()
    }

    pub fn apply(&mut self, fragment: WhoisFragment) {
        match fragment {
            WhoisFragment::Server { name, info } => {
                self.server = Some(name);
                self.server_info = Some(info);
            }
            WhoisFragment::Operator => self.operator = true,
            WhoisFragment::Idle { seconds, signon } => {
                self.idle_seconds = Some(seconds);
                self.signon = signon;
            }
            WhoisFragment::Channels(channels) => self.channels.extend(channels),
            WhoisFragment::Away(message) => {
                self.away = true;
                self.away_message = Some(message);
            }
            WhoisFragment::LoggedIn(account) => self.account = Some(account),
            WhoisFragment::ActuallyHost(host) => self.actual_host = Some(host),
            WhoisFragment::Secure(text) => self.secure = Some(text),
            WhoisFragment::Host(text) => self.host_info = Some(text),
            WhoisFragment::Modes(text) => self.modes = Some(text),
            WhoisFragment::Special(text) => self.special.push(text),
            WhoisFragment::Registered => self.registered = true,
            WhoisFragment::HelpOp => self.help_op = true,
        }
    }
}

/// The finished result of a WHOIS query.
///
/// Built by consuming a [`WhoisBuilder`], so nothing else can change it
/// afterwards. Fields are read through `Deref`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhoisSnapshot(WhoisBuilder);

impl WhoisSnapshot {
    pub(super) fn new(builder: WhoisBuilder) -> Self {
        Self(builder)
    }
}

impl Deref for WhoisSnapshot {
    type Target = WhoisBuilder;

    fn deref(&self) -> &WhoisBuilder {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_info_needs_user_and_host() {
        assert!(WhoisBuilder::new("srv", "alice", "u1", "h1", "").has_basic_info());
        assert!(!WhoisBuilder::new("srv", "alice", "", "h1", "Alice").has_basic_info());
        assert!(!WhoisBuilder::new("srv", "alice", "u1", "", "Alice").has_basic_info());
        assert!(!WhoisBuilder::default().has_basic_info());
    }

    #[test]
    fn fragments_accumulate() {
        let mut builder = WhoisBuilder::new("srv", "alice", "u1", "h1", "Alice");
        builder.apply(WhoisFragment::Channels(vec!["@#a".to_string()]));
        builder.apply(WhoisFragment::Special("is a bot".to_string()));
        builder.apply(WhoisFragment::Channels(vec!["#b".to_string()]));
        builder.apply(WhoisFragment::Special("is a helper".to_string()));
        builder.apply(WhoisFragment::Away("lunch".to_string()));

        assert_eq!(builder.channels, vec!["@#a".to_string(), "#b".to_string()]);
        assert_eq!(builder.special.len(), 2);
        assert!(builder.away);
        assert_eq!(builder.away_message.as_deref(), Some("lunch"));
    }
}
