//! Protocol events understood by the roster

use serde::{Deserialize, Serialize};

/// One already-parsed protocol event, as delivered by the dispatcher.
///
/// Each variant corresponds to one of the `on_*` entry points on
/// [`Roster`](super::Roster); [`Roster::apply`](super::Roster::apply) dispatches
/// it and reports the resulting changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RosterEvent {
    /// Registration completed; this is who we are
    SelfIdentity {
        nick: String,
        ident: String,
        host: String,
    },
    /// Our own nickname changed
    SelfNickChange { new_nick: String },
    Join {
        channel: String,
        nick: String,
        ident: Option<String>,
        host: Option<String>,
    },
    /// One RPL_NAMREPLY (353) line's worth of entries
    Names {
        channel: String,
        entries: Vec<String>,
    },
    Part { channel: String, nick: String },
    Kick { channel: String, nick: String },
    Quit { nick: String },
    NickChange { old_nick: String, new_nick: String },
    /// Fresh details about a user we already know, e.g. from a WHO reply or CHGHOST
    UserDetails {
        nick: String,
        ident: Option<String>,
        host: Option<String>,
        realname: Option<String>,
    },
    Mode {
        target: String,
        modes: String,
        params: Vec<String>,
    },
}
