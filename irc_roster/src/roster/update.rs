//! Contains types used by [`Roster`](super::Roster) to notify callers of state changes

use super::state;
use crate::privilege::Privilege;

use serde::{Deserialize, Serialize};

/// Why a user stopped being a member of a channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeaveReason {
    Part,
    Kick,
    Quit,
    /// Another user took over the nickname, so this record was stale
    Superseded,
}

/// Emitted by the `Roster` to signal that a change has happened. One event may
/// cause any number of updates.
///
/// Parameters are copies, as the originals may already be gone from the
/// roster by the time the update is processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RosterUpdate {
    /// A user became a member of a channel
    UserJoined { channel: String, nick: String },
    /// A user stopped being a member of a channel
    UserLeft {
        channel: String,
        nick: String,
        reason: LeaveReason,
    },
    /// A user is no longer in any channel we can see, and was dropped
    UserForgotten { user: state::User },
    /// A channel has no members left, and was dropped
    ChannelForgotten { name: String },
    NickChanged {
        old_nick: String,
        new_nick: String,
        is_self: bool,
    },
    PrivilegeChanged {
        channel: String,
        nick: String,
        privilege: Privilege,
        granted: bool,
    },
    UserDetailsChanged { user: state::User },
    SelfIdentityChanged { nick: String },
}

/// Trait to be implemented by an object which wants to be notified of roster updates
///
/// An instance of this is passed to `Roster::apply` to receive all updates caused by that
/// event.
pub trait RosterUpdateReceiver {
    /// Notify the receiver of a roster state change
    fn notify_update(&self, update: RosterUpdate);
}

/// Receiver for callers that only want the state, not the notifications
pub struct NoOpUpdateReceiver;

impl RosterUpdateReceiver for NoOpUpdateReceiver {
    fn notify_update(&self, _update: RosterUpdate) {}
}
