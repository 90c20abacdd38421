//! Defines the [Roster] object.

use super::errors::{RosterError, RosterResult};
use super::event::RosterEvent;
use super::name_index::NameIndex;
use super::state;
use super::update::*;
use crate::casemap::CaseMapping;
use crate::config::RosterConfig;

use serde::{Deserialize, Serialize};

use std::collections::HashMap;

/// Stores the users and channels visible to one client connection.
///
/// ## General Principles
///
/// Users and channels are held in two tables keyed by nickname and channel
/// name, and refer to each other by those keys rather than by reference:
/// a [`state::User`] lists the channels it is in, and a [`state::Channel`]
/// lists its members. Every handler keeps the two sides in step, so that a
/// user is listed in a channel exactly when the channel is listed in the user.
///
/// A user who is in no channel is forgotten, except for the client's own user.
/// A channel with no members is forgotten.
///
/// Lookups are exact first, then fall back to a case-insensitive match under
/// the configured casemapping, through an index of casefolded names kept
/// alongside each table. Events referring to users or channels that aren't
/// known are ignored.
///
/// The roster must be armed with [`Roster::start`] before use. While it isn't,
/// every operation returns [`RosterError::Inactive`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    tracking: bool,
    users: HashMap<String, state::User>,
    channels: HashMap<String, state::Channel>,
    user_index: NameIndex,
    channel_index: NameIndex,
    self_nick: Option<String>,
    config: RosterConfig,
}

impl Roster {
    /// Create an empty, disarmed roster.
    pub fn new(config: RosterConfig) -> Roster {
        Roster {
            tracking: false,
            users: HashMap::new(),
            channels: HashMap::new(),
            user_index: NameIndex::new(config.casemapping),
            channel_index: NameIndex::new(config.casemapping),
            self_nick: None,
            config,
        }
    }

    /// Arm the roster. Calling this on an armed roster does nothing.
    pub fn start(&mut self) {
        self.tracking = true;
    }

    /// Disarm the roster, discarding everything it knows.
    pub fn stop(&mut self) {
        self.tracking = false;
        self.users.clear();
        self.channels.clear();
        self.user_index.clear();
        self.channel_index.clear();
        self.self_nick = None;
    }

    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    /// Access the configuration, for instance to apply ISUPPORT tokens as
    /// they arrive. Changing the prefix table does not rewrite privileges
    /// already recorded. A new casemapping takes effect for lookups at once,
    /// and the name indexes are rebuilt with it on the next update.
    pub fn config_mut(&mut self) -> &mut RosterConfig {
        &mut self.config
    }

    fn check_tracking(&self) -> RosterResult<()> {
        if self.tracking {
            Ok(())
        } else {
            Err(RosterError::Inactive)
        }
    }

    /// Check the roster is armed before changing it, and bring the name
    /// indexes in line with the configured casemapping.
    fn begin_update(&mut self) -> RosterResult<()> {
        self.check_tracking()?;

        let casemapping = self.config.casemapping;
        if self.user_index.casemapping() != casemapping || self.channel_index.casemapping() != casemapping {
            tracing::debug!("Reindexing names for casemapping {}", casemapping);
            self.user_index.rebuild(casemapping, self.users.keys());
            self.channel_index.rebuild(casemapping, self.channels.keys());
        }
        Ok(())
    }

    /// Apply a [RosterEvent] to the roster.
    ///
    /// ## Arguments
    ///
    /// - `event`: the event to apply
    /// - `updates`: an implementation of [RosterUpdateReceiver] which will
    ///   be notified of every change in roster state that results from the
    ///   event.
    ///
    /// ## Return Value
    ///
    /// `Err(RosterError::Inactive)` if the roster is not armed, in which case
    /// nothing is changed. `Ok(())` otherwise, including when the event
    /// refers to users or channels that aren't known.
    #[tracing::instrument(skip(self, updates))]
    pub fn apply(&mut self, event: &RosterEvent, updates: &dyn RosterUpdateReceiver) -> RosterResult<()> {
        self.begin_update()?;

        match event {
            RosterEvent::SelfIdentity { nick, ident, host } => self.self_identity_set(nick, ident, host, updates),
            RosterEvent::SelfNickChange { new_nick } => self.self_renamed(new_nick, updates),
            RosterEvent::Join { channel, nick, ident, host } => {
                self.user_joined(channel, nick, ident.as_deref(), host.as_deref(), updates)
            }
            RosterEvent::Names { channel, entries } => self.names_received(channel, entries, updates),
            RosterEvent::Part { channel, nick } => self.user_left(channel, nick, LeaveReason::Part, updates),
            RosterEvent::Kick { channel, nick } => self.user_left(channel, nick, LeaveReason::Kick, updates),
            RosterEvent::Quit { nick } => self.user_quit(nick, updates),
            RosterEvent::NickChange { old_nick, new_nick } => self.user_renamed(old_nick, new_nick, updates),
            RosterEvent::UserDetails { nick, ident, host, realname } => {
                self.user_details(nick, ident.as_deref(), host.as_deref(), realname.as_deref(), updates)
            }
            RosterEvent::Mode { target, modes, params } => self.channel_mode_change(target, modes, params, updates),
        }

        tracing::trace!(users = self.users.len(), channels = self.channels.len(), "Applied event");
        Ok(())
    }

    /// Record the client's own identity. Call once registration completes.
    pub fn set_self_identity(&mut self, nick: &str, ident: &str, host: &str) -> RosterResult<()> {
        self.begin_update()?;
        self.self_identity_set(nick, ident, host, &NoOpUpdateReceiver);
        Ok(())
    }

    /// The client's own nickname changed.
    pub fn on_self_nick_changed(&mut self, new_nick: &str) -> RosterResult<()> {
        self.begin_update()?;
        self.self_renamed(new_nick, &NoOpUpdateReceiver);
        Ok(())
    }

    pub fn on_join(&mut self, channel: &str, nick: &str, ident: Option<&str>, host: Option<&str>) -> RosterResult<()> {
        self.begin_update()?;
        self.user_joined(channel, nick, ident, host, &NoOpUpdateReceiver);
        Ok(())
    }

    /// Seed a channel's membership from the entries of a NAMES reply.
    pub fn on_names<S: AsRef<str>>(&mut self, channel: &str, entries: &[S]) -> RosterResult<()> {
        self.begin_update()?;
        self.names_received(channel, entries, &NoOpUpdateReceiver);
        Ok(())
    }

    pub fn on_part(&mut self, channel: &str, nick: &str) -> RosterResult<()> {
        self.begin_update()?;
        self.user_left(channel, nick, LeaveReason::Part, &NoOpUpdateReceiver);
        Ok(())
    }

    pub fn on_kick(&mut self, channel: &str, nick: &str) -> RosterResult<()> {
        self.begin_update()?;
        self.user_left(channel, nick, LeaveReason::Kick, &NoOpUpdateReceiver);
        Ok(())
    }

    pub fn on_quit(&mut self, nick: &str) -> RosterResult<()> {
        self.begin_update()?;
        self.user_quit(nick, &NoOpUpdateReceiver);
        Ok(())
    }

    pub fn on_nick_change(&mut self, old_nick: &str, new_nick: &str) -> RosterResult<()> {
        self.begin_update()?;
        self.user_renamed(old_nick, new_nick, &NoOpUpdateReceiver);
        Ok(())
    }

    /// Update ident, host or realname of a user who is already known.
    pub fn on_user_details(
        &mut self,
        nick: &str,
        ident: Option<&str>,
        host: Option<&str>,
        realname: Option<&str>,
    ) -> RosterResult<()> {
        self.begin_update()?;
        self.user_details(nick, ident, host, realname, &NoOpUpdateReceiver);
        Ok(())
    }

    /// Apply a MODE change. Targets that aren't channels are ignored.
    pub fn on_mode<S: AsRef<str>>(&mut self, target: &str, modes: &str, params: &[S]) -> RosterResult<()> {
        self.begin_update()?;
        self.channel_mode_change(target, modes, params, &NoOpUpdateReceiver);
        Ok(())
    }

    /// Find the key under which a user is stored, exact match first
    fn user_key(&self, nick: &str) -> Option<String> {
        resolve_key(&self.users, &self.user_index, self.config.casemapping, nick)
    }

    /// Find the key under which a channel is stored, exact match first
    fn channel_key(&self, name: &str) -> Option<String> {
        resolve_key(&self.channels, &self.channel_index, self.config.casemapping, name)
    }

    fn is_self(&self, key: &str) -> bool {
        self.self_nick.as_deref() == Some(key)
    }

    /// Drop a user who is no longer in any channel, unless they're us.
    fn collect_user(&mut self, key: &str, updates: &dyn RosterUpdateReceiver) {
        if self.is_self(key) {
            return;
        }
        if self.users.get(key).map_or(false, |u| u.channels.is_empty()) {
            if let Some(user) = self.users.remove(key) {
                self.user_index.remove(key);
                updates.notify_update(RosterUpdate::UserForgotten { user });
            }
        }
    }

    /// Drop a channel with no members left.
    fn collect_channel(&mut self, key: &str, updates: &dyn RosterUpdateReceiver) {
        if self.channels.get(key).map_or(false, |c| c.members.is_empty()) {
            self.channels.remove(key);
            self.channel_index.remove(key);
            updates.notify_update(RosterUpdate::ChannelForgotten { name: key.to_string() });
        }
    }
}

/// Until the index has caught up with a casemapping change, fall back to
/// comparing against every key.
fn resolve_key<T>(table: &HashMap<String, T>, index: &NameIndex, casemapping: CaseMapping, name: &str) -> Option<String> {
    if table.contains_key(name) {
        return Some(name.to_string());
    }
    if index.casemapping() == casemapping {
        index.get(name).cloned()
    } else {
        table.keys().find(|k| casemapping.equals(k, name)).cloned()
    }
}

mod accessors;
mod membership_state;
mod mode_state;
mod user_state;
