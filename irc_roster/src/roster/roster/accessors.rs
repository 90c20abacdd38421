use super::*;
use crate::privilege::{Privilege, PrivilegeSet};

use itertools::Itertools;

use std::cmp::Reverse;

impl Roster {
    /// Look up a user by nickname.
    pub fn find_user(&self, nick: &str) -> RosterResult<Option<&state::User>> {
        self.check_tracking()?;
        Ok(self.user_key(nick).and_then(|key| self.users.get(&key)))
    }

    /// Look up a channel by name.
    pub fn find_channel(&self, name: &str) -> RosterResult<Option<&state::Channel>> {
        self.check_tracking()?;
        Ok(self.channel_key(name).and_then(|key| self.channels.get(&key)))
    }

    /// The user record for this client, once [`set_self_identity`](Self::set_self_identity)
    /// has been called
    pub fn self_user(&self) -> RosterResult<Option<&state::User>> {
        self.check_tracking()?;
        Ok(self.self_nick.as_ref().and_then(|nick| self.users.get(nick)))
    }

    /// Return an iterator over all users.
    pub fn users(&self) -> RosterResult<impl Iterator<Item = &state::User>> {
        self.check_tracking()?;
        Ok(self.users.values())
    }

    /// Return an iterator over all channels.
    pub fn channels(&self) -> RosterResult<impl Iterator<Item = &state::Channel>> {
        self.check_tracking()?;
        Ok(self.channels.values())
    }

    /// Every privilege the user holds in the channel; empty if either is unknown
    pub fn privileges(&self, channel: &str, nick: &str) -> RosterResult<PrivilegeSet> {
        Ok(self
            .find_channel(channel)?
            .zip(self.find_user(nick)?)
            .map(|(channel, user)| user.privileges_in(&channel.name))
            .unwrap_or_default())
    }

    /// The privilege to show as the user's badge in a channel: the highest
    /// ranked one held, or `None` if the user holds none or isn't known.
    pub fn get_display_prefix(&self, channel: &str, nick: &str) -> RosterResult<Option<Privilege>> {
        Ok(self.privileges(channel, nick)?.highest())
    }

    /// A channel's members in nick list order: highest privilege first, then
    /// alphabetically ignoring case.
    pub fn members_by_rank(&self, channel: &str) -> RosterResult<Vec<(Option<Privilege>, &state::User)>> {
        let Some(channel) = self.find_channel(channel)? else {
            return Ok(Vec::new());
        };
        let casemapping = self.config.casemapping;

        Ok(channel
            .members
            .iter()
            .filter_map(|nick| self.users.get(nick))
            .map(|user| (user.privileges_in(&channel.name).highest(), user))
            .sorted_by_key(|(privilege, user)| (Reverse(*privilege), casemapping.fold(&user.nick)))
            .collect())
    }
}
