use super::*;
use crate::privilege::PrivilegeSet;

impl Roster {
    /// Make sure `nick` is a member of `channel`, creating either as needed.
    ///
    /// Returns the keys the user and channel are stored under.
    pub(super) fn ensure_membership(
        &mut self,
        channel: &str,
        nick: &str,
        ident: Option<&str>,
        host: Option<&str>,
        updates: &dyn RosterUpdateReceiver,
    ) -> (String, String) {
        let user_key = self.user_key(nick).unwrap_or_else(|| nick.to_string());
        let channel_key = self.channel_key(channel).unwrap_or_else(|| channel.to_string());

        self.user_index.insert(&user_key);
        let user = self
            .users
            .entry(user_key.clone())
            .or_insert_with(|| state::User::new(user_key.clone()));
        user.update_details(ident, host);
        user.channels.insert(channel_key.clone());

        self.channel_index.insert(&channel_key);
        let channel = self
            .channels
            .entry(channel_key.clone())
            .or_insert_with(|| state::Channel::new(channel_key.clone()));

        if channel.members.insert(user_key.clone()) {
            updates.notify_update(RosterUpdate::UserJoined {
                channel: channel_key.clone(),
                nick: user_key.clone(),
            });
        }

        (user_key, channel_key)
    }

    /// Remove a membership from both sides, along with any privileges held
    /// in the channel, then drop the user or channel if that left them empty.
    fn remove_membership(&mut self, channel_key: &str, user_key: &str, reason: LeaveReason, updates: &dyn RosterUpdateReceiver) {
        let mut removed = false;

        if let Some(user) = self.users.get_mut(user_key) {
            removed |= user.channels.remove(channel_key);
            user.privileges.remove(channel_key);
        }
        if let Some(channel) = self.channels.get_mut(channel_key) {
            removed |= channel.members.remove(user_key);
        }

        if removed {
            updates.notify_update(RosterUpdate::UserLeft {
                channel: channel_key.to_string(),
                nick: user_key.to_string(),
                reason,
            });
        }

        self.collect_user(user_key, updates);
        self.collect_channel(channel_key, updates);
    }

    pub(super) fn user_joined(
        &mut self,
        channel: &str,
        nick: &str,
        ident: Option<&str>,
        host: Option<&str>,
        updates: &dyn RosterUpdateReceiver,
    ) {
        self.ensure_membership(channel, nick, ident, host, updates);
    }

    /// Split the privilege symbols from the front of a NAMES entry.
    fn split_names_prefix<'a>(&self, entry: &'a str) -> (PrivilegeSet, &'a str) {
        let mut privileges = PrivilegeSet::new();
        let mut rest = entry;

        while let Some(symbol) = rest.chars().next() {
            match self.config.privilege_for_symbol(symbol) {
                Some(privilege) => {
                    privileges.insert(privilege);
                    rest = &rest[symbol.len_utf8()..];
                }
                None => break,
            }
            if !self.config.multi_prefix {
                break;
            }
        }

        (privileges, rest)
    }

    pub(super) fn names_received<S: AsRef<str>>(&mut self, channel: &str, entries: &[S], updates: &dyn RosterUpdateReceiver) {
        for entry in entries {
            let (privileges, mask) = self.split_names_prefix(entry.as_ref().trim());

            // userhost-in-names sends nick!ident@host
            let (nick, ident, host) = match mask.split_once('!') {
                Some((nick, userhost)) => match userhost.split_once('@') {
                    Some((ident, host)) => (nick, Some(ident), Some(host)),
                    None => (nick, Some(userhost), None),
                },
                None => (mask, None, None),
            };

            if nick.is_empty() {
                tracing::debug!("Skipping empty NAMES entry {:?} for {}", entry.as_ref(), channel);
                continue;
            }

            let (user_key, channel_key) = self.ensure_membership(channel, nick, ident, host, updates);
            for privilege in privileges.iter() {
                self.grant_privilege(&channel_key, &user_key, privilege, updates);
            }
        }
    }

    pub(super) fn user_left(&mut self, channel: &str, nick: &str, reason: LeaveReason, updates: &dyn RosterUpdateReceiver) {
        match (self.channel_key(channel), self.user_key(nick)) {
            (Some(channel_key), Some(user_key)) => {
                self.remove_membership(&channel_key, &user_key, reason, updates);
            }
            _ => tracing::debug!("Ignoring {:?} of unknown {} from {}", reason, nick, channel),
        }
    }

    /// Remove a user from every channel they're in.
    pub(super) fn remove_from_all_channels(&mut self, user_key: &str, reason: LeaveReason, updates: &dyn RosterUpdateReceiver) {
        // Copy the list first; each removal changes it
        let channels: Vec<String> = match self.users.get(user_key) {
            Some(user) => user.channels.iter().cloned().collect(),
            None => return,
        };

        for channel_key in channels {
            self.remove_membership(&channel_key, user_key, reason, updates);
        }
    }

    pub(super) fn user_quit(&mut self, nick: &str, updates: &dyn RosterUpdateReceiver) {
        match self.user_key(nick) {
            Some(user_key) => self.remove_from_all_channels(&user_key, LeaveReason::Quit, updates),
            None => tracing::debug!("Ignoring quit of unknown {}", nick),
        }
    }
}
