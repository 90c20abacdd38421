use super::*;

impl Roster {
    pub(super) fn self_identity_set(&mut self, nick: &str, ident: &str, host: &str, updates: &dyn RosterUpdateReceiver) {
        // A record may already exist for us from a NAMES reply, possibly in a
        // different case; take it over rather than creating a second one
        if let Some(existing) = self.user_key(nick) {
            if existing != nick {
                self.user_renamed(&existing, nick, updates);
            }
        }

        if let Some(previous) = self.self_nick.take() {
            if previous != nick {
                self.collect_user(&previous, updates);
            }
        }

        self.user_index.insert(nick);
        let user = self
            .users
            .entry(nick.to_string())
            .or_insert_with(|| state::User::new(nick));
        user.ident = ident.to_string();
        user.host = host.to_string();
        self.self_nick = Some(nick.to_string());

        updates.notify_update(RosterUpdate::SelfIdentityChanged { nick: nick.to_string() });
    }

    pub(super) fn self_renamed(&mut self, new_nick: &str, updates: &dyn RosterUpdateReceiver) {
        match self.self_nick.clone() {
            Some(current) => self.user_renamed(&current, new_nick, updates),
            None => tracing::debug!("Ignoring own nick change to {} before identity is known", new_nick),
        }
    }

    pub(super) fn user_renamed(&mut self, old_nick: &str, new_nick: &str, updates: &dyn RosterUpdateReceiver) {
        let Some(old_key) = self.user_key(old_nick) else {
            tracing::debug!("Ignoring nick change of unknown {} to {}", old_nick, new_nick);
            return;
        };
        if old_key == new_nick || new_nick.is_empty() {
            return;
        }

        // Nobody else can hold the new nick. If someone appears to, we missed
        // their quit or rename; that record is stale.
        if let Some(holder) = self.user_key(new_nick).filter(|k| *k != old_key) {
            tracing::warn!("Nick change {} -> {} collides with existing record {}; dropping it", old_key, new_nick, holder);
            self.remove_from_all_channels(&holder, LeaveReason::Superseded, updates);
            if let Some(user) = self.users.remove(&holder) {
                self.user_index.remove(&holder);
                if self.is_self(&holder) {
                    self.self_nick = None;
                }
                updates.notify_update(RosterUpdate::UserForgotten { user });
            }
        }

        let Some(mut user) = self.users.remove(&old_key) else {
            return;
        };
        self.user_index.remove(&old_key);
        user.nick = new_nick.to_string();

        for channel_key in &user.channels {
            match self.channels.get_mut(channel_key) {
                Some(channel) if channel.has_member(&old_key) => {
                    channel.members.remove(&old_key);
                    channel.members.insert(new_nick.to_string());
                }
                _ => tracing::warn!("{} was not listed in {} while renaming to {}", old_key, channel_key, new_nick),
            }
        }
        self.users.insert(new_nick.to_string(), user);
        self.user_index.insert(new_nick);

        let is_self = self.is_self(&old_key);
        if is_self {
            self.self_nick = Some(new_nick.to_string());
        }

        updates.notify_update(RosterUpdate::NickChanged {
            old_nick: old_key,
            new_nick: new_nick.to_string(),
            is_self,
        });
    }

    pub(super) fn user_details(
        &mut self,
        nick: &str,
        ident: Option<&str>,
        host: Option<&str>,
        realname: Option<&str>,
        updates: &dyn RosterUpdateReceiver,
    ) {
        let Some(user) = self.user_key(nick).and_then(|key| self.users.get_mut(&key)) else {
            tracing::debug!("Ignoring details for unknown {}", nick);
            return;
        };

        let details_changed = user.update_details(ident, host);
        let realname_changed = user.update_realname(realname);

        if details_changed || realname_changed {
            updates.notify_update(RosterUpdate::UserDetailsChanged { user: user.clone() });
        }
    }
}
