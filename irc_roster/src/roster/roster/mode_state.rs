use super::*;
use crate::privilege::Privilege;

impl Roster {
    pub(super) fn grant_privilege(
        &mut self,
        channel: &str,
        nick: &str,
        privilege: Privilege,
        updates: &dyn RosterUpdateReceiver,
    ) {
        let (user_key, channel_key) = self.ensure_membership(channel, nick, None, None, updates);

        if let Some(user) = self.users.get_mut(&user_key) {
            if user.privileges.entry(channel_key.clone()).or_default().insert(privilege) {
                updates.notify_update(RosterUpdate::PrivilegeChanged {
                    channel: channel_key,
                    nick: user_key,
                    privilege,
                    granted: true,
                });
            }
        }
    }

    fn revoke_privilege(&mut self, channel: &str, nick: &str, privilege: Privilege, updates: &dyn RosterUpdateReceiver) {
        let (Some(user_key), Some(channel_key)) = (self.user_key(nick), self.channel_key(channel)) else {
            tracing::debug!("Ignoring -{} on unknown {} in {}", privilege, nick, channel);
            return;
        };

        let Some(user) = self.users.get_mut(&user_key) else {
            return;
        };
        let Some(held) = user.privileges.get_mut(&channel_key) else {
            return;
        };

        if held.remove(privilege) {
            if held.is_empty() {
                user.privileges.remove(&channel_key);
            }
            updates.notify_update(RosterUpdate::PrivilegeChanged {
                channel: channel_key,
                nick: user_key,
                privilege,
                granted: false,
            });
        }
    }

    /// Apply the privilege changes in a channel MODE line.
    ///
    /// Each privilege letter takes the next unused parameter as its target, or
    /// the last parameter once they run out. Any other letter uses up one
    /// parameter if there is one left; which letters really take a parameter
    /// depends on the server, and this errs on the side of consuming.
    pub(super) fn channel_mode_change<S: AsRef<str>>(
        &mut self,
        target: &str,
        modes: &str,
        params: &[S],
        updates: &dyn RosterUpdateReceiver,
    ) {
        if !self.config.is_channel_name(target) {
            tracing::debug!("Ignoring mode change for non-channel {}", target);
            return;
        }

        let mut adding = true;
        let mut next_param = 0;

        for letter in modes.chars() {
            match letter {
                '+' => adding = true,
                '-' => adding = false,
                _ => match self.config.privilege_for_mode(letter) {
                    Some(privilege) => {
                        let nick = match params.get(next_param) {
                            Some(param) => {
                                next_param += 1;
                                param.as_ref()
                            }
                            None => match params.last() {
                                Some(last) => last.as_ref(),
                                None => {
                                    tracing::debug!("No target for mode {} in {}", letter, target);
                                    continue;
                                }
                            },
                        };
                        if nick.is_empty() {
                            continue;
                        }

                        if adding {
                            self.grant_privilege(target, nick, privilege, updates);
                        } else {
                            self.revoke_privilege(target, nick, privilege, updates);
                        }
                    }
                    None => {
                        if next_param < params.len() {
                            next_param += 1;
                        }
                    }
                },
            }
        }
    }
}
