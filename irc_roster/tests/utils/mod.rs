use irc_roster::prelude::*;
use serde::Serialize;

pub mod receiver;

pub fn armed_roster(config: RosterConfig) -> Roster {
    let mut roster = Roster::new(config);
    roster.start();
    roster
}

pub fn stringify<T: Serialize>(obj: &T) -> String {
    serde_json::to_string(obj).unwrap()
}

pub fn nicks_in(roster: &Roster, channel: &str) -> Vec<String> {
    roster
        .find_channel(channel)
        .unwrap()
        .map(|c| c.members.iter().cloned().collect())
        .unwrap_or_default()
}
