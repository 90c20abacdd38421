use irc_roster::prelude::*;

fn s(v: &str) -> String {
    v.to_string()
}

fn join(channel: &str, nick: &str) -> RosterEvent {
    RosterEvent::Join {
        channel: s(channel),
        nick: s(nick),
        ident: Some(format!("~{}", nick.to_lowercase())),
        host: Some(s("users.example.org")),
    }
}

/// A morning on a small network, as a dispatcher would deliver it
pub fn sample_events() -> Vec<RosterEvent> {
    vec![
        RosterEvent::SelfIdentity {
            nick: s("me"),
            ident: s("~me"),
            host: s("client.example.org"),
        },
        join("#rust", "me"),
        RosterEvent::Names {
            channel: s("#rust"),
            entries: vec![s("@ChanServ"), s("@Alice"), s("+bob"), s("carol"), s("me")],
        },
        join("#irc", "me"),
        RosterEvent::Names {
            channel: s("#irc"),
            entries: vec![s("@ChanServ"), s("alice"), s("dave"), s("me")],
        },
        join("#offtopic", "Bob"),
        RosterEvent::Mode {
            target: s("#rust"),
            modes: s("+h-v"),
            params: vec![s("carol"), s("bob")],
        },
        RosterEvent::Mode {
            target: s("#irc"),
            modes: s("+bo"),
            params: vec![s("*!*@spam.example"), s("dave")],
        },
        RosterEvent::NickChange {
            old_nick: s("alice"),
            new_nick: s("Alice_away"),
        },
        RosterEvent::Kick {
            channel: s("#irc"),
            nick: s("dave"),
        },
        RosterEvent::Quit { nick: s("bob") },
        RosterEvent::Part {
            channel: s("#rust"),
            nick: s("carol"),
        },
        RosterEvent::SelfNickChange { new_nick: s("me_") },
        RosterEvent::UserDetails {
            nick: s("ALICE_AWAY"),
            ident: None,
            host: None,
            realname: Some(s("Alice Liddell")),
        },
    ]
}
