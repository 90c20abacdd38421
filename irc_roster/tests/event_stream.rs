mod data;
mod utils;

use irc_roster::prelude::*;
use pretty_assertions::assert_eq;
use utils::receiver::RecordingUpdateReceiver;

#[test]
fn sample_stream_builds_expected_roster() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let mut roster = utils::armed_roster(RosterConfig::default());
    let receiver = RecordingUpdateReceiver::new();

    for event in data::sample_events::sample_events() {
        roster.apply(&event, &receiver).unwrap();
    }

    assert_eq!(utils::nicks_in(&roster, "#rust"), vec!["Alice_away", "ChanServ", "me_"]);
    assert_eq!(utils::nicks_in(&roster, "#irc"), vec!["Alice_away", "ChanServ", "me_"]);
    assert!(roster.find_channel("#offtopic").unwrap().is_none());

    assert!(roster.find_user("bob").unwrap().is_none());
    assert!(roster.find_user("carol").unwrap().is_none());
    assert!(roster.find_user("dave").unwrap().is_none());

    let alice = roster.find_user("alice_away").unwrap().unwrap();
    assert_eq!(alice.nick, "Alice_away");
    assert_eq!(alice.realname, "Alice Liddell");
    assert_eq!(roster.get_display_prefix("#rust", "alice_away").unwrap(), Some(Privilege::Operator));
    assert_eq!(roster.get_display_prefix("#irc", "alice_away").unwrap(), None);

    let me = roster.self_user().unwrap().unwrap();
    assert_eq!(me.nick, "me_");
    // The JOIN echo carries the host the server actually sees
    assert_eq!(me.host, "users.example.org");
    assert_eq!(me.ident, "~me");
    assert_eq!(me.channels.len(), 2);

    assert_eq!(
        receiver.count(|u| matches!(u, RosterUpdate::UserLeft { reason: LeaveReason::Quit, .. })),
        2
    );
    assert_eq!(
        receiver.count(|u| matches!(u, RosterUpdate::ChannelForgotten { .. })),
        1
    );
    assert_eq!(
        receiver.count(|u| matches!(u, RosterUpdate::NickChanged { is_self: true, .. })),
        1
    );
}

#[test]
fn replaying_the_stream_is_deterministic() {
    let mut first = utils::armed_roster(RosterConfig::default());
    let mut second = first.clone();
    let receiver = RecordingUpdateReceiver::new();

    for event in data::sample_events::sample_events() {
        first.apply(&event, &receiver).unwrap();
    }
    for event in data::sample_events::sample_events() {
        second.apply(&event, &receiver).unwrap();
    }

    let first: serde_json::Value = serde_json::from_str(&utils::stringify(&first)).unwrap();
    let second: serde_json::Value = serde_json::from_str(&utils::stringify(&second)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn whois_numerics_to_snapshot() {
    let lines: Vec<(u16, Vec<&str>)> = vec![
        (311, vec!["me", "alice", "al", "example.org", "*", "Alice Liddell"]),
        (319, vec!["me", "alice", "@#rust #irc"]),
        (312, vec!["me", "bob", "other.example.org", "Cross-talk"]),
        (312, vec!["me", "alice", "irc.example.org", "Example server"]),
        (330, vec!["me", "alice", "alice", "is logged in as"]),
        (317, vec!["me", "alice", "10", "1700000000", "seconds idle, signon time"]),
        (671, vec!["me", "alice", "is using a secure connection"]),
        (318, vec!["me", "alice", "End of /WHOIS list."]),
    ];

    let mut whois = WhoisAggregator::new();
    let mut snapshots = Vec::new();
    for (code, params) in lines {
        let reply = WhoisReply::parse_code(code, &params).unwrap();
        if let WhoisOutcome::Completed(snapshot) = whois.handle("irc.example.org", reply) {
            snapshots.push(snapshot);
        }
    }

    assert_eq!(snapshots.len(), 1);
    let snapshot = &snapshots[0];
    assert!(snapshot.has_basic_info());
    assert_eq!(snapshot.origin, "irc.example.org");
    assert_eq!(snapshot.server.as_deref(), Some("irc.example.org"));
    assert_eq!(snapshot.account.as_deref(), Some("alice"));
    assert_eq!(snapshot.idle_seconds, Some(10));
    assert_eq!(snapshot.channels, vec!["@#rust".to_string(), "#irc".to_string()]);
    assert_eq!(whois.state(), WhoisState::Idle);
}

#[test]
fn whois_terminal_alone_yields_nothing() {
    let mut whois = WhoisAggregator::new();
    let reply = WhoisReply::parse_code(318, &["me", "alice", "End of /WHOIS list."]).unwrap();
    assert_eq!(whois.handle("irc.example.org", reply), WhoisOutcome::Ignored);
}

#[test]
fn config_from_json5_file() {
    let path = std::env::temp_dir().join(format!("irc_roster_config_{}.json5", std::process::id()));
    std::fs::write(
        &path,
        r#"{
            // server only knows op and voice
            prefixes: [
                { privilege: "operator", mode: "o", symbol: "@" },
                { privilege: "voice", mode: "v", symbol: "+" },
            ],
            casemapping: "ascii",
        }"#,
    )
    .unwrap();

    let config = RosterConfig::load_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(config.casemapping, CaseMapping::Ascii);
    assert_eq!(config.privilege_for_symbol('%'), None);
    assert_eq!(config.chantypes, "#&");

    let mut roster = utils::armed_roster(config);
    roster.on_names("#c", &["%alice", "@bob"]).unwrap();
    assert!(roster.find_user("%alice").unwrap().is_some());
    assert_eq!(roster.get_display_prefix("#c", "bob").unwrap(), Some(Privilege::Operator));
}

#[test]
fn missing_config_file_reports_path() {
    let err = RosterConfig::load_file("/nonexistent/irc_roster.json5").unwrap_err();
    assert!(matches!(err, ConfigError::IoError(_, ref path) if path.ends_with("irc_roster.json5")));
}
