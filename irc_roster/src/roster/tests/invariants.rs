use super::fixtures::*;
use crate::prelude::*;

#[test]
fn membership_stays_symmetric() {
    let mut builder = RosterBuilder::new();
    builder.roster.set_self_identity("me", "i", "h").unwrap();

    builder.join("#a", "me");
    builder.join("#a", "alice");
    builder.join("#b", "alice");
    builder.roster.on_names("#b", &["@bob", "+carol", "alice"]).unwrap();
    builder.assert_consistent();

    builder.part("#a", "alice");
    builder.assert_consistent();
    builder.roster.on_quit("bob").unwrap();
    builder.assert_consistent();
    builder.part("#b", "carol");
    builder.part("#b", "alice");
    builder.assert_consistent();

    assert!(builder.channel("#b").is_none());
    assert!(builder.channel("#a").is_some());
}

#[test]
fn emptied_channel_is_forgotten() {
    let mut builder = RosterBuilder::new();
    builder.join("#c", "alice");
    builder.part("#c", "alice");

    assert!(builder.channel("#c").is_none());
}

#[test]
fn user_without_channels_is_forgotten() {
    let mut builder = RosterBuilder::new();
    builder.join("#a", "alice");
    builder.join("#b", "alice");

    builder.part("#a", "alice");
    assert!(builder.user("alice").is_some());

    builder.part("#b", "alice");
    assert!(builder.user("alice").is_none());
}

#[test]
fn self_is_never_forgotten() {
    let mut builder = RosterBuilder::new();
    builder.roster.set_self_identity("me", "ident", "host").unwrap();
    builder.join("#a", "me");
    builder.part("#a", "me");

    let me = builder.user("me").unwrap();
    assert!(me.channels.is_empty());
    assert_eq!(me.host, "host");
    assert!(builder.channel("#a").is_none());

    builder.roster.on_quit("me").unwrap();
    assert!(builder.user("me").is_some());
}

#[test]
fn privileges_cleared_on_every_exit() {
    let mut builder = RosterBuilder::new();
    builder.join("#a", "alice");
    builder.join("#b", "alice");
    builder.join("#c", "alice");
    builder.join("#c", "bob");
    builder.mode("#a", "+o", &["alice"]);
    builder.mode("#b", "+v", &["alice"]);
    builder.mode("#c", "+h", &["alice"]);

    builder.part("#a", "alice");
    builder.roster.on_kick("#b", "alice").unwrap();
    let alice = builder.user("alice").unwrap();
    assert_eq!(alice.privileges.len(), 1);
    assert!(alice.privileges_in("#c").contains(Privilege::HalfOp));

    // Rejoining starts with a clean slate
    builder.join("#a", "alice");
    assert_eq!(builder.prefix("#a", "alice"), None);
    builder.assert_consistent();
}

#[test]
fn one_record_per_nick() {
    let mut builder = RosterBuilder::new();
    builder.join("#a", "alice");
    builder.join("#b", "Alice");
    builder.roster.on_names("#c", &["ALICE"]).unwrap();

    assert_eq!(builder.roster.users().unwrap().count(), 1);
    assert_eq!(builder.user("alice").unwrap().channels.len(), 3);
    builder.assert_consistent();
}
