//! Collects commonly-used names for convenient import

pub use crate::{
    casemap::CaseMapping,
    config::{ConfigError, PrefixMode, RosterConfig},
    privilege::{Privilege, PrivilegeSet},
    roster::*,
    roster::errors::{RosterError, RosterResult},
    roster::event::RosterEvent,
    roster::update::{LeaveReason, NoOpUpdateReceiver, RosterUpdate, RosterUpdateReceiver},
    whois::*,
};
