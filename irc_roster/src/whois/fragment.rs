use serde::{Deserialize, Serialize};

/// One optional piece of a WHOIS reply.
///
/// The basic identity line and the terminal line are not fragments; they
/// start and finish a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WhoisFragment {
    /// RPL_WHOISSERVER
    Server { name: String, info: String },
    /// RPL_WHOISOPERATOR
    Operator,
    /// RPL_WHOISIDLE
    Idle { seconds: u64, signon: Option<i64> },
    /// RPL_WHOISCHANNELS; may be sent more than once
    Channels(Vec<String>),
    /// RPL_AWAY
    Away(String),
    /// RPL_WHOISACCOUNT
    LoggedIn(String),
    /// RPL_WHOISACTUALLY
    ActuallyHost(String),
    /// RPL_WHOISSECURE
    Secure(String),
    /// RPL_WHOISHOST
    Host(String),
    /// RPL_WHOISMODES
    Modes(String),
    /// RPL_WHOISSPECIAL; may be sent more than once
    Special(String),
    /// RPL_WHOISREGNICK
    Registered,
    /// RPL_WHOISHELPOP
    HelpOp,
}
