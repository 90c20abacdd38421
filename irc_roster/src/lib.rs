//! Client-side IRC state tracking.
//!
//! Two independent state holders live here: the [`Roster`](roster::Roster), which
//! follows channel membership and privileges from the protocol event stream, and
//! the [`WhoisAggregator`](whois::WhoisAggregator), which folds the numerics of a
//! single WHOIS reply into one [`WhoisSnapshot`](whois::WhoisSnapshot).
//!
//! Neither parses raw protocol lines; both expect to be driven by a dispatcher
//! that has already split a message into its command, source and parameters.

pub mod prelude;

pub mod casemap;
pub mod config;
pub mod privilege;

pub mod roster;
pub mod whois;

pub mod utils;
