//! Assembles WHOIS replies into a single record.
//!
//! A WHOIS reply arrives as a run of numerics: 311 with the basic identity,
//! any number of optional lines in whatever order the server likes, then 318.
//! [`WhoisAggregator`] collects them and only decides at 318 whether the
//! result is usable.

mod builder;
pub use builder::*;

mod fragment;
pub use fragment::WhoisFragment;

mod aggregator;
pub use aggregator::*;

mod numeric;
pub use numeric::*;

mod format;
