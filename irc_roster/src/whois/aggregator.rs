use super::*;
use crate::casemap::CaseMapping;

/// Where the aggregator is in a query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WhoisState {
    Idle,
    Collecting,
}

/// What a call into the aggregator achieved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WhoisOutcome {
    /// The reply was taken into the query in progress
    Pending,
    /// The query finished with enough information
    Completed(WhoisSnapshot),
    /// The query finished without its basic identity, and was dropped
    Discarded,
    /// The reply didn't belong to the query in progress, or there was none
    Ignored,
}

/// Collects the replies to one WHOIS query at a time.
///
/// There is no explicit cancel; starting a new query drops the old one.
#[derive(Debug, Clone, Default)]
pub struct WhoisAggregator {
    pending: Option<WhoisBuilder>,
    casemapping: CaseMapping,
}

impl WhoisAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_casemapping(casemapping: CaseMapping) -> Self {
        Self {
            pending: None,
            casemapping,
        }
    }

    pub fn state(&self) -> WhoisState {
        match self.pending {
            Some(_) => WhoisState::Collecting,
            None => WhoisState::Idle,
        }
    }

    /// The query being collected, if any
    pub fn pending(&self) -> Option<&WhoisBuilder> {
        self.pending.as_ref()
    }

    fn pending_for(&mut self, target: &str) -> Option<&mut WhoisBuilder> {
        let casemapping = self.casemapping;
        self.pending.as_mut().filter(|b| casemapping.equals(&b.target, target))
    }

    /// Start a query from its basic identity line.
    pub fn begin_query(&mut self, server: &str, target: &str, user: &str, host: &str, realname: &str) {
        if let Some(previous) = &self.pending {
            tracing::debug!("Dropping unfinished WHOIS for {}", previous.target);
        }
        self.pending = Some(WhoisBuilder::new(server, target, user, host, realname));
    }

    /// Add a fragment to the query for `target`. Returns false, changing
    /// nothing, if that isn't the query in progress.
    pub fn apply_fragment(&mut self, target: &str, fragment: WhoisFragment) -> bool {
        match self.pending_for(target) {
            Some(builder) => {
                builder.apply(fragment);
                true
            }
            None => {
                tracing::debug!("Dropping WHOIS fragment for {}: {:?}", target, fragment);
                false
            }
        }
    }

    /// Finish the query for `target`.
    pub fn end_query(&mut self, target: &str) -> WhoisOutcome {
        if self.pending_for(target).is_none() {
            tracing::debug!("Ignoring end of WHOIS for {}", target);
            return WhoisOutcome::Ignored;
        }

        match self.pending.take() {
            Some(builder) if builder.has_basic_info() => WhoisOutcome::Completed(WhoisSnapshot::new(builder)),
            Some(builder) => {
                tracing::debug!("Discarding incomplete WHOIS for {}", builder.target);
                WhoisOutcome::Discarded
            }
            None => WhoisOutcome::Ignored,
        }
    }

    /// Feed one parsed reply from `server`.
    pub fn handle(&mut self, server: &str, reply: WhoisReply) -> WhoisOutcome {
        match reply {
            WhoisReply::Begin { target, user, host, realname } => {
                self.begin_query(server, &target, &user, &host, &realname);
                WhoisOutcome::Pending
            }
            WhoisReply::Fragment { target, fragment } => {
                if self.apply_fragment(&target, fragment) {
                    WhoisOutcome::Pending
                } else {
                    WhoisOutcome::Ignored
                }
            }
            WhoisReply::End { target } => self.end_query(&target),
        }
    }
}
