use irc_roster::prelude::*;
use std::cell::RefCell;

pub struct RecordingUpdateReceiver {
    pub updates: RefCell<Vec<RosterUpdate>>,
}

impl RecordingUpdateReceiver {
    pub fn new() -> Self {
        Self {
            updates: RefCell::new(Vec::new()),
        }
    }

    pub fn count(&self, pred: impl Fn(&RosterUpdate) -> bool) -> usize {
        self.updates.borrow().iter().filter(|u| pred(u)).count()
    }
}

impl RosterUpdateReceiver for RecordingUpdateReceiver {
    fn notify_update(&self, update: RosterUpdate) {
        self.updates.borrow_mut().push(update);
    }
}
