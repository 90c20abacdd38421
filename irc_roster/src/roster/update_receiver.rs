use super::update::*;
use crate::utils::OrLog;

use std::sync::mpsc::{channel, Receiver, Sender};

/// Holds on to updates so they can be handed over later, for instance once a
/// batch of events has been applied.
pub struct SavedUpdateReceiver {
    sender: Sender<RosterUpdate>,
    receiver: Receiver<RosterUpdate>,
}

impl RosterUpdateReceiver for SavedUpdateReceiver {
    fn notify_update(&self, update: RosterUpdate) {
        self.sender.send(update).or_log("saving roster update");
    }
}

impl SavedUpdateReceiver {
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        Self { sender, receiver }
    }

    /// Pass every saved update on to another receiver, in order
    pub fn playback(&mut self, into: &impl RosterUpdateReceiver) {
        while let Ok(saved) = self.receiver.try_recv() {
            into.notify_update(saved);
        }
    }

    /// Take every saved update, in order
    pub fn drain(&mut self) -> Vec<RosterUpdate> {
        self.receiver.try_iter().collect()
    }
}
