#![allow(clippy::module_inception)]
#![allow(clippy::new_without_default)]

/// Defines the state records held by a [`Roster`]
pub mod state {
    mod user;
    mod channel;

    pub use user::*;
    pub use channel::*;
}

pub mod errors;

pub mod event;

mod name_index;

mod roster;
pub use roster::*;

pub mod update;
pub use update::RosterUpdateReceiver;

mod update_receiver;
pub use update_receiver::SavedUpdateReceiver;
