//! Field tables for the basketball play-by-play model.
//!
//! Every table is a `static` built from `const fn` constructors, so the whole
//! vocabulary is fixed at compile time and shared read-only across threads.
//! Class identifiers are local names (`Game`, `Shot`); ranges of datatype
//! properties use `xsd:` names. Turning those into IRIs is the generator's job.

mod event;
mod game;
mod play;

use crate::registry::{FieldRegistry, ModelClass};

pub use event::{END_OF_PERIOD, EVENT, PLAY};
pub use game::{GAME, PLAYER, ROSTER, TEAM};
pub use play::{ENTERS, FOUL, REBOUND, SHOT, TIMEOUT, TURNOVER};

/// Every built-in model class.
pub static CLASSES: [&ModelClass; 13] = [
    &GAME,
    &TEAM,
    &ROSTER,
    &PLAYER,
    &EVENT,
    &PLAY,
    &END_OF_PERIOD,
    &SHOT,
    &REBOUND,
    &FOUL,
    &TURNOVER,
    &TIMEOUT,
    &ENTERS,
];

/// A registry over the built-in classes. The field tables stay borrowed from
/// the statics.
pub fn builtin_registry() -> FieldRegistry {
    CLASSES.iter().map(|class| (*class).clone()).collect()
}
