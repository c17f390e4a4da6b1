//! The rule-priority scheduler: `choose_action`, the four-source
//! priority auction over event handlers, thresholds, plan blocks, and
//! generic rules, plus the station conflict arbitration the tick driver
//! runs over a pair of idle agents' outcomes.

mod arbitration;
mod candidate;
mod choose_action;
mod exec;
mod selection;

pub use arbitration::resolve_station_conflict;
pub use candidate::{Candidate, TaskCandidate};
pub use choose_action::choose_action;
