//! Station conflict arbitration: run by the tick driver after both
//! agents have chosen, not by `choose_action` itself.

use crate::candidate::Candidate;
use lastbreach_util::{Interner, Symbol};

/// Given two idle agents' chosen candidates and their names, demotes the
/// loser to `Yield` if both chose tasks on the same non-null station.
/// Ties go to the lexicographically-smaller agent name.
///
/// Only demotes; never swaps winner/loser into each other's slot, so the
/// caller can match the returned pair back up against agent `a`/`b`
/// positionally.
pub fn resolve_station_conflict(
    interner: &Interner,
    a_name: Symbol,
    a: Candidate,
    b_name: Symbol,
    b: Candidate,
) -> (Candidate, Candidate) {
    let (Candidate::Task(ta), Candidate::Task(tb)) = (a, b) else {
        return (a, b);
    };
    let (Some(sa), Some(sb)) = (ta.station, tb.station) else {
        return (a, b);
    };
    if sa != sb {
        return (a, b);
    }

    let a_wins = if ta.priority != tb.priority {
        ta.priority > tb.priority
    } else {
        interner.resolve(a_name) <= interner.resolve(b_name)
    };

    if a_wins {
        (a, Candidate::Yield)
    } else {
        (Candidate::Yield, b)
    }
}
