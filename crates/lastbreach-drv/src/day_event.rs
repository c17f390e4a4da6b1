//! Day-event plan: once per day, before tick 0, decide whether a
//! breach fires this day and at what tick and severity.

use crate::rng::Lcg;
use lastbreach_world::Shelter;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayEvent {
    pub tick: i64,
    pub severity: i64,
}

/// Rolls `breach_chance%`; on a hit, picks a uniform tick in `[6, 21]` and
/// escalates severity per the documented formula, capped at 3.
pub fn plan_day_event(rng: &mut Lcg, breach_chance_pct: f64, shelter: &Shelter) -> Option<DayEvent> {
    if (rng.percent() as f64) >= breach_chance_pct {
        return None;
    }

    let tick = rng.range(6, 22);
    let mut severity = 1;
    if shelter.structure < 70.0 || shelter.signature > 15.0 {
        severity = 2;
    }
    if shelter.structure < 55.0 || shelter.signature > 25.0 {
        severity = 3;
    }
    if severity < 3 && rng.percent() < 25 {
        severity += 1;
    }
    severity = severity.min(3);

    Some(DayEvent { tick, severity })
}
