//! Concrete instantiation of the task-effect engine. The core
//! scheduler/evaluator only ever ask "what is `char.hunger` right now";
//! the numeric deltas that answer "how much does Eating restore it" live
//! here, isolated so a host embedding this crate can swap them out without
//! touching `lastbreach-sched`/`lastbreach-eval`.

use lastbreach_util::{Interner, Symbol};
use lastbreach_world::{Character, Shelter};

/// Passive decay, applied once per tick to every character before task
/// progression.
pub fn apply_passive_decay(character: &mut Character) {
    character.vitals.hunger -= 0.8;
    character.vitals.hydration -= 1.0;
    character.vitals.morale -= 0.1;
    character.vitals.clamp();
}

/// Per-tick fatigue delta, keyed by the currently running task's name (if
/// any).
pub fn apply_fatigue_tick(character: &mut Character, interner: &Interner) {
    let delta = match character.running {
        None => 0.5,
        Some(task) => match interner.resolve(task.name) {
            "Sleeping" => -6.0,
            "Resting" => -3.0,
            _ => 1.0,
        },
    };
    character.vitals.fatigue += delta;
    character.vitals.clamp();
}

/// Invoked once when a running task's remaining ticks reach zero. Only the
/// task names below carry an effect; everything else is a no-op beyond
/// the per-tick decay/fatigue already applied.
pub fn apply_task_effects(character: &mut Character, task_name: Symbol, interner: &Interner) {
    match interner.resolve(task_name) {
        "Sleeping" => character.vitals.morale += 2.0,
        "Resting" => character.vitals.morale += 1.0,
        "Eating" => {
            character.vitals.hunger += 15.0;
            character.vitals.hydration += 8.0;
            character.vitals.morale += 1.0;
        }
        "Defensive shooting" => character.vitals.morale -= 1.0,
        "Defensive combat" => character.vitals.injury += 2.0,
        _ => {}
    }
    character.vitals.clamp();
}

/// Whether a running task counts as "defended" for breach-damage purposes:
/// its name contains the substring `"Defensive"` (case-sensitive).
pub fn is_defending(character: &Character, interner: &Interner) -> bool {
    match character.running {
        None => false,
        Some(task) => interner.resolve(task.name).contains("Defensive"),
    }
}

/// Applied once, the tick a breach event fires. `defended` is true if
/// either agent is running a defensive task.
pub fn apply_breach_damage(shelter: &mut Shelter, breach_level: i64, defended: bool) {
    let loss = if defended {
        if breach_level == 3 {
            1.0
        } else {
            0.5
        }
    } else {
        4.0 * breach_level as f64
    };
    shelter.structure = (shelter.structure - loss).max(0.0);
}

/// Applied once, on the last tick of the day.
pub fn apply_overnight_drift(shelter: &mut Shelter, roll_percent: u32, overnight_chance: f64) {
    if (roll_percent as f64) < overnight_chance {
        shelter.signature += 1.0;
    } else {
        shelter.signature = (shelter.signature - 0.5).max(0.0);
    }
    shelter.clamp();
}

#[cfg(test)]
mod tests {
    use super::*;
    use lastbreach_par::CharacterDecl;
    use lastbreach_world::RunningTask;

    fn character(interner: &mut Interner) -> Character {
        let name = interner.intern("Alice");
        Character::from_decl(
            CharacterDecl {
                name,
                ..Default::default()
            },
            interner,
        )
    }

    #[test]
    fn passive_decay_reduces_hunger_hydration_morale() {
        let mut interner = Interner::new();
        let mut c = character(&mut interner);
        let before = c.vitals;
        apply_passive_decay(&mut c);
        assert!(c.vitals.hunger < before.hunger);
        assert!(c.vitals.hydration < before.hydration);
        assert!(c.vitals.morale < before.morale);
    }

    #[test]
    fn sleeping_bleeds_fatigue_faster_than_resting() {
        let mut interner = Interner::new();
        let mut sleeper = character(&mut interner);
        let mut rester = character(&mut interner);
        let sleeping = interner.intern("Sleeping");
        let resting = interner.intern("Resting");
        sleeper.running = Some(RunningTask {
            name: sleeping,
            station: None,
            ticks_remaining: 4,
            priority: 0.0,
        });
        rester.running = Some(RunningTask {
            name: resting,
            station: None,
            ticks_remaining: 2,
            priority: 0.0,
        });
        apply_fatigue_tick(&mut sleeper, &interner);
        apply_fatigue_tick(&mut rester, &interner);
        assert!(sleeper.vitals.fatigue < rester.vitals.fatigue);
    }

    #[test]
    fn eating_restores_hunger_and_hydration() {
        let mut interner = Interner::new();
        let mut c = character(&mut interner);
        c.vitals.hunger = 40.0;
        c.vitals.hydration = 40.0;
        let eating = interner.intern("Eating");
        apply_task_effects(&mut c, eating, &interner);
        assert_eq!(c.vitals.hunger, 55.0);
        assert_eq!(c.vitals.hydration, 48.0);
    }

    #[test]
    fn undefended_breach_costs_four_times_level() {
        let mut shelter = Shelter::DEFAULT;
        apply_breach_damage(&mut shelter, 2, false);
        assert_eq!(shelter.structure, Shelter::DEFAULT.structure - 8.0);
    }

    #[test]
    fn defended_breach_at_max_severity_costs_one_point_oh() {
        let mut shelter = Shelter::DEFAULT;
        apply_breach_damage(&mut shelter, 3, true);
        assert_eq!(shelter.structure, Shelter::DEFAULT.structure - 1.0);
    }

    #[test]
    fn defended_breach_below_max_severity_costs_half_a_point() {
        let mut shelter = Shelter::DEFAULT;
        apply_breach_damage(&mut shelter, 2, true);
        assert_eq!(shelter.structure, Shelter::DEFAULT.structure - 0.5);
    }

    #[test]
    fn structure_never_goes_below_zero() {
        let mut shelter = Shelter::DEFAULT;
        shelter.structure = 2.0;
        apply_breach_damage(&mut shelter, 3, false);
        assert_eq!(shelter.structure, 0.0);
    }
}
