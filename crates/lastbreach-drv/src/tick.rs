//! The tick driver: orchestrates decay, in-flight task progression,
//! scheduling, station arbitration, event consequences, and trace output,
//! `DAY_TICKS` ticks at a time, `cli.days` times over.

use lastbreach_sched::{choose_action, resolve_station_conflict, Candidate};
use lastbreach_util::Symbol;
use lastbreach_world::RunningTask;

use crate::day_event::{plan_day_event, DayEvent};
use crate::effects;
use crate::session::Session;
use crate::trace;

pub const DAY_TICKS: i64 = 24;

pub fn run_sim(session: &mut Session) {
    for day in 0..session.cli.days {
        trace::day_header(day);

        let day_event = plan_day_event(
            &mut session.rng,
            session.world.events.breach_chance_pct,
            &session.world.shelter,
        );

        for tick in 0..DAY_TICKS {
            run_tick(session, day, tick, day_event);
        }

        trace::day_summary(&session.interner, &session.characters);
    }
}

fn run_tick(session: &mut Session, day: i64, tick: i64, day_event: Option<DayEvent>) {
    let ev_breach = day_event.map(|e| e.tick == tick).unwrap_or(false);
    let breach_level = if ev_breach {
        day_event.map(|e| e.severity).unwrap_or(0)
    } else {
        0
    };
    let ev_overnight = tick == DAY_TICKS - 1;

    if ev_breach {
        trace::breach_announced(tick, breach_level);
    }

    // Phase 2: passive decay, then fatigue (depends on the *pre-progression*
    // running task, matching "before task progression").
    for c in &mut session.characters {
        effects::apply_passive_decay(c);
    }
    for c in &mut session.characters {
        effects::apply_fatigue_tick(c, &session.interner);
    }

    // Phase 3: in-flight task progression.
    for i in 0..session.characters.len() {
        progress_running_task(session, i);
    }

    // Phase 4: choose_action for each idle agent.
    let mut candidates: [Option<Candidate>; 2] = [None, None];
    let mut postures: [Option<Symbol>; 2] = [None, None];
    for i in 0..2 {
        if session.characters[i].is_idle() {
            let (candidate, posture) = choose_action(
                &session.characters[i],
                &session.world,
                &session.catalog,
                &session.names,
                day,
                tick,
                breach_level,
                ev_breach,
                ev_overnight,
            );
            candidates[i] = Some(candidate);
            postures[i] = posture;
        }
    }

    // Phase 5: station conflict arbitration.
    if let (Some(a), Some(b)) = (candidates[0], candidates[1]) {
        let name_a = session.characters[0].name;
        let name_b = session.characters[1].name;
        let (ra, rb) = resolve_station_conflict(&session.interner, name_a, a, name_b, b);
        if ra != a {
            trace::station_conflict_demoted(&session.interner, &session.characters[0]);
        }
        if rb != b {
            trace::station_conflict_demoted(&session.interner, &session.characters[1]);
        }
        candidates[0] = Some(ra);
        candidates[1] = Some(rb);
    }

    // Phase 6: install chosen tasks (or report idle) on each agent that was
    // up for scheduling this tick; apply any posture change that fired.
    for i in 0..2 {
        if let Some(posture) = postures[i] {
            session.characters[i].defense_posture = posture;
        }
        if let Some(candidate) = candidates[i] {
            if let Candidate::Task(t) = candidate {
                session.characters[i].running = Some(RunningTask {
                    name: t.name,
                    station: t.station,
                    ticks_remaining: t.ticks,
                    priority: t.priority,
                });
            }
            trace::action_chosen(&session.interner, &session.characters[i], candidate);
        }
    }

    // Phase 7: breach damage, unless either agent is currently defending.
    if ev_breach {
        let defended = session
            .characters
            .iter()
            .any(|c| effects::is_defending(c, &session.interner));
        let before = session.world.shelter.structure;
        effects::apply_breach_damage(&mut session.world.shelter, breach_level, defended);
        trace::breach_damage(before, session.world.shelter.structure, defended);
    }

    // Phase 8: overnight signature drift.
    if ev_overnight {
        let roll = session.rng.percent();
        let before = session.world.shelter.signature;
        effects::apply_overnight_drift(
            &mut session.world.shelter,
            roll,
            session.world.events.overnight_chance_pct,
        );
        trace::overnight_drift(before, session.world.shelter.signature);
    }
}

fn progress_running_task(session: &mut Session, i: usize) {
    let Some(mut task) = session.characters[i].running else {
        return;
    };
    task.ticks_remaining -= 1;
    if task.ticks_remaining <= 0 {
        effects::apply_task_effects(&mut session.characters[i], task.name, &session.interner);
        session.characters[i].finish_running_task();
    } else {
        session.characters[i].running = Some(task);
    }
}
