//! Free-form stdout simulation trace — what a user runs the binary
//! to see. Distinct from the `tracing`-backed operational log, which is
//! gated behind `--verbose`/`RUST_LOG` and goes to stderr.

use lastbreach_sched::Candidate;
use lastbreach_util::Interner;
use lastbreach_world::Character;

pub fn day_header(day: i64) {
    println!("=== Day {day} ===");
}

pub fn breach_announced(tick: i64, severity: i64) {
    println!("  [tick {tick}] breach event incoming (severity {severity})");
}

pub fn action_chosen(interner: &Interner, character: &Character, candidate: Candidate) {
    let name = interner.resolve(character.name);
    match candidate {
        Candidate::Task(t) => {
            let task = interner.resolve(t.name);
            println!("    {name}: {task} ({} ticks, priority {})", t.ticks, t.priority);
        }
        Candidate::Yield => println!("    {name}: idle"),
    }
}

pub fn station_conflict_demoted(interner: &Interner, character: &Character) {
    let name = interner.resolve(character.name);
    println!("    {name}: demoted by station conflict, now idle");
}

pub fn breach_damage(structure_before: f64, structure_after: f64, defended: bool) {
    let mode = if defended { "defended" } else { "undefended" };
    println!(
        "  breach hits shelter ({mode}): structure {structure_before:.1} -> {structure_after:.1}"
    );
}

pub fn overnight_drift(signature_before: f64, signature_after: f64) {
    println!("  overnight drift: signature {signature_before:.1} -> {signature_after:.1}");
}

pub fn day_summary(interner: &Interner, characters: &[Character]) {
    for c in characters {
        let name = interner.resolve(c.name);
        let v = c.vitals;
        println!(
            "  {name}: hunger={:.1} hydration={:.1} fatigue={:.1} morale={:.1} injury={:.1} illness={:.1}",
            v.hunger, v.hydration, v.fatigue, v.morale, v.injury, v.illness
        );
    }
}
