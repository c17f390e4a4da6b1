//! Pre-interned special names the evaluator resolves variables and calls
//! against. Interning each literal once and comparing `Symbol`s
//! avoids re-hashing the same strings on every variable lookup, the same
//! tradeoff `lastbreach_par::Keywords` makes for parser keywords.

use lastbreach_util::{Interner, Symbol};

macro_rules! name_set {
    ($name:ident { $($field:ident => $text:literal),* $(,)? }) => {
        pub struct $name {
            $(pub $field: Symbol,)*
        }

        impl $name {
            pub fn new(interner: &mut Interner) -> Self {
                Self {
                    $($field: interner.intern($text),)*
                }
            }
        }
    };
}

name_set!(SpecialNames {
    tick => "tick",
    day => "day",
    breach_level => "breach.level",
    char_hunger => "char.hunger",
    char_hydration => "char.hydration",
    char_fatigue => "char.fatigue",
    char_morale => "char.morale",
    char_injury => "char.injury",
    char_illness => "char.illness",
    shelter_temp_c => "shelter.temp_c",
    shelter_signature => "shelter.signature",
    shelter_power => "shelter.power",
    shelter_water_safe => "shelter.water_safe",
    shelter_water_raw => "shelter.water_raw",
    shelter_structure => "shelter.structure",
    shelter_contamination => "shelter.contamination",
    fn_stock => "stock",
    fn_has => "has",
    fn_cond => "cond",
    fn_event => "event",
    event_breach => "breach",
    event_overnight => "overnight_threat_check",
    defaults_defense_posture => "defaults.defense_posture",
    posture_loud => "loud",
    posture_quiet => "quiet",
});
