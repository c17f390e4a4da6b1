//! Runtime `World`: shelter stats, inventory, and event probabilities
//! lowered from a parsed `world { ... }` block (or the built-in
//! default when no `.lbw` file is supplied).

use crate::inventory::Inventory;
use crate::shelter::Shelter;
use lastbreach_par::WorldDecl;
use lastbreach_util::Interner;

/// Only the `daily "breach"` chance and the `overnight_threat_check`
/// chance survive parsing — every other `events` entry, and any
/// `when` guard attached to one, is discarded before it reaches here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventConfig {
    pub breach_chance_pct: f64,
    pub overnight_chance_pct: f64,
}

impl EventConfig {
    pub const DEFAULT: EventConfig = EventConfig {
        breach_chance_pct: 15.0,
        overnight_chance_pct: 25.0,
    };
}

impl Default for EventConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone)]
pub struct World {
    pub shelter: Shelter,
    pub inventory: Inventory,
    pub events: EventConfig,
}

impl World {
    pub fn default_world() -> Self {
        Self {
            shelter: Shelter::DEFAULT,
            inventory: Inventory::new(),
            events: EventConfig::DEFAULT,
        }
    }

    pub fn from_decl(decl: WorldDecl, interner: &Interner) -> Self {
        let mut shelter = Shelter::DEFAULT;
        if let Some(v) = decl.shelter.temp_c {
            shelter.temp_c = v;
        }
        if let Some(v) = decl.shelter.signature {
            shelter.signature = v;
        }
        if let Some(v) = decl.shelter.power {
            shelter.power = v;
        }
        if let Some(v) = decl.shelter.water_safe {
            shelter.water_safe = v;
        }
        if let Some(v) = decl.shelter.water_raw {
            shelter.water_raw = v;
        }
        if let Some(v) = decl.shelter.structure {
            shelter.structure = v;
        }
        if let Some(v) = decl.shelter.contamination {
            shelter.contamination = v;
        }
        shelter.clamp();

        let mut inventory = Inventory::new();
        for entry in decl.inventory {
            inventory.add(entry.name, entry.qty, entry.cond.unwrap_or(0.0));
        }

        let mut events = EventConfig::DEFAULT;
        for daily in &decl.daily_events {
            if interner.resolve(daily.name) == "breach" {
                events.breach_chance_pct = daily.chance;
            }
        }
        if let Some(overnight) = &decl.overnight {
            events.overnight_chance_pct = overnight.chance;
        }

        Self {
            shelter,
            inventory,
            events,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lastbreach_par::{DailyEvent, ShelterDecl};

    #[test]
    fn missing_world_file_uses_documented_defaults() {
        let w = World::default_world();
        assert_eq!(w.shelter, Shelter::DEFAULT);
        assert_eq!(w.events, EventConfig::DEFAULT);
    }

    #[test]
    fn only_breach_daily_event_is_retained() {
        let mut interner = Interner::new();
        let breach = interner.intern("breach");
        let looters = interner.intern("looters");
        let decl = WorldDecl {
            shelter: ShelterDecl::default(),
            daily_events: vec![
                DailyEvent {
                    name: looters,
                    chance: 90.0,
                    when: None,
                },
                DailyEvent {
                    name: breach,
                    chance: 42.0,
                    when: None,
                },
            ],
            ..Default::default()
        };
        let world = World::from_decl(decl, &interner);
        assert_eq!(world.events.breach_chance_pct, 42.0);
    }

    #[test]
    fn shelter_overrides_clamp_into_documented_range() {
        let mut interner = Interner::new();
        let decl = WorldDecl {
            shelter: ShelterDecl {
                temp_c: Some(999.0),
                ..Default::default()
            },
            ..Default::default()
        };
        let world = World::from_decl(decl, &interner);
        assert_eq!(world.shelter.temp_c, 60.0);
    }
}
