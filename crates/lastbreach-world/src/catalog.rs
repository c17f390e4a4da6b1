//! Runtime `Catalog`: task-name → (default duration, station), lowered
//! from parsed `taskdef` entries or seeded from the built-in list
//! when no `.lbc` file is supplied.

use indexmap::IndexMap;
use lastbreach_par::CatalogDecl;
use lastbreach_util::{Interner, Symbol};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaskDef {
    pub time_ticks: i64,
    pub station: Option<Symbol>,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tasks: IndexMap<Symbol, TaskDef>,
}

impl Catalog {
    /// Lowers parsed `taskdef` entries. `time_ticks` is already floored to
    /// `1` by the parser already; this only re-asserts the invariant for
    /// catalogs built directly from data rather than parsed text.
    pub fn from_decl(decl: CatalogDecl) -> Self {
        let mut tasks = IndexMap::new();
        for t in decl.tasks {
            let ticks = t.time_ticks.unwrap_or(1).max(1);
            tasks.insert(
                t.name,
                TaskDef {
                    time_ticks: ticks,
                    station: t.station,
                },
            );
        }
        Self { tasks }
    }

    pub fn get(&self, name: Symbol) -> Option<&TaskDef> {
        self.tasks.get(&name)
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Built-in catalog, used when no `--catalog` file is given and
    /// `./catalog.lbc` does not exist. The fuller of the two reference
    /// task lists observed across source copies (43 entries); the shorter
    /// 28-entry list is a strict subset in spirit and is not also carried.
    pub fn default_catalog(interner: &mut Interner) -> Self {
        let mut tasks = IndexMap::new();
        for &(name, ticks, station) in DEFAULT_TASKS {
            let name = interner.intern(name);
            let station = interner.intern(station);
            tasks.insert(
                name,
                TaskDef {
                    time_ticks: ticks,
                    station: Some(station),
                },
            );
        }
        Self { tasks }
    }
}

const DEFAULT_TASKS: &[(&str, i64, &str)] = &[
    ("Reading", 1, "lounge"),
    ("Eating", 1, "kitchen"),
    ("Cooking", 2, "kitchen"),
    ("Meal prep", 2, "kitchen"),
    ("Food preservation", 2, "kitchen"),
    ("Sleeping", 4, "cot"),
    ("Resting", 2, "cot"),
    ("Socializing", 1, "lounge"),
    ("Talking", 1, "lounge"),
    ("Watching", 1, "lounge"),
    ("Computer work", 2, "comms"),
    ("Playing video games", 1, "lounge"),
    ("Playing guitar", 1, "lounge"),
    ("Knitting", 2, "craft"),
    ("Crocheting", 2, "craft"),
    ("Sewing", 2, "craft"),
    ("Crafting", 2, "workshop"),
    ("Painting", 2, "craft"),
    ("Drawing", 1, "craft"),
    ("Gardening", 2, "hydroponics"),
    ("Watering plants", 1, "hydroponics"),
    ("Hydroponics maintenance", 2, "hydroponics"),
    ("Aquarium maintenance", 2, "aquarium"),
    ("Fishing", 3, "outside"),
    ("Fish cleaning", 1, "kitchen"),
    ("Swimming", 2, "outside"),
    ("Scouting outside", 3, "outside"),
    ("Telescope use", 1, "outside"),
    ("Defensive shooting", 3, "defense"),
    ("Defensive combat", 3, "defense"),
    ("Gun smithing", 2, "workshop"),
    ("Electronics repair", 2, "workshop"),
    ("Electrical diagnostics", 2, "power"),
    ("Soldering", 2, "workshop"),
    ("Power management", 2, "power"),
    ("Radio communication", 1, "comms"),
    ("Tending a fire", 2, "heat"),
    ("Heating", 2, "heat"),
    ("General shelter chores", 2, "chores"),
    ("Maintenance chores", 2, "workshop"),
    ("Cleaning", 2, "wash"),
    ("First aid", 1, "med"),
    ("Medical treatment", 2, "med"),
    ("Water collection", 2, "outside"),
    ("Water filtration", 2, "wash"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_has_forty_three_entries() {
        assert_eq!(DEFAULT_TASKS.len(), 43);
    }

    #[test]
    fn default_catalog_durations_meet_the_catalog_floor() {
        let mut interner = Interner::new();
        let cat = Catalog::default_catalog(&mut interner);
        for &(name, _, _) in DEFAULT_TASKS {
            let sym = interner.intern(name);
            assert!(cat.get(sym).unwrap().time_ticks >= 1);
        }
    }

    #[test]
    fn from_decl_floors_zero_duration_to_one() {
        let mut interner = Interner::new();
        let name = interner.intern("Whittling");
        let decl = CatalogDecl {
            tasks: vec![lastbreach_par::TaskDefDecl {
                name,
                time_ticks: Some(0),
                station: None,
            }],
        };
        let cat = Catalog::from_decl(decl);
        assert_eq!(cat.get(name).unwrap().time_ticks, 1);
    }
}
