//! One simulation run's state, threaded by value through the tick driver.
//! The `Cli` (the fully-specified configuration for this invocation) lives
//! inside `Session`, and every phase of the run reads it from there.

use lastbreach_eval::SpecialNames;
use lastbreach_par::Keywords;
use lastbreach_util::Interner;
use lastbreach_world::{Catalog, Character, World};

use crate::cli::Cli;
use crate::error::RunnerError;
use crate::load;
use crate::rng::Lcg;

pub struct Session {
    pub cli: Cli,
    pub interner: Interner,
    pub names: SpecialNames,
    pub world: World,
    pub catalog: Catalog,
    pub characters: [Character; 2],
    pub rng: Lcg,
}

impl Session {
    pub fn new(cli: Cli) -> Result<Self, RunnerError> {
        let mut interner = Interner::new();
        let kw = Keywords::new(&mut interner);

        let character_a = load::load_character(&cli.character_a, &mut interner, &kw)?;
        let character_b = load::load_character(&cli.character_b, &mut interner, &kw)?;
        let world = load::load_world(cli.world.as_ref(), &mut interner, &kw)?;
        let catalog = load::load_catalog(cli.catalog.as_ref(), &mut interner, &kw)?;

        let names = SpecialNames::new(&mut interner);
        let rng = match cli.seed {
            Some(seed) => Lcg::new(seed),
            None => Lcg::from_clock(),
        };

        Ok(Self {
            cli,
            interner,
            names,
            world,
            catalog,
            characters: [character_a, character_b],
            rng,
        })
    }
}
