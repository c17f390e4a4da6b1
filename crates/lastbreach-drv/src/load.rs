//! File loading: reads a `.lbp`/`.lbw`/`.lbc` file from disk, lexes and
//! parses it through the shared `Interner`, and lowers the result into the
//! runtime containers `lastbreach-world` operates on.

use std::path::{Path, PathBuf};
use std::rc::Rc;

use lastbreach_lex::Lexer;
use lastbreach_par::Keywords;
use lastbreach_util::Interner;
use lastbreach_world::{Catalog, Character, World};

use crate::error::RunnerError;

fn read_file(path: &Path) -> Result<String, RunnerError> {
    std::fs::read_to_string(path).map_err(|source| RunnerError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn new_parser<'a, 'i, 'k>(
    src: &'a str,
    path: &Path,
    interner: &'i mut Interner,
    kw: &'k Keywords,
) -> Result<lastbreach_par::Parser<'a, 'i, 'k>, RunnerError> {
    let file: Rc<str> = Rc::from(path.display().to_string());
    let lexer = Lexer::new(src, file, interner);
    Ok(lastbreach_par::Parser::new(lexer, kw)?)
}

/// Parses a `character "Name" { ... }` block out of `path` and lowers it
/// into a runtime `Character`.
pub fn load_character(
    path: &Path,
    interner: &mut Interner,
    kw: &Keywords,
) -> Result<Character, RunnerError> {
    let src = read_file(path)?;
    let mut parser = new_parser(&src, path, interner, kw)?;
    let decl = parser
        .parse_character()?
        .ok_or_else(|| RunnerError::MissingCharacter {
            path: path.to_path_buf(),
        })?;
    Ok(Character::from_decl(decl, interner))
}

/// Loads `--world`, falling back to `./world.lbw`, falling back to the
/// built-in default.
pub fn load_world(
    explicit: Option<&PathBuf>,
    interner: &mut Interner,
    kw: &Keywords,
) -> Result<World, RunnerError> {
    let path = match explicit {
        Some(p) => Some(p.clone()),
        None => {
            let default = PathBuf::from("world.lbw");
            if default.exists() {
                Some(default)
            } else {
                None
            }
        }
    };

    match path {
        None => Ok(World::default_world()),
        Some(path) => {
            let src = read_file(&path)?;
            let mut parser = new_parser(&src, &path, interner, kw)?;
            let decl = parser.parse_world()?;
            Ok(World::from_decl(decl, interner))
        }
    }
}

/// Loads `--catalog`, falling back to `./catalog.lbc`, falling back to the
/// built-in default.
pub fn load_catalog(
    explicit: Option<&PathBuf>,
    interner: &mut Interner,
    kw: &Keywords,
) -> Result<Catalog, RunnerError> {
    let path = match explicit {
        Some(p) => Some(p.clone()),
        None => {
            let default = PathBuf::from("catalog.lbc");
            if default.exists() {
                Some(default)
            } else {
                None
            }
        }
    };

    match path {
        None => Ok(Catalog::default_catalog(interner)),
        Some(path) => {
            let src = read_file(&path)?;
            let mut parser = new_parser(&src, &path, interner, kw)?;
            let decl = parser.parse_catalog()?;
            Ok(Catalog::from_decl(decl))
        }
    }
}
