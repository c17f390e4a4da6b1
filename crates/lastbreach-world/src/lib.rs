//! Runtime containers the scheduler and tick driver read and mutate:
//! `Character`, `World` (shelter + inventory + event config), and
//! `Catalog`. These are the lowered counterparts of the parser's
//! `CharacterDecl`/`WorldDecl`/`CatalogDecl` — immutable rule trees stay
//! borrowed from the AST, only vitals/posture/running-task/shelter/
//! inventory state is mutable here.

mod catalog;
mod character;
mod inventory;
mod shelter;
mod vitals;
mod world;

pub use catalog::{Catalog, TaskDef};
pub use character::{Character, RunningTask};
pub use inventory::{Inventory, InventoryItem};
pub use shelter::Shelter;
pub use vitals::Vitals;
pub use world::{EventConfig, World};
