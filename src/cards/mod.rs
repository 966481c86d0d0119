//! Card system: templates, creature instances, and the card pool.
//!
//! ## Key Types
//!
//! - `Card`: Immutable creature template
//! - `Creature`: A summoned, mutable copy of a template in a slot
//! - `CardPool`: Row/column grid of templates offered for summoning
//! - `catalog`: The canonical starter pool

pub mod catalog;
pub mod definition;
pub mod instance;
pub mod pool;

pub use catalog::{standard_pool, starter_cards, OPPONENT_ROW, PLAYER_ROW};
pub use definition::Card;
pub use instance::Creature;
pub use pool::CardPool;
