pub mod benchmark;
pub mod cooldown;
pub mod model;
pub mod search;
pub mod solution;

pub use benchmark::sequence_benchmark;
pub use cooldown::reuse_penalty;
pub use model::{Ability, Combatant};
pub use search::{fight, RotationSearch};
pub use solution::{BestSolutionTracker, Solution};
