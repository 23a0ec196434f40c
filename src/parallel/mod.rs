pub mod batch;
pub mod pool;

pub use batch::{all_matchups, run_matchups, BatchSummary, FailedMatchup};
pub use pool::WorkerPool;
