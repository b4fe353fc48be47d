//! Repository layer for the player's cumulative progress.
//!
//! Repositories hold data that outlives a single game:
//! - Lifetime stats folded from every finished game
//! - Earned achievement ids

mod error;
mod file;
mod memory;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use file::FileStatsRepository;
pub use memory::InMemoryStatsRepo;
pub use traits::StatsRepository;
pub use types::StatsDocument;
