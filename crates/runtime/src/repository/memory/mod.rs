mod stats;

pub use stats::InMemoryStatsRepo;
