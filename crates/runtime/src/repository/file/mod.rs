mod stats;

pub use stats::FileStatsRepository;
