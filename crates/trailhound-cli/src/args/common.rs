use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text with charts
    Plain,
    /// Machine-readable JSON of the derived structures
    Json,
}

/// Sort key for the per-dog ranking in `trailhound stats`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RankBy {
    /// Absolute number of successful sessions
    Count,
    /// Success-rate percentage
    Rate,
}

impl From<RankBy> for trailhound_engine::DogRanking {
    fn from(value: RankBy) -> Self {
        match value {
            RankBy::Count => trailhound_engine::DogRanking::SuccessCount,
            RankBy::Rate => trailhound_engine::DogRanking::SuccessRate,
        }
    }
}
