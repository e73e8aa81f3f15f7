pub mod answer_builder;
pub mod name_matcher;
pub mod snapshot_fetcher;

pub use answer_builder::AnswerBuilder;
pub use name_matcher::{MatchKind, NameMatcher};
pub use snapshot_fetcher::SnapshotFetcher;
