pub mod aggregator;
pub mod dataset_store;
pub mod recommendation;

// Re-export public types
pub use aggregator::{recommend, recommend_with_threshold, UserHistory};
pub use dataset_store::JsonDatasetStore;
pub use recommendation::{RecommendationResult, RecommendationService};
