//! Vitals Service
//!
//! Core logic for mean aggregation and percentile ranking, plus the
//! services that orchestrate storage access around it.

pub mod aggregator;
pub mod insight;
pub mod ranker;
pub mod user;
pub mod vital;

pub use aggregator::mean_by_kind;
pub use insight::{InsightService, InsightServiceError};
pub use ranker::percentile_rank;
pub use user::{UserService, UserServiceError};
pub use vital::{VitalService, VitalServiceError};
