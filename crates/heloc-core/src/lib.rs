pub mod analysis;
pub mod cache;
pub mod error;
pub mod export;
pub mod kpi;
pub mod payment;
pub mod presets;
pub mod schedule;
pub mod types;

pub use error::HelocError;
pub use types::*;

/// Standard result type for all heloc-core operations
pub type HelocResult<T> = Result<T, HelocError>;
