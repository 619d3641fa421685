//! Type-safe wrappers and enums for box score data.

pub mod category;
pub mod ids;

pub use category::Category;
pub use ids::{GameId, LineId};
