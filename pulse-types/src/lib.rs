pub mod enums;
pub mod models;
pub mod summaries;

pub use enums::*;
pub use models::*;
pub use summaries::*;
