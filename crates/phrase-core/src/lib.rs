pub mod export;
pub mod language;
pub mod stats;
pub mod types;
