pub mod add;
pub mod paid;
pub mod show;
pub mod stats;
