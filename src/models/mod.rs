pub mod entry;

pub use entry::TimeEntry;
