pub mod entries;
pub mod pool;

pub use entries::EntryStore;
pub use pool::DbPool;
