pub mod file;
pub mod memory;
pub mod plan_book;

use crate::errors::Result;
use crate::types::{PlanId, SavedPlan};

pub use file::FileStore;
pub use memory::MemoryStore;
pub use plan_book::PlanBook;

/// string key-value storage, each value replaced wholesale on write
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// returns whether a value was present
    fn delete(&mut self, key: &str) -> Result<bool>;
}

/// persisted collection of saved plans
pub trait PlanRepository {
    fn append(&mut self, plan: SavedPlan) -> Result<()>;

    /// remove the plan with this id, returns whether one was removed
    fn remove(&mut self, id: PlanId) -> Result<bool>;

    /// all plans in the order they were saved
    fn list_all(&self) -> Result<Vec<SavedPlan>>;
}
