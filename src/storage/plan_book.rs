use log::{info, warn};

use crate::config::{validate_storage_key, PlannerConfig};
use crate::errors::Result;
use crate::storage::{KeyValueStore, PlanRepository};
use crate::types::{PlanId, SavedPlan};

/// saved plans kept as one json array under a single key
///
/// Every mutation reads the whole document, changes it and writes it back.
#[derive(Debug, Clone)]
pub struct PlanBook<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> PlanBook<S> {
    pub fn new(store: S, key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        validate_storage_key(&key)?;
        Ok(Self { store, key })
    }

    pub fn from_config(store: S, config: &PlannerConfig) -> Result<Self> {
        Self::new(store, config.storage_key.clone())
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    pub fn get(&self, id: PlanId) -> Result<Option<SavedPlan>> {
        Ok(self.load()?.into_iter().find(|p| p.id == id))
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.load()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    fn load(&self) -> Result<Vec<SavedPlan>> {
        match self.store.get(&self.key)? {
            Some(document) => Ok(serde_json::from_str(&document)?),
            None => Ok(Vec::new()),
        }
    }

    fn write(&mut self, plans: &[SavedPlan]) -> Result<()> {
        let document = serde_json::to_string(plans)?;
        self.store.set(&self.key, &document)
    }
}

impl<S: KeyValueStore> PlanRepository for PlanBook<S> {
    fn append(&mut self, plan: SavedPlan) -> Result<()> {
        let mut plans = self.load()?;
        let id = plan.id;
        plans.push(plan);
        self.write(&plans)?;

        info!("saved plan {} under {:?} ({} total)", id, self.key, plans.len());
        Ok(())
    }

    fn remove(&mut self, id: PlanId) -> Result<bool> {
        let mut plans = self.load()?;
        let Some(idx) = plans.iter().position(|p| p.id == id) else {
            warn!("no saved plan {} under {:?}", id, self.key);
            return Ok(false);
        };

        plans.remove(idx);
        self.write(&plans)?;

        info!("deleted plan {} under {:?} ({} left)", id, self.key, plans.len());
        Ok(true)
    }

    fn list_all(&self) -> Result<Vec<SavedPlan>> {
        self.load()
    }
}
