//! Task store contract

use async_trait::async_trait;

use crate::entities::{Task, TaskUpdate};
use crate::error::Result;

/// Plain CRUD store of tasks keyed by id
#[async_trait]
pub trait TaskRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Task>>;

    /// `NotFound` when absent
    async fn get(&self, id: &str) -> Result<Task>;

    async fn create(&self, task: &Task) -> Result<()>;

    /// Apply a partial update; `NotFound` when absent
    async fn update(&self, id: &str, update: TaskUpdate) -> Result<Task>;

    /// `NotFound` when absent
    async fn delete(&self, id: &str) -> Result<()>;
}
