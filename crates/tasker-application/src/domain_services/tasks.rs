//! Task service interface

use async_trait::async_trait;
use tasker_domain::entities::{NewTask, Task, TaskUpdate};
use tasker_domain::error::Result;

/// Task CRUD
#[async_trait]
pub trait TaskServiceInterface: Send + Sync {
    async fn list(&self) -> Result<Vec<Task>>;

    async fn get(&self, id: &str) -> Result<Task>;

    /// Create a task; the title is required
    async fn create(&self, task: NewTask) -> Result<Task>;

    /// Apply a partial update and return the stored result
    async fn update(&self, id: &str, update: TaskUpdate) -> Result<Task>;

    async fn delete(&self, id: &str) -> Result<()>;
}
