//! Task Service Use Case

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use crate::domain_services::TaskServiceInterface;
use crate::use_cases::deadline::with_deadline;
use tasker_domain::entities::{NewTask, Task, TaskUpdate};
use tasker_domain::error::{Error, Result};
use tasker_domain::repositories::TaskRepository;

/// Task service implementation - thin pass-through to the task store
pub struct TaskServiceImpl {
    tasks: Arc<dyn TaskRepository>,
    store_timeout: Duration,
}

impl TaskServiceImpl {
    /// Create new task service with injected dependencies
    pub fn new(tasks: Arc<dyn TaskRepository>, store_timeout: Duration) -> Self {
        Self {
            tasks,
            store_timeout,
        }
    }
}

#[async_trait]
impl TaskServiceInterface for TaskServiceImpl {
    async fn list(&self) -> Result<Vec<Task>> {
        with_deadline(self.store_timeout, "list", self.tasks.list()).await
    }

    async fn get(&self, id: &str) -> Result<Task> {
        with_deadline(self.store_timeout, "get", self.tasks.get(id)).await
    }

    async fn create(&self, task: NewTask) -> Result<Task> {
        if task.title.trim().is_empty() {
            return Err(Error::validation("title is required"));
        }
        let task = task.into_task();
        with_deadline(self.store_timeout, "create", self.tasks.create(&task)).await?;
        info!(task_id = %task.id, "task created");
        Ok(task)
    }

    async fn update(&self, id: &str, update: TaskUpdate) -> Result<Task> {
        with_deadline(self.store_timeout, "update", self.tasks.update(id, update)).await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        with_deadline(self.store_timeout, "delete", self.tasks.delete(id)).await?;
        info!(task_id = %id, "task deleted");
        Ok(())
    }
}
