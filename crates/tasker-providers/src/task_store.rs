//! In-memory task store

use async_trait::async_trait;
use dashmap::DashMap;

use tasker_domain::constants::TASK_NOT_FOUND;
use tasker_domain::entities::{Task, TaskUpdate};
use tasker_domain::error::{Error, Result};
use tasker_domain::repositories::TaskRepository;

/// In-memory task store backed by a concurrent map
#[derive(Default)]
pub struct InMemoryTaskRepository {
    tasks: DashMap<String, Task>,
}

impl InMemoryTaskRepository {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn list(&self) -> Result<Vec<Task>> {
        Ok(self.tasks.iter().map(|entry| entry.value().clone()).collect())
    }

    async fn get(&self, id: &str) -> Result<Task> {
        self.tasks
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| Error::not_found(TASK_NOT_FOUND))
    }

    async fn create(&self, task: &Task) -> Result<()> {
        if self.tasks.contains_key(&task.id) {
            return Err(Error::conflict(format!("Task '{}' already exists", task.id)));
        }
        self.tasks.insert(task.id.clone(), task.clone());
        Ok(())
    }

    async fn update(&self, id: &str, update: TaskUpdate) -> Result<Task> {
        let mut entry = self
            .tasks
            .get_mut(id)
            .ok_or_else(|| Error::not_found(TASK_NOT_FOUND))?;
        update.apply_to(entry.value_mut());
        Ok(entry.value().clone())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.tasks
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| Error::not_found(TASK_NOT_FOUND))
    }
}
