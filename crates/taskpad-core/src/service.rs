//! Task CRUD and queries over the store's `items` key.

use chrono::Utc;
use tracing::debug;

use crate::backend::StorageBackend;
use crate::record::ItemsKey;
use crate::store::{PersistedStore, StoreError};
use crate::task::{TaskCounts, TaskFilter, TaskId, TaskItem, TaskPatch};

/// Errors from task operations.
///
/// A missing task is a sentinel return (`Ok(None)` / `Ok(false)`), never an
/// error; only blank text and backend write failures reach `Err`.
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    #[error("task text must not be empty")]
    EmptyText,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// The CRUD and query surface the view layer consumes.
///
/// Identifier generation and timestamping live here; callers never construct
/// or mutate [`TaskItem`]s themselves. Every mutation persists the full item
/// sequence through the store.
pub struct TaskService<B: StorageBackend> {
    store: PersistedStore<B>,
}

impl<B: StorageBackend> TaskService<B> {
    pub fn new(store: PersistedStore<B>) -> Self {
        Self { store }
    }

    pub fn with_backend(backend: B) -> Self {
        Self::new(PersistedStore::new(backend))
    }

    /// The underlying store, for the sibling keys (`theme`, `token`).
    pub fn store(&self) -> &PersistedStore<B> {
        &self.store
    }

    /// The stored sequence, verbatim, in insertion order.
    pub fn list(&self) -> Vec<TaskItem> {
        self.store.get::<ItemsKey>()
    }

    /// `list` narrowed to the given filter, order preserved.
    pub fn list_filtered(&self, filter: TaskFilter) -> Vec<TaskItem> {
        let mut items = self.list();
        items.retain(|item| filter.matches(item));
        items
    }

    /// Active/completed totals.
    pub fn counts(&self) -> TaskCounts {
        let mut counts = TaskCounts::default();
        for item in self.list() {
            if item.completed {
                counts.completed += 1;
            } else {
                counts.active += 1;
            }
        }
        counts
    }

    /// Append a new active task and return it. Text is trimmed before
    /// storage; blank text is rejected.
    pub fn add(&self, text: &str) -> Result<TaskItem, TaskError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TaskError::EmptyText);
        }
        let item = TaskItem::new(text);
        let mut items = self.list();
        items.push(item.clone());
        self.store.set::<ItemsKey>(items)?;
        debug!(id = %item.id, "task added");
        Ok(item)
    }

    /// Merge `patch` over the task with `id`, refresh `updated_at`, and
    /// persist in place (order preserved). `id` and `created_at` are never
    /// touched. `Ok(None)` when the task does not exist; nothing is written.
    pub fn update(&self, id: TaskId, patch: TaskPatch) -> Result<Option<TaskItem>, TaskError> {
        let mut items = self.list();
        let Some(slot) = items.iter_mut().find(|item| item.id == id) else {
            return Ok(None);
        };
        if let Some(text) = patch.text {
            let text = text.trim();
            if text.is_empty() {
                return Err(TaskError::EmptyText);
            }
            slot.text = text.to_string();
        }
        if let Some(completed) = patch.completed {
            slot.completed = completed;
        }
        slot.updated_at = Utc::now();
        let updated = slot.clone();
        self.store.set::<ItemsKey>(items)?;
        debug!(id = %id, "task updated");
        Ok(Some(updated))
    }

    /// Drop the task with `id`; removal is terminal. `Ok(false)` when
    /// nothing matched; nothing is written.
    pub fn remove(&self, id: TaskId) -> Result<bool, TaskError> {
        let mut items = self.list();
        let before = items.len();
        items.retain(|item| item.id != id);
        if items.len() == before {
            return Ok(false);
        }
        self.store.set::<ItemsKey>(items)?;
        debug!(id = %id, "task removed");
        Ok(true)
    }

    /// Flip `completed` on the task with `id`. `Ok(None)` when absent.
    pub fn toggle(&self, id: TaskId) -> Result<Option<TaskItem>, TaskError> {
        let Some(current) = self.list().into_iter().find(|item| item.id == id) else {
            return Ok(None);
        };
        self.update(id, TaskPatch::completed(!current.completed))
    }

    /// Drop every completed task, preserving the order of the rest.
    /// Returns how many were removed (0 allowed).
    pub fn clear_completed(&self) -> Result<usize, TaskError> {
        let items = self.list();
        let before = items.len();
        let remaining: Vec<TaskItem> =
            items.into_iter().filter(|item| !item.completed).collect();
        let removed = before - remaining.len();
        self.store.set::<ItemsKey>(remaining)?;
        debug!(removed, "completed tasks cleared");
        Ok(removed)
    }
}
