//! Task lifecycle store: dispatch and completion of field work.
//!
//! Shared between the admin views (which create tasks) and the official
//! views (which complete them). Every mutation writes a full snapshot to the
//! durable store; a failed write is logged and never blocks the mutation,
//! matching the fire-and-forget persistence of the original shell.

use crate::kv::KvStore;
use chrono::Local;
use pegasus_core::{OfficialTask, TaskInput, TaskStatus};
use std::sync::Arc;

pub const TASKS_KEY: &str = "pegasus_tasks";

pub struct TaskStore {
    kv: Arc<dyn KvStore>,
    tasks: Vec<OfficialTask>,
}

impl TaskStore {
    /// Restore the task list from the persisted snapshot. A corrupt snapshot
    /// degrades to an empty list.
    pub fn new(kv: Arc<dyn KvStore>) -> Self {
        let tasks = match kv.get(TASKS_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!("discarding corrupt task snapshot: {}", e);
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("task snapshot unavailable: {}", e);
                Vec::new()
            }
        };
        Self { kv, tasks }
    }

    /// Create a pending task and prepend it (newest first). Duplicate camera
    /// references are allowed; every call creates a new task. Input is taken
    /// as-is, without validation.
    pub fn create_task(&mut self, input: TaskInput) -> &OfficialTask {
        let task = OfficialTask {
            id: input.id,
            camera_id: input.camera_id,
            camera_name: input.camera_name,
            location: input.location,
            kind: input.kind,
            status: TaskStatus::Pending,
            assigned_at: Local::now().format("%H:%M").to_string(),
            completed_at: None,
        };
        tracing::info!(task = %task.id, camera = %task.camera_id, "task created");
        self.tasks.insert(0, task);
        self.persist();
        &self.tasks[0]
    }

    /// Mark a task completed and stamp the completion time. An unknown id is
    /// a silent no-op, and the first completion wins: a second call does not
    /// overwrite `completed_at`.
    pub fn complete_task(&mut self, task_id: &str) {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == task_id) else {
            return;
        };
        if task.status == TaskStatus::Completed {
            return;
        }
        task.status = TaskStatus::Completed;
        task.completed_at = Some(Local::now().format("%H:%M:%S").to_string());
        tracing::info!(task = %task_id, "task completed");
        self.persist();
    }

    /// Pending tasks in collection order (newest first). Completed tasks stay
    /// in the collection and are filtered here.
    pub fn list_pending(&self) -> Vec<&OfficialTask> {
        self.tasks.iter().filter(|t| t.is_pending()).collect()
    }

    /// Every task ever created this session, newest first
    pub fn all(&self) -> &[OfficialTask] {
        &self.tasks
    }

    fn persist(&self) {
        let raw = match serde_json::to_string(&self.tasks) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("failed to encode task snapshot: {}", e);
                return;
            }
        };
        if let Err(e) = self.kv.set(TASKS_KEY, &raw) {
            tracing::warn!("failed to persist task snapshot: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryKv;
    use pegasus_core::{GeoPoint, TaskKind};

    fn input(id: &str) -> TaskInput {
        TaskInput {
            id: id.to_string(),
            camera_id: "CAM-001".to_string(),
            camera_name: "MG Road Junction".to_string(),
            location: GeoPoint { lat: 12.9750, lng: 77.6060 },
            kind: TaskKind::Repair,
        }
    }

    fn store() -> TaskStore {
        TaskStore::new(Arc::new(MemoryKv::new()))
    }

    #[test]
    fn test_every_create_adds_a_pending_task() {
        let mut store = store();
        for i in 0..5 {
            store.create_task(input(&format!("TASK-{}", i)));
        }
        assert_eq!(store.all().len(), 5);
        assert!(store.all().iter().all(|t| t.status == TaskStatus::Pending));
    }

    #[test]
    fn test_duplicate_camera_creates_new_task() {
        let mut store = store();
        store.create_task(input("TASK-1"));
        store.create_task(input("TASK-2"));
        assert_eq!(store.all().len(), 2);
    }

    #[test]
    fn test_newest_task_first() {
        let mut store = store();
        store.create_task(input("TASK-1"));
        store.create_task(input("TASK-2"));
        let pending = store.list_pending();
        assert_eq!(pending[0].id, "TASK-2");
        assert_eq!(pending[1].id, "TASK-1");
    }

    #[test]
    fn test_complete_removes_from_pending_but_not_collection() {
        let mut store = store();
        store.create_task(input("TASK-1"));
        store.complete_task("TASK-1");

        assert!(store.list_pending().is_empty());
        assert_eq!(store.all().len(), 1);
        assert_eq!(store.all()[0].status, TaskStatus::Completed);
        assert!(store.all()[0].completed_at.is_some());
    }

    #[test]
    fn test_complete_unknown_id_is_noop() {
        let mut store = store();
        store.create_task(input("TASK-1"));
        store.complete_task("TASK-404");
        assert_eq!(store.list_pending().len(), 1);
    }

    #[test]
    fn test_first_completion_wins() {
        let mut store = store();
        store.create_task(input("TASK-1"));
        store.complete_task("TASK-1");
        let first = store.all()[0].completed_at.clone();

        store.complete_task("TASK-1");
        assert_eq!(store.all()[0].completed_at, first);
    }

    #[test]
    fn test_list_pending_never_returns_completed() {
        let mut store = store();
        for i in 0..4 {
            store.create_task(input(&format!("TASK-{}", i)));
        }
        store.complete_task("TASK-1");
        store.complete_task("TASK-3");

        let pending = store.list_pending();
        assert_eq!(pending.len(), 2);
        assert!(pending.iter().all(|t| t.status == TaskStatus::Pending));
    }

    #[test]
    fn test_snapshot_restored_across_instances() {
        let kv = Arc::new(MemoryKv::new());

        let mut store = TaskStore::new(kv.clone());
        store.create_task(input("TASK-1"));
        store.complete_task("TASK-1");

        let restored = TaskStore::new(kv);
        assert_eq!(restored.all().len(), 1);
        assert_eq!(restored.all()[0].status, TaskStatus::Completed);
    }

    #[test]
    fn test_corrupt_snapshot_degrades_to_empty() {
        let kv = Arc::new(MemoryKv::new());
        kv.set(TASKS_KEY, "][").unwrap();

        let store = TaskStore::new(kv);
        assert!(store.all().is_empty());
    }
}
