//! JSON-file development store.
//!
//! A flat serde_json document for the CLI and tests, not a persistence
//! format commitment. Writes go through a tempfile rename so a crashed
//! write never truncates the board. Single-process use only, which is
//! what gives the container-scoped critical section its guarantee here:
//! every mutation runs against an in-memory copy and is flushed whole.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::{
    Anchor, Context, ContainerId, Sibling, TaskId, TaskSnapshot, WallClock, generate,
};

use super::{Cached, StoreError, TaskStore};

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct StoreDoc {
    next_id: i64,
    tasks: Vec<TaskSnapshot>,
}

#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    doc: StoreDoc,
    contexts: Option<Cached<Vec<Context>>>,
    lookup_ttl_ms: u64,
}

impl FileStore {
    /// Open the store at `path`, starting empty if the file does not
    /// exist yet.
    pub fn open(path: impl Into<PathBuf>, lookup_ttl_ms: u64) -> Result<Self, StoreError> {
        let path = path.into();
        let doc = match fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => StoreDoc {
                next_id: 1,
                ..StoreDoc::default()
            },
            Err(e) => return Err(e.into()),
        };
        Ok(Self {
            path,
            doc,
            contexts: None,
            lookup_ttl_ms,
        })
    }

    /// Flush the whole document to disk atomically.
    pub fn save(&self) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let bytes = serde_json::to_vec_pretty(&self.doc)?;
        atomic_write(&self.path, &bytes)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Recompute a task's order key relative to its container siblings.
    /// The moving task itself is excluded from the sibling snapshot; its
    /// old key is vacated by the move.
    pub fn move_task(&mut self, id: TaskId, anchor: Anchor) -> Result<TaskSnapshot, StoreError> {
        let task = self.task(id)?;
        let container = task.container.ok_or(StoreError::NoContainer { id })?;
        let siblings: Vec<Sibling> = self
            .doc
            .tasks
            .iter()
            .filter(|t| t.container == Some(container) && t.id != id)
            .map(|t| Sibling::new(t.id, t.order_key))
            .collect();
        let key = generate(&siblings, anchor)?;

        let mut moved = task;
        moved.order_key = Some(key);
        self.update(moved.clone())?;
        Ok(moved)
    }

    fn assign_id(&mut self) -> TaskId {
        let id = TaskId::new(self.doc.next_id);
        self.doc.next_id += 1;
        id
    }

    fn invalidate_lookups(&mut self) {
        self.contexts = None;
    }

    fn scan_contexts(&self) -> Vec<Context> {
        let codes: BTreeSet<Context> = self
            .doc
            .tasks
            .iter()
            .filter(|t| t.is_open())
            .filter_map(|t| t.context)
            .collect();
        codes.into_iter().collect()
    }
}

impl TaskStore for FileStore {
    fn task(&self, id: TaskId) -> Result<TaskSnapshot, StoreError> {
        self.doc
            .tasks
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(StoreError::NotFound { id })
    }

    fn all(&self) -> Result<Vec<TaskSnapshot>, StoreError> {
        Ok(self.doc.tasks.clone())
    }

    fn container(&self, container: ContainerId) -> Result<Vec<TaskSnapshot>, StoreError> {
        Ok(self
            .doc
            .tasks
            .iter()
            .filter(|t| t.container == Some(container))
            .cloned()
            .collect())
    }

    fn create(&mut self, task: TaskSnapshot) -> Result<TaskId, StoreError> {
        let id = self.assign_id();
        let mut task = task;
        task.id = id;

        if let Some(container) = task.container
            && task.order_key.is_none()
        {
            let siblings: Vec<Sibling> = self
                .doc
                .tasks
                .iter()
                .filter(|t| t.container == Some(container))
                .map(|t| Sibling::new(t.id, t.order_key))
                .collect();
            task.order_key = Some(generate(&siblings, Anchor::None)?);
        }

        tracing::debug!(id = id.value(), name = %task.name, "create task");
        self.doc.tasks.push(task);
        self.invalidate_lookups();
        Ok(id)
    }

    fn update(&mut self, task: TaskSnapshot) -> Result<(), StoreError> {
        let id = task.id;
        let slot = self
            .doc
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound { id })?;
        *slot = task;
        self.invalidate_lookups();
        Ok(())
    }

    fn contexts(&mut self, now: WallClock) -> Result<Vec<Context>, StoreError> {
        if let Some(cached) = &self.contexts
            && let Some(value) = cached.get(now)
        {
            return Ok(value.clone());
        }
        let fresh = self.scan_contexts();
        self.contexts = Some(Cached::new(fresh.clone(), now.plus_ms(self.lookup_ttl_ms)));
        Ok(fresh)
    }
}

fn atomic_write(path: &Path, data: &[u8]) -> Result<(), StoreError> {
    let dir = path.parent().filter(|d| !d.as_os_str().is_empty());
    let temp = match dir {
        Some(dir) => tempfile::NamedTempFile::new_in(dir)?,
        None => tempfile::NamedTempFile::new_in(".")?,
    };
    fs::write(temp.path(), data)?;
    temp.persist(path).map_err(|e| StoreError::Io(e.error))?;
    Ok(())
}
