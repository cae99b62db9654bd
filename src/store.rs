use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::models::{Note, Task, TaskId};

/// Everything the screens are allowed to do with the session's notes and tasks.
pub trait NoteBook {
    fn notes(&self) -> &[Note];
    fn tasks(&self) -> &[Task];

    fn add_note(&mut self, note: Note);
    /// Fails without mutating when `task.id` is already in use.
    fn add_task(&mut self, task: Task) -> Result<()>;
    /// Fails without mutating when `index` is past the end.
    fn edit_note(&mut self, index: usize, note: Note) -> Result<()>;
    /// Returns `false` when no task has `id`.
    fn edit_task(&mut self, id: TaskId, task: Task) -> bool;
    fn delete_note(&mut self, index: usize) -> Option<Note>;
    fn delete_task(&mut self, id: TaskId) -> Option<Task>;
    /// Returns the new completion state, or `None` when no task has `id`.
    fn toggle_task_completion(&mut self, id: TaskId) -> Option<bool>;

    /// `now` unless a task already uses it, otherwise one past the largest id.
    fn next_task_id(&self, now: TaskId) -> TaskId {
        let tasks = self.tasks();
        if tasks.iter().any(|t| t.id == now) {
            tasks.iter().map(|t| t.id).max().unwrap_or(now) + 1
        } else {
            now
        }
    }
}

#[derive(Debug, Default)]
pub struct Store {
    notes: Vec<Note>,
    tasks: Vec<Task>,
}

impl Store {
    pub fn new() -> Store {
        Store::default()
    }
}

impl NoteBook for Store {
    fn notes(&self) -> &[Note] {
        &self.notes
    }

    fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    fn add_note(&mut self, note: Note) {
        self.notes.push(note);
        info!(index = self.notes.len() - 1, "note added");
    }

    fn add_task(&mut self, task: Task) -> Result<()> {
        if self.tasks.iter().any(|t| t.id == task.id) {
            return Err(Error::DuplicateTaskId(task.id));
        }
        info!(id = task.id, "task added");
        self.tasks.push(task);
        Ok(())
    }

    fn edit_note(&mut self, index: usize, note: Note) -> Result<()> {
        let len = self.notes.len();
        let slot = self
            .notes
            .get_mut(index)
            .ok_or(Error::NoteIndexOutOfRange { index, len })?;
        *slot = note;
        info!(index, "note updated");
        Ok(())
    }

    fn edit_task(&mut self, id: TaskId, task: Task) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(slot) => {
                *slot = task;
                info!(id, "task updated");
                true
            }
            None => {
                debug!(id, "edit ignored, no such task");
                false
            }
        }
    }

    fn delete_note(&mut self, index: usize) -> Option<Note> {
        if index >= self.notes.len() {
            return None;
        }
        info!(index, "note deleted");
        Some(self.notes.remove(index))
    }

    fn delete_task(&mut self, id: TaskId) -> Option<Task> {
        let position = self.tasks.iter().position(|t| t.id == id)?;
        info!(id, "task deleted");
        Some(self.tasks.remove(position))
    }

    fn toggle_task_completion(&mut self, id: TaskId) -> Option<bool> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        task.completed = !task.completed;
        debug!(id, completed = task.completed, "task toggled");
        Some(task.completed)
    }
}
