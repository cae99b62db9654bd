use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use tracing::{debug, warn};
use tui_input::{Input, InputRequest, backend::crossterm::EventHandler};

use crate::error::{Error, Result};
use crate::models::{
    EntryKind, HeadingStyle, ListFormat, Note, PALETTE, PALETTE_COLUMNS, Task, TaskId,
    palette_index,
};
use crate::store::NoteBook;

/// Parameters for opening the editor on an existing entry. No request means a blank draft.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditRequest {
    Note { index: usize, note: Note },
    Task { task: Task },
}

impl EditRequest {
    pub fn kind(&self) -> EntryKind {
        match self {
            EditRequest::Note { .. } => EntryKind::Note,
            EditRequest::Task { .. } => EntryKind::Task,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Title,
    Body,
}

/// An open modal picker and the swatch or heading under its cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Picker {
    Color(usize),
    Heading(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    NoteAdded,
    TaskAdded(TaskId),
    NoteUpdated(usize),
    TaskUpdated(TaskId),
}

impl SaveOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            SaveOutcome::NoteAdded => "Note added!",
            SaveOutcome::TaskAdded(_) => "Task added!",
            SaveOutcome::NoteUpdated(_) => "Note updated!",
            SaveOutcome::TaskUpdated(_) => "Task updated!",
        }
    }
}

#[derive(Debug)]
pub enum EditorEvent {
    None,
    Back,
    Saved(SaveOutcome),
    Rejected(Error),
}

/// The add/edit screen's draft. It never owns entries; saving hands the result to a [`NoteBook`].
pub struct Editor {
    request: Option<EditRequest>,
    pub(crate) title: Input,
    pub(crate) body: Input,
    pub(crate) focus: Field,
    pub(crate) color: usize,
    pub(crate) heading: HeadingStyle,
    pub(crate) list_format: ListFormat,
    pub(crate) picker: Option<Picker>,
}

impl Editor {
    pub fn new(request: Option<EditRequest>, default_color: usize) -> Editor {
        let (title, body, color) = match &request {
            Some(EditRequest::Note { note, .. }) => (
                note.title.clone(),
                note.body.clone(),
                palette_index(&note.color).unwrap_or(0),
            ),
            Some(EditRequest::Task { task }) => (
                task.title.clone(),
                task.body.clone(),
                palette_index(&task.color).unwrap_or(0),
            ),
            None => (String::new(), String::new(), default_color.min(PALETTE.len() - 1)),
        };

        Editor {
            request,
            title: Input::new(title),
            body: Input::new(body),
            focus: Field::Title,
            color,
            heading: HeadingStyle::default(),
            list_format: ListFormat::default(),
            picker: None,
        }
    }

    pub fn header(&self) -> String {
        match &self.request {
            Some(request) => format!("Edit {}", request.kind().label()),
            None => "Add Notes & Tasks".to_string(),
        }
    }

    pub fn title(&self) -> &str {
        self.title.value()
    }

    pub fn body(&self) -> &str {
        self.body.value()
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = Input::new(title.to_string());
    }

    pub fn set_body(&mut self, body: &str) {
        self.body = Input::new(body.to_string());
    }

    pub fn color(&self) -> &'static str {
        PALETTE[self.color]
    }

    pub fn heading(&self) -> HeadingStyle {
        self.heading
    }

    pub fn list_format(&self) -> ListFormat {
        self.list_format
    }

    pub fn picker(&self) -> Option<Picker> {
        self.picker
    }

    pub fn handle_event(&mut self, event: &Event, book: &mut dyn NoteBook) -> EditorEvent {
        let Event::Key(key) = event else {
            return EditorEvent::None;
        };
        if key.kind != KeyEventKind::Press {
            return EditorEvent::None;
        }

        if let Some(picker) = self.picker {
            self.handle_picker_key(picker, key.code);
            return EditorEvent::None;
        }

        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('s')) => self.save(EntryKind::Note, book),
            (KeyModifiers::CONTROL, KeyCode::Char('t')) => self.save(EntryKind::Task, book),
            (KeyModifiers::CONTROL, KeyCode::Char('o')) => {
                self.picker = Some(Picker::Color(self.color));
                EditorEvent::None
            }
            (KeyModifiers::CONTROL, KeyCode::Char('e')) => {
                let cursor = HeadingStyle::CHOICES
                    .iter()
                    .position(|h| *h == self.heading)
                    .unwrap_or(0);
                self.picker = Some(Picker::Heading(cursor));
                EditorEvent::None
            }
            (KeyModifiers::CONTROL, KeyCode::Char('l')) => {
                self.toggle_list_format();
                EditorEvent::None
            }
            (_, KeyCode::Esc) => EditorEvent::Back,
            (_, KeyCode::Tab) => {
                self.toggle_focus();
                EditorEvent::None
            }
            (_, KeyCode::Enter) => {
                if self.focus == Field::Body {
                    self.body.handle(InputRequest::InsertChar('\n'));
                }
                EditorEvent::None
            }
            _ => {
                match self.focus {
                    Field::Title => self.title.handle_event(event),
                    Field::Body => self.body.handle_event(event),
                };
                EditorEvent::None
            }
        }
    }

    fn save(&mut self, kind: EntryKind, book: &mut dyn NoteBook) -> EditorEvent {
        match self.handle_save(kind, book) {
            Ok(outcome) => EditorEvent::Saved(outcome),
            Err(err) => EditorEvent::Rejected(err),
        }
    }

    /// Validates the draft and writes it through `book`.
    ///
    /// In edit mode the entry kind comes from the request, so `kind` only matters for new entries.
    /// The draft's title and body are cleared once the write succeeds.
    pub fn handle_save(&mut self, kind: EntryKind, book: &mut dyn NoteBook) -> Result<SaveOutcome> {
        let title = self.title.value().to_string();
        let body = self.body.value().to_string();
        if title.trim().is_empty() || body.trim().is_empty() {
            warn!(kind = kind.label(), "save rejected, title or body is blank");
            return Err(Error::MissingFields);
        }
        let color = self.color();

        let outcome = match &self.request {
            Some(EditRequest::Note { index, .. }) => {
                book.edit_note(*index, Note::new(&title, &body, color))?;
                SaveOutcome::NoteUpdated(*index)
            }
            Some(EditRequest::Task { task }) => {
                let updated = Task {
                    completed: task.completed,
                    ..Task::new(task.id, &title, &body, color)
                };
                if !book.edit_task(task.id, updated) {
                    debug!(id = task.id, "edited task no longer exists, nothing written");
                }
                SaveOutcome::TaskUpdated(task.id)
            }
            None => match kind {
                EntryKind::Note => {
                    book.add_note(Note::new(&title, &body, color));
                    SaveOutcome::NoteAdded
                }
                EntryKind::Task => {
                    let id = book.next_task_id(chrono::Utc::now().timestamp_millis());
                    book.add_task(Task::new(id, &title, &body, color))?;
                    SaveOutcome::TaskAdded(id)
                }
            },
        };

        self.title.reset();
        self.body.reset();
        Ok(outcome)
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Field::Title => Field::Body,
            Field::Body => Field::Title,
        };
    }

    /// Advances the list mode and, unless it lands on `None`, reprefixes the current body.
    pub fn toggle_list_format(&mut self) {
        self.list_format = self.list_format.next();
        debug!(mode = self.list_format.label(), "list format changed");
        if self.list_format != ListFormat::None {
            let formatted = self.list_format.apply(self.body.value());
            self.body = Input::new(formatted);
        }
    }

    fn handle_picker_key(&mut self, picker: Picker, code: KeyCode) {
        match picker {
            Picker::Color(i) => match code {
                KeyCode::Left | KeyCode::Char('h') => {
                    self.picker = Some(Picker::Color(i.saturating_sub(1)));
                }
                KeyCode::Right | KeyCode::Char('l') => {
                    self.picker = Some(Picker::Color((i + 1).min(PALETTE.len() - 1)));
                }
                KeyCode::Up | KeyCode::Char('k') if i >= PALETTE_COLUMNS => {
                    self.picker = Some(Picker::Color(i - PALETTE_COLUMNS));
                }
                KeyCode::Down | KeyCode::Char('j') if i + PALETTE_COLUMNS < PALETTE.len() => {
                    self.picker = Some(Picker::Color(i + PALETTE_COLUMNS));
                }
                KeyCode::Enter => {
                    self.color = i;
                    self.picker = None;
                }
                KeyCode::Esc => self.picker = None,
                _ => {}
            },
            Picker::Heading(i) => match code {
                KeyCode::Up | KeyCode::Char('k') => {
                    self.picker = Some(Picker::Heading(i.saturating_sub(1)));
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    let last = HeadingStyle::CHOICES.len() - 1;
                    self.picker = Some(Picker::Heading((i + 1).min(last)));
                }
                KeyCode::Enter => {
                    self.heading = HeadingStyle::CHOICES[i];
                    self.picker = None;
                }
                KeyCode::Esc => self.picker = None,
                _ => {}
            },
        }
    }

    /// Line and column of the body cursor, counted in characters.
    pub(crate) fn body_cursor(&self) -> (usize, usize) {
        let before: String = self.body.value().chars().take(self.body.cursor()).collect();
        let line = before.matches('\n').count();
        let column = before
            .rsplit('\n')
            .next()
            .map_or(0, |last| last.chars().count());
        (line, column)
    }
}
