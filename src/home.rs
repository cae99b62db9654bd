use crossterm::event::{KeyCode, KeyEvent};
use tracing::debug;

use crate::editor::EditRequest;
use crate::models::{EntryKind, TaskId};
use crate::store::NoteBook;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Notes,
    Tasks,
}

/// One line of the home list. Notes are addressed by position, tasks by id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Row {
    Header(Section),
    Note(usize),
    Task(TaskId),
    Empty(Section),
}

#[derive(Debug, PartialEq, Eq)]
pub enum HomeAction {
    None,
    Quit,
    Open(Option<EditRequest>),
    QuickAdd(EntryKind),
}

#[derive(Debug, Default)]
pub struct HomeView {
    pub show_notes: bool,
    pub show_tasks: bool,
    cursor: usize,
}

impl HomeView {
    pub fn new(show_notes: bool, show_tasks: bool) -> HomeView {
        HomeView {
            show_notes,
            show_tasks,
            cursor: 0,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn rows(&self, book: &dyn NoteBook) -> Vec<Row> {
        let mut rows = vec![Row::Header(Section::Notes)];
        if self.show_notes {
            if book.notes().is_empty() {
                rows.push(Row::Empty(Section::Notes));
            }
            rows.extend((0..book.notes().len()).map(Row::Note));
        }
        rows.push(Row::Header(Section::Tasks));
        if self.show_tasks {
            if book.tasks().is_empty() {
                rows.push(Row::Empty(Section::Tasks));
            }
            rows.extend(book.tasks().iter().map(|t| Row::Task(t.id)));
        }
        rows
    }

    pub fn selected(&self, book: &dyn NoteBook) -> Option<Row> {
        self.rows(book).get(self.cursor).copied()
    }

    /// Expands or collapses `section` and moves the cursor onto its header.
    pub fn toggle_section(&mut self, section: Section, book: &dyn NoteBook) {
        match section {
            Section::Notes => self.show_notes = !self.show_notes,
            Section::Tasks => self.show_tasks = !self.show_tasks,
        }
        if let Some(header) = self
            .rows(book)
            .iter()
            .position(|row| *row == Row::Header(section))
        {
            self.cursor = header;
        }
    }

    /// Keeps the cursor on a visible row after the list shrinks.
    pub fn clamp(&mut self, book: &dyn NoteBook) {
        let len = self.rows(book).len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    pub fn handle_key(&mut self, key: KeyEvent, book: &mut dyn NoteBook) -> HomeAction {
        let row_count = self.rows(book).len();
        let action = match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return HomeAction::Quit,
            KeyCode::Char('j') | KeyCode::Down => {
                self.cursor = if self.cursor + 1 >= row_count {
                    0
                } else {
                    self.cursor + 1
                };
                HomeAction::None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.cursor = if self.cursor == 0 {
                    row_count.saturating_sub(1)
                } else {
                    self.cursor - 1
                };
                HomeAction::None
            }
            KeyCode::Char('n') => {
                self.toggle_section(Section::Notes, book);
                HomeAction::None
            }
            KeyCode::Char('t') => {
                self.toggle_section(Section::Tasks, book);
                HomeAction::None
            }
            KeyCode::Char('a') => HomeAction::Open(None),
            KeyCode::Char('N') => HomeAction::QuickAdd(EntryKind::Note),
            KeyCode::Char('T') => HomeAction::QuickAdd(EntryKind::Task),
            KeyCode::Enter => match self.selected(book) {
                Some(Row::Header(section)) => {
                    self.toggle_section(section, book);
                    HomeAction::None
                }
                selected => self.edit_request(selected, book),
            },
            KeyCode::Char('e') => self.edit_request(self.selected(book), book),
            KeyCode::Char('d') => {
                match self.selected(book) {
                    Some(Row::Note(index)) => {
                        book.delete_note(index);
                    }
                    Some(Row::Task(id)) => {
                        book.delete_task(id);
                    }
                    _ => {}
                }
                HomeAction::None
            }
            KeyCode::Char(' ') | KeyCode::Char('x') => {
                if let Some(Row::Task(id)) = self.selected(book) {
                    book.toggle_task_completion(id);
                }
                HomeAction::None
            }
            _ => HomeAction::None,
        };
        self.clamp(book);
        action
    }

    fn edit_request(&self, row: Option<Row>, book: &dyn NoteBook) -> HomeAction {
        let request = match row {
            Some(Row::Note(index)) => book.notes().get(index).map(|note| EditRequest::Note {
                index,
                note: note.clone(),
            }),
            Some(Row::Task(id)) => book
                .tasks()
                .iter()
                .find(|t| t.id == id)
                .map(|task| EditRequest::Task { task: task.clone() }),
            _ => None,
        };
        match request {
            Some(request) => {
                debug!(kind = request.kind().label(), "opening editor");
                HomeAction::Open(Some(request))
            }
            None => HomeAction::None,
        }
    }
}
