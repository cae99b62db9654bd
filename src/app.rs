use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::{DefaultTerminal, Frame};
use tracing::{info, warn};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::config::Config;
use crate::editor::{EditRequest, Editor, EditorEvent};
use crate::error::{Error, Result};
use crate::home::{HomeAction, HomeView};
use crate::models::{EntryKind, Note, Task};
use crate::store::{NoteBook, Store};
use crate::ui;

pub enum Screen {
    Home,
    Editor(Box<Editor>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

/// A blocking message box. The next key press only dismisses it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

impl Alert {
    pub fn success(message: &str) -> Alert {
        Alert {
            kind: AlertKind::Success,
            message: message.to_string(),
        }
    }

    pub fn error(err: &Error) -> Alert {
        Alert {
            kind: AlertKind::Error,
            message: err.to_string(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self.kind {
            AlertKind::Success => "Success",
            AlertKind::Error => "Error",
        }
    }
}

/// One-line quick-add opened from the home screen.
pub struct Prompt {
    pub kind: EntryKind,
    pub input: Input,
}

pub struct App {
    store: Store,
    pub(crate) home: HomeView,
    pub(crate) screen: Screen,
    pub(crate) alert: Option<Alert>,
    pub(crate) prompt: Option<Prompt>,
    default_color: usize,
    should_quit: bool,
}

impl App {
    pub fn new(config: &Config) -> Result<App> {
        Ok(App {
            store: Store::new(),
            home: HomeView::new(config.home.show_notes, config.home.show_tasks),
            screen: Screen::Home,
            alert: None,
            prompt: None,
            default_color: config.default_color_index()?,
            should_quit: false,
        })
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn home(&self) -> &HomeView {
        &self.home
    }

    pub fn editor(&self) -> Option<&Editor> {
        match &self.screen {
            Screen::Editor(editor) => Some(editor.as_ref()),
            Screen::Home => None,
        }
    }

    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    pub fn prompt(&self) -> Option<&Prompt> {
        self.prompt.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> std::io::Result<()> {
        info!("session started");
        while !self.should_quit {
            terminal.draw(|f| self.draw(f))?;
            let event = crossterm::event::read()?;
            self.handle_event(&event);
        }
        info!(
            notes = self.store.notes().len(),
            tasks = self.store.tasks().len(),
            "session ended"
        );
        Ok(())
    }

    pub fn draw(&self, frame: &mut Frame) {
        ui::draw(self, frame);
    }

    pub fn handle_event(&mut self, event: &Event) {
        let Event::Key(key) = event else {
            return;
        };
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.alert.take().is_some() {
            return;
        }

        if self.prompt.is_some() {
            self.handle_prompt(event, key.code);
            return;
        }

        if let Screen::Editor(editor) = &mut self.screen {
            let outcome = editor.handle_event(event, &mut self.store);
            self.handle_editor_event(outcome);
            return;
        }

        match self.home.handle_key(*key, &mut self.store) {
            HomeAction::None => {}
            HomeAction::Quit => self.should_quit = true,
            HomeAction::Open(request) => self.open_editor(request),
            HomeAction::QuickAdd(kind) => {
                self.prompt = Some(Prompt {
                    kind,
                    input: Input::default(),
                });
            }
        }
    }

    fn handle_editor_event(&mut self, event: EditorEvent) {
        match event {
            EditorEvent::None => {}
            EditorEvent::Back => self.close_editor(),
            EditorEvent::Saved(outcome) => {
                self.alert = Some(Alert::success(outcome.message()));
                self.close_editor();
            }
            EditorEvent::Rejected(err) => {
                warn!(error = %err, "save failed");
                self.alert = Some(Alert::error(&err));
            }
        }
    }

    pub fn open_editor(&mut self, request: Option<EditRequest>) {
        self.screen = Screen::Editor(Box::new(Editor::new(request, self.default_color)));
    }

    fn close_editor(&mut self) {
        self.screen = Screen::Home;
        self.home.clamp(&self.store);
    }

    fn handle_prompt(&mut self, event: &Event, code: KeyCode) {
        let Some(prompt) = self.prompt.as_mut() else {
            return;
        };
        match code {
            KeyCode::Esc => self.prompt = None,
            KeyCode::Enter => {
                let text = prompt.input.value().to_string();
                let kind = prompt.kind;
                self.prompt = None;
                if !text.is_empty() {
                    self.quick_add(kind, &text);
                }
            }
            _ => {
                prompt.input.handle_event(event);
            }
        }
    }

    fn quick_add(&mut self, kind: EntryKind, text: &str) {
        match kind {
            EntryKind::Note => self.store.add_note(Note::plain(text)),
            EntryKind::Task => {
                let id = self
                    .store
                    .next_task_id(chrono::Utc::now().timestamp_millis());
                if let Err(err) = self.store.add_task(Task::plain(id, text)) {
                    self.alert = Some(Alert::error(&err));
                }
            }
        }
    }
}
