//! Drives a whole session through key events, the way a user would.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use notes_tasks::app::AlertKind;
use notes_tasks::home::Row;
use notes_tasks::models::{DEFAULT_COLOR, Note};
use notes_tasks::store::NoteBook;
use notes_tasks::{App, Config};

fn key(app: &mut App, code: KeyCode) {
    app.handle_event(&Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
}

fn ctrl(app: &mut App, c: char) {
    app.handle_event(&Event::Key(KeyEvent::new(
        KeyCode::Char(c),
        KeyModifiers::CONTROL,
    )));
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        key(app, KeyCode::Char(c));
    }
}

fn expanded_app() -> App {
    let mut config = Config::default();
    config.home.show_notes = true;
    config.home.show_tasks = true;
    App::new(&config).unwrap()
}

/// Opens the editor, fills both fields, and saves with `ctrl+save_key`.
fn create(app: &mut App, title: &str, body: &str, save_key: char) {
    key(app, KeyCode::Char('a'));
    type_text(app, title);
    key(app, KeyCode::Tab);
    type_text(app, body);
    ctrl(app, save_key);
}

#[test]
fn create_note_then_task() {
    let mut app = expanded_app();

    create(&mut app, "Groceries", "eggs", 's');
    assert!(app.editor().is_none());
    assert_eq!(app.alert().map(|a| a.message.as_str()), Some("Note added!"));
    key(&mut app, KeyCode::Char('z'));
    assert!(app.alert().is_none());

    create(&mut app, "Buy milk", "2% milk", 't');
    assert_eq!(app.alert().map(|a| a.message.as_str()), Some("Task added!"));
    key(&mut app, KeyCode::Enter);

    assert_eq!(
        app.store().notes(),
        &[Note::new("Groceries", "eggs", DEFAULT_COLOR)]
    );
    let task = &app.store().tasks()[0];
    assert_eq!(task.title, "Buy milk");
    assert_eq!(task.text, "Buy milk");
    assert_eq!(task.body, "2% milk");
    assert_eq!(task.color, "#FFFFFF");
    assert!(!task.completed);
}

#[test]
fn failed_save_keeps_the_draft() {
    let mut app = expanded_app();
    key(&mut app, KeyCode::Char('a'));
    key(&mut app, KeyCode::Tab);
    type_text(&mut app, "hello");
    ctrl(&mut app, 's');

    let alert = app.alert().unwrap();
    assert_eq!(alert.kind, AlertKind::Error);
    assert_eq!(alert.message, "Please fill in both the title and body.");
    assert!(app.store().notes().is_empty());

    // dismissing the alert does not type into the draft
    key(&mut app, KeyCode::Char('x'));
    let editor = app.editor().unwrap();
    assert_eq!(editor.body(), "hello");
    assert_eq!(editor.title(), "");
}

#[test]
fn edit_note_from_home() {
    let mut app = expanded_app();
    create(&mut app, "draft", "text", 's');
    key(&mut app, KeyCode::Esc);

    key(&mut app, KeyCode::Down);
    assert_eq!(app.home().selected(app.store()), Some(Row::Note(0)));
    key(&mut app, KeyCode::Char('e'));
    assert_eq!(app.editor().unwrap().header(), "Edit Note");

    type_text(&mut app, "!");
    ctrl(&mut app, 't');
    assert_eq!(app.alert().map(|a| a.message.as_str()), Some("Note updated!"));
    assert_eq!(app.store().notes()[0].title, "draft!");
    assert!(app.store().tasks().is_empty());
}

#[test]
fn toggle_and_delete_tasks_from_home() {
    let mut app = expanded_app();
    create(&mut app, "one", "body", 't');
    key(&mut app, KeyCode::Esc);

    // rows: notes header, notes placeholder, tasks header, task
    key(&mut app, KeyCode::Up);
    assert!(matches!(app.home().selected(app.store()), Some(Row::Task(_))));

    key(&mut app, KeyCode::Char(' '));
    assert!(app.store().tasks()[0].completed);
    key(&mut app, KeyCode::Char(' '));
    assert!(!app.store().tasks()[0].completed);

    key(&mut app, KeyCode::Char('d'));
    assert!(app.store().tasks().is_empty());
    assert!(app.home().cursor() < app.home().rows(app.store()).len());
}

#[test]
fn quick_add_prompt() {
    let mut app = expanded_app();
    key(&mut app, KeyCode::Char('N'));
    assert!(app.prompt().is_some());
    type_text(&mut app, "remember this");
    key(&mut app, KeyCode::Enter);
    assert!(app.prompt().is_none());
    assert_eq!(app.store().notes(), &[Note::plain("remember this")]);

    key(&mut app, KeyCode::Char('T'));
    key(&mut app, KeyCode::Enter);
    assert!(app.store().tasks().is_empty());

    key(&mut app, KeyCode::Char('T'));
    type_text(&mut app, "call mom");
    key(&mut app, KeyCode::Enter);
    assert_eq!(app.store().tasks()[0].text, "call mom");
    assert!(!app.store().tasks()[0].completed);
}

#[test]
fn list_formatting_through_the_editor() {
    let mut app = expanded_app();
    key(&mut app, KeyCode::Char('a'));
    key(&mut app, KeyCode::Tab);
    type_text(&mut app, "a");
    key(&mut app, KeyCode::Enter);
    type_text(&mut app, "b");

    ctrl(&mut app, 'l');
    assert_eq!(app.editor().unwrap().body(), "1. a\n2. b");
    ctrl(&mut app, 'l');
    assert_eq!(app.editor().unwrap().body(), "• 1. a\n• 2. b");
}

#[test]
fn key_releases_are_ignored_and_q_quits() {
    let mut app = expanded_app();
    let mut release = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
    release.kind = KeyEventKind::Release;
    release.state = KeyEventState::NONE;
    app.handle_event(&Event::Key(release));
    assert!(app.editor().is_none());

    key(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
}

#[test]
fn off_palette_default_color_is_refused() {
    let mut config = Config::default();
    config.editor.default_color = "#123456".to_string();
    assert!(App::new(&config).is_err());
}
