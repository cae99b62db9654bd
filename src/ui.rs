use ratatui::{
    Frame,
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    symbols::border,
    text::{Line, Span, Text, ToSpan},
    widgets::{Block, Clear, List, ListItem, Paragraph, Wrap},
};

use crate::app::{AlertKind, App, Screen};
use crate::editor::{Editor, Field, Picker};
use crate::home::{Row, Section};
use crate::models::{EntryKind, HeadingStyle, PALETTE, PALETTE_COLUMNS, swatch};
use crate::store::NoteBook;

pub fn draw(app: &App, frame: &mut Frame) {
    match &app.screen {
        Screen::Home => render_home(app, frame),
        Screen::Editor(editor) => render_editor(editor, frame),
    }
    if let Some(prompt) = &app.prompt {
        let title = match prompt.kind {
            EntryKind::Note => "Enter note",
            EntryKind::Task => "Enter task",
        };
        let area = popup_area(frame.area(), 50, 3);
        let width = area.width.max(3) - 3;
        let scroll = prompt.input.visual_scroll(width as usize);
        let input = Paragraph::new(prompt.input.value())
            .scroll((0, scroll as u16))
            .block(Block::bordered().title(title).border_style(Style::new().yellow()));
        frame.render_widget(Clear, area);
        frame.render_widget(input, area);
        let x = prompt.input.visual_cursor().max(scroll) - scroll + 1;
        frame.set_cursor_position((area.x + x as u16, area.y + 1));
    }
    if let Some(alert) = &app.alert {
        let width = (alert.message.chars().count() as u16 + 4).max(30);
        let area = popup_area(frame.area(), width, 4);
        let border_color = match alert.kind {
            AlertKind::Success => Color::Green,
            AlertKind::Error => Color::Red,
        };
        let body = Text::from(vec![
            Line::from(alert.message.as_str()),
            Line::from("press any key".dark_gray()),
        ])
        .centered();
        frame.render_widget(Clear, area);
        frame.render_widget(
            Paragraph::new(body).wrap(Wrap { trim: true }).block(
                Block::bordered()
                    .title(alert.title())
                    .border_set(border::THICK)
                    .border_style(Style::new().fg(border_color)),
            ),
            area,
        );
    }
}

fn render_home(app: &App, frame: &mut Frame) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Percentage(40), Constraint::Min(1)])
        .split(frame.area());

    let inner_list_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Min(1), Constraint::Length(1)])
        .split(layout[0]);

    let block = Block::bordered()
        .title("Notes and Tasks")
        .border_set(border::THICK);

    let store = app.store();
    let rows = app.home.rows(store);
    let items = rows.iter().enumerate().map(|(i, row)| {
        let item = row_item(app, *row);
        if i == app.home.cursor() {
            item.black().on_white()
        } else {
            item
        }
    });

    let help_message = Line::from_iter([
        "q".bold().yellow(),
        " exit, ".to_span(),
        "a".bold().yellow(),
        " add, ".to_span(),
        "N/T".bold().yellow(),
        " quick add, ".to_span(),
        "e".bold().yellow(),
        " edit, ".to_span(),
        "n/t".bold().yellow(),
        " expand, ".to_span(),
        "space".bold().yellow(),
        " done, ".to_span(),
        "d".bold().red(),
        " delete".to_span(),
    ])
    .centered();

    frame.render_widget(help_message, inner_list_layout[1]);
    frame.render_widget(List::new(items).block(block), inner_list_layout[0]);
    if let Some(details) = details(app) {
        frame.render_widget(details, layout[1]);
    }
}

fn row_item(app: &App, row: Row) -> ListItem<'_> {
    let store = app.store();
    match row {
        Row::Header(section) => {
            let (label, count, expanded) = match section {
                Section::Notes => ("Notes", store.notes().len(), app.home.show_notes),
                Section::Tasks => ("Tasks", store.tasks().len(), app.home.show_tasks),
            };
            let arrow = if expanded { "▾" } else { "▸" };
            let line = Line::from(format!("{arrow} {label} ({count})")).bold();
            ListItem::new(match section {
                Section::Notes => line.blue(),
                Section::Tasks => line.magenta(),
            })
        }
        Row::Empty(section) => {
            let text = match section {
                Section::Notes => "  No notes added yet.",
                Section::Tasks => "  No tasks added yet.",
            };
            ListItem::new(Line::from(text.dark_gray().italic()))
        }
        Row::Note(index) => match store.notes().get(index) {
            Some(note) => ListItem::new(Line::from(vec![
                Span::raw("  "),
                "■ ".fg(swatch(&note.color)),
                Span::raw(note.title.as_str()),
            ])),
            None => ListItem::new(""),
        },
        Row::Task(id) => match store.tasks().iter().find(|t| t.id == id) {
            Some(task) => {
                let (check, text) = if task.completed {
                    ("[x] ", task.text.as_str().dark_gray().crossed_out())
                } else {
                    ("[ ] ", Span::raw(task.text.as_str()))
                };
                ListItem::new(Line::from(vec![
                    Span::raw("  "),
                    check.fg(swatch(&task.color)),
                    text,
                ]))
            }
            None => ListItem::new(""),
        },
    }
}

fn details(app: &App) -> Option<Paragraph<'_>> {
    let store = app.store();
    let (kind, title, body, color) = match app.home.selected(store)? {
        Row::Note(index) => {
            let note = store.notes().get(index)?;
            ("Note".to_string(), &note.title, &note.body, &note.color)
        }
        Row::Task(id) => {
            let task = store.tasks().iter().find(|t| t.id == id)?;
            let status = if task.completed { "done" } else { "open" };
            (format!("Task ({status})"), &task.title, &task.body, &task.color)
        }
        _ => return None,
    };

    let mut lines = vec![Line::from(title.as_str()).bold(), Line::default()];
    lines.extend(body.lines().map(Line::from));
    Some(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .style(Style::new().fg(Color::Black).bg(swatch(color)))
            .block(Block::bordered().title(kind)),
    )
}

fn render_editor(editor: &Editor, frame: &mut Frame) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let color = swatch(editor.color());
    let field_style = Style::new().fg(Color::Black).bg(color);

    let header = Line::from(editor.header()).bold().centered();
    let toolbar = Line::from_iter([
        "Heading: ".dark_gray(),
        Span::raw(editor.heading().label()),
        "  Color: ".dark_gray(),
        "■■ ".fg(color),
        Span::raw(editor.color()),
        "  List: ".dark_gray(),
        Span::raw(editor.list_format().label()),
    ]);

    let help_message = Line::from_iter([
        "Esc".bold().yellow(),
        " back, ".to_span(),
        "Ctrl+S".bold().yellow(),
        " save note, ".to_span(),
        "Ctrl+T".bold().yellow(),
        " save task, ".to_span(),
        "Tab".bold().yellow(),
        " focus, ".to_span(),
        "Ctrl+E".bold().yellow(),
        " heading, ".to_span(),
        "Ctrl+O".bold().yellow(),
        " color, ".to_span(),
        "Ctrl+L".bold().yellow(),
        " list".to_span(),
    ])
    .centered();

    let mut title_input = Paragraph::new(editor.title()).style(field_style.bold());
    let mut body_input =
        Paragraph::new(editor.body()).style(field_style.patch(editor.heading().style()));
    let mut title_block = Block::bordered().title("Title");
    let mut body_block = Block::bordered().title("Body");

    match editor.focus {
        Field::Title => {
            title_block = title_block.border_style(Style::new().yellow());
            let area = layout[2];
            let width = area.width.max(3) - 3;
            let scroll = editor.title.visual_scroll(width as usize);
            title_input = title_input.scroll((0, scroll as u16));

            let x = editor.title.visual_cursor().max(scroll) - scroll + 1;
            frame.set_cursor_position((area.x + x as u16, area.y + 1));
        }
        Field::Body => {
            body_block = body_block.border_style(Style::new().yellow());
            let area = layout[3];
            let visible = area.height.saturating_sub(2).max(1) as usize;
            let (line, column) = editor.body_cursor();
            let scroll = line.saturating_sub(visible - 1);
            body_input = body_input.scroll((scroll as u16, 0));

            let x = (column as u16 + 1).min(area.width.saturating_sub(2));
            let y = (line - scroll) as u16 + 1;
            frame.set_cursor_position((area.x + x, area.y + y));
        }
    }

    frame.render_widget(header, layout[0]);
    frame.render_widget(toolbar, layout[1]);
    frame.render_widget(title_input.block(title_block), layout[2]);
    frame.render_widget(body_input.block(body_block), layout[3]);
    frame.render_widget(help_message, layout[4]);

    match editor.picker() {
        Some(Picker::Color(cursor)) => render_color_picker(frame, cursor),
        Some(Picker::Heading(cursor)) => render_heading_picker(frame, cursor, editor.heading()),
        None => {}
    }
}

fn render_color_picker(frame: &mut Frame, cursor: usize) {
    let rows = PALETTE.len().div_ceil(PALETTE_COLUMNS);
    let area = popup_area(frame.area(), (PALETTE_COLUMNS * 6 + 2) as u16, rows as u16 + 2);
    let lines: Vec<Line> = PALETTE
        .chunks(PALETTE_COLUMNS)
        .enumerate()
        .map(|(row, chunk)| {
            Line::from_iter(chunk.iter().enumerate().flat_map(|(column, color)| {
                let selected = row * PALETTE_COLUMNS + column == cursor;
                let (open, close) = if selected { ("[", "]") } else { (" ", " ") };
                [
                    open.bold().yellow(),
                    "████".fg(swatch(color)),
                    close.bold().yellow(),
                ]
            }))
        })
        .collect();

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).block(Block::bordered().title("Select a Color")),
        area,
    );
}

fn render_heading_picker(frame: &mut Frame, cursor: usize, current: HeadingStyle) {
    let area = popup_area(frame.area(), 28, HeadingStyle::CHOICES.len() as u16 + 2);
    let items = HeadingStyle::CHOICES.iter().enumerate().map(|(i, heading)| {
        let mut item = ListItem::new(heading.label());
        if *heading == current {
            item = item.bold();
        }
        if i == cursor {
            item.black().on_white()
        } else {
            item
        }
    });

    frame.render_widget(Clear, area);
    frame.render_widget(
        List::new(items).block(Block::bordered().title("Select a Heading Style")),
        area,
    );
}

fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let vertical = Layout::vertical([Constraint::Length(height)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Length(width)]).flex(Flex::Center);
    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}
