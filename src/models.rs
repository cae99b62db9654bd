use ratatui::style::{Color, Modifier, Style};

pub type TaskId = i64;

pub const PALETTE: [&str; 10] = [
    "#FFFFFF", "#FFCDD2", "#F8BBD0", "#E1BEE7", "#D1C4E9", "#C5CAE9", "#BBDEFB", "#B3E5FC",
    "#B2DFDB", "#C8E6C9",
];

/// Swatches per row in the color picker.
pub const PALETTE_COLUMNS: usize = 5;

pub const DEFAULT_COLOR: &str = PALETTE[0];

/// Position of `color` in [`PALETTE`], ignoring hex digit case.
pub fn palette_index(color: &str) -> Option<usize> {
    PALETTE.iter().position(|c| c.eq_ignore_ascii_case(color))
}

/// Terminal color for a `#RRGGBB` swatch. Anything unparsable renders white.
pub fn swatch(color: &str) -> Color {
    color.parse().unwrap_or(Color::White)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Note {
    pub title: String,
    pub body: String,
    pub color: String,
}

impl Note {
    pub fn new(title: &str, body: &str, color: &str) -> Note {
        Note {
            title: title.to_string(),
            body: body.to_string(),
            color: color.to_string(),
        }
    }

    /// A note captured from a single line of text, as the home screen's quick-add does.
    pub fn plain(text: &str) -> Note {
        Note::new(text, "", DEFAULT_COLOR)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub title: String,
    pub body: String,
    pub color: String,
    pub completed: bool,
}

impl Task {
    /// A fresh, incomplete task. `text` mirrors the title.
    pub fn new(id: TaskId, title: &str, body: &str, color: &str) -> Task {
        Task {
            id,
            text: title.to_string(),
            title: title.to_string(),
            body: body.to_string(),
            color: color.to_string(),
            completed: false,
        }
    }

    pub fn plain(id: TaskId, text: &str) -> Task {
        Task::new(id, text, "", DEFAULT_COLOR)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    Note,
    Task,
}

impl EntryKind {
    pub fn label(self) -> &'static str {
        match self {
            EntryKind::Note => "Note",
            EntryKind::Task => "Task",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeadingStyle {
    #[default]
    Normal,
    Heading1,
    Heading2,
    Heading3,
    Heading4,
}

impl HeadingStyle {
    /// The styles offered by the heading picker. `Normal` is only the initial state.
    pub const CHOICES: [HeadingStyle; 4] = [
        HeadingStyle::Heading1,
        HeadingStyle::Heading2,
        HeadingStyle::Heading3,
        HeadingStyle::Heading4,
    ];

    pub fn label(self) -> &'static str {
        match self {
            HeadingStyle::Normal => "Normal",
            HeadingStyle::Heading1 => "Heading 1",
            HeadingStyle::Heading2 => "Heading 2",
            HeadingStyle::Heading3 => "Heading 3",
            HeadingStyle::Heading4 => "Heading 4",
        }
    }

    pub fn style(self) -> Style {
        match self {
            HeadingStyle::Heading1 => Style::new().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            HeadingStyle::Heading2 => Style::new().add_modifier(Modifier::BOLD),
            HeadingStyle::Heading3 => Style::new().add_modifier(Modifier::ITALIC),
            HeadingStyle::Heading4 | HeadingStyle::Normal => Style::new(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListFormat {
    #[default]
    None,
    Number,
    Bullet,
}

impl ListFormat {
    pub fn next(self) -> ListFormat {
        match self {
            ListFormat::None => ListFormat::Number,
            ListFormat::Number => ListFormat::Bullet,
            ListFormat::Bullet => ListFormat::None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ListFormat::None => "none",
            ListFormat::Number => "number",
            ListFormat::Bullet => "bullet",
        }
    }

    /// Prefixes every line of `body`. Lines that already carry a prefix get another one.
    pub fn apply(self, body: &str) -> String {
        let lines = body.split('\n');
        match self {
            ListFormat::None => body.to_string(),
            ListFormat::Bullet => lines
                .map(|line| format!("• {line}"))
                .collect::<Vec<_>>()
                .join("\n"),
            ListFormat::Number => lines
                .enumerate()
                .map(|(i, line)| format!("{}. {line}", i + 1))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}
