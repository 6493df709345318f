//! Entry kind to display color mapping

use termcolor::{Color, ColorSpec};

use crate::tree::EntryKind;

/// Colors used to render entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayColor {
    Green,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl DisplayColor {
    pub fn for_kind(kind: EntryKind) -> Self {
        match kind {
            EntryKind::RegularFile => DisplayColor::Green,
            EntryKind::Directory => DisplayColor::Blue,
            EntryKind::NamedPipe => DisplayColor::Magenta,
            EntryKind::SymbolicLink => DisplayColor::Cyan,
            EntryKind::Other => DisplayColor::White,
        }
    }

    pub fn color(self) -> Color {
        match self {
            DisplayColor::Green => Color::Green,
            DisplayColor::Blue => Color::Blue,
            DisplayColor::Magenta => Color::Magenta,
            DisplayColor::Cyan => Color::Cyan,
            DisplayColor::White => Color::White,
        }
    }

    /// Foreground-only spec. No leading reset; the formatter resets after
    /// each line instead.
    pub fn spec(self) -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(self.color())).set_reset(false);
        spec
    }
}

impl From<EntryKind> for DisplayColor {
    fn from(kind: EntryKind) -> Self {
        DisplayColor::for_kind(kind)
    }
}
