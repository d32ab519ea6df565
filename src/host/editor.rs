//! The text-editing surface contract.

/// A cursor position within an editing surface.
///
/// `line` and `ch` are zero-based; `ch` is a byte offset within the line,
/// matching how the host surface addresses text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CursorPos {
    /// Zero-based line index.
    pub line: usize,
    /// Zero-based column within the line.
    pub ch: usize,
}

impl CursorPos {
    /// Create a position from line and column.
    pub fn new(line: usize, ch: usize) -> Self {
        Self { line, ch }
    }
}

/// The editing surface supplied by the host for editor commands.
///
/// The plugin only ever calls these five operations; it never inspects
/// document structure beyond the cursor and selection. Implementations
/// clamp out-of-range positions instead of failing.
pub trait Editor {
    /// The currently selected text, or an empty string if nothing is
    /// selected.
    fn selection(&self) -> String;

    /// The current cursor position.
    fn cursor(&self) -> CursorPos;

    /// Move the cursor, clamping to the document. Clears any selection.
    fn set_cursor(&mut self, pos: CursorPos);

    /// Replace the active selection with `text`, leaving the cursor at the
    /// end of the inserted text. With no selection, inserts at the cursor.
    fn replace_selection(&mut self, text: &str);

    /// Insert `text` at `pos` without moving the cursor: an insertion at
    /// the cursor leaves it at the pre-insert position, so callers
    /// reposition it explicitly afterwards.
    fn replace_range(&mut self, text: &str, pos: CursorPos);
}
