//! In-memory text-editing surface.
//!
//! `ScratchBuffer` implements the [`Editor`] contract against a plain
//! line-based buffer. It backs the unit tests and the headless demo
//! harness; a real host supplies its own surface.

use super::editor::{CursorPos, Editor};

/// A multi-line in-memory editing surface.
#[derive(Debug, Clone)]
pub struct ScratchBuffer {
    /// Lines of text content. Always holds at least one line.
    lines: Vec<String>,
    /// Current cursor position.
    cursor: CursorPos,
    /// Active selection in document order, if any.
    selection: Option<(CursorPos, CursorPos)>,
}

impl ScratchBuffer {
    /// Create a buffer with the given content.
    pub fn new(content: &str) -> Self {
        let lines: Vec<String> = if content.is_empty() {
            vec![String::new()]
        } else {
            content.split('\n').map(String::from).collect()
        };

        Self {
            lines,
            cursor: CursorPos::new(0, 0),
            selection: None,
        }
    }

    /// Create an empty buffer.
    pub fn empty() -> Self {
        Self::new("")
    }

    /// Get the current content as a string.
    pub fn content(&self) -> String {
        self.lines.join("\n")
    }

    /// Get the number of lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Select the range between two positions.
    ///
    /// The cursor moves to the selection end, as host surfaces do when a
    /// selection is made.
    pub fn select(&mut self, anchor: CursorPos, head: CursorPos) {
        let anchor = self.clamp(anchor);
        let head = self.clamp(head);
        let (start, end) = if anchor <= head {
            (anchor, head)
        } else {
            (head, anchor)
        };
        self.selection = Some((start, end));
        self.cursor = end;
    }

    /// Drop the active selection without touching the text.
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Clamp a position to the document: line first, then column.
    fn clamp(&self, pos: CursorPos) -> CursorPos {
        let line = pos.line.min(self.lines.len() - 1);
        let ch = pos.ch.min(self.lines[line].len());
        CursorPos::new(line, ch)
    }

    /// Text between two in-bounds positions in document order.
    fn text_in_range(&self, start: CursorPos, end: CursorPos) -> String {
        if start.line == end.line {
            return self.lines[start.line][start.ch..end.ch].to_string();
        }

        let mut text = String::new();
        text.push_str(&self.lines[start.line][start.ch..]);
        for line in &self.lines[start.line + 1..end.line] {
            text.push('\n');
            text.push_str(line);
        }
        text.push('\n');
        text.push_str(&self.lines[end.line][..end.ch]);
        text
    }

    /// Insert text at a position, returning the end of the inserted text.
    fn insert_at(&mut self, pos: CursorPos, text: &str) -> CursorPos {
        let mut segments = text.split('\n');
        let first = segments.next().unwrap_or("");
        let rest: Vec<&str> = segments.collect();

        if rest.is_empty() {
            self.lines[pos.line].insert_str(pos.ch, first);
            return CursorPos::new(pos.line, pos.ch + first.len());
        }

        let tail = self.lines[pos.line].split_off(pos.ch);
        self.lines[pos.line].push_str(first);

        let mut line = pos.line;
        for segment in &rest[..rest.len() - 1] {
            line += 1;
            self.lines.insert(line, segment.to_string());
        }

        let last = rest[rest.len() - 1];
        let end = CursorPos::new(line + 1, last.len());
        self.lines.insert(line + 1, format!("{}{}", last, tail));
        end
    }

    /// Delete the text between two in-bounds positions in document order.
    fn delete_range(&mut self, start: CursorPos, end: CursorPos) {
        if start.line == end.line {
            self.lines[start.line].replace_range(start.ch..end.ch, "");
            return;
        }

        let tail = self.lines[end.line].split_off(end.ch);
        self.lines[start.line].truncate(start.ch);
        self.lines[start.line].push_str(&tail);
        self.lines.drain(start.line + 1..=end.line);
    }
}

impl Default for ScratchBuffer {
    fn default() -> Self {
        Self::empty()
    }
}

impl Editor for ScratchBuffer {
    fn selection(&self) -> String {
        match self.selection {
            Some((start, end)) => self.text_in_range(start, end),
            None => String::new(),
        }
    }

    fn cursor(&self) -> CursorPos {
        self.cursor
    }

    fn set_cursor(&mut self, pos: CursorPos) {
        self.cursor = self.clamp(pos);
        self.selection = None;
    }

    fn replace_selection(&mut self, text: &str) {
        match self.selection.take() {
            Some((start, end)) => {
                self.delete_range(start, end);
                self.cursor = self.insert_at(start, text);
            }
            None => {
                let pos = self.clamp(self.cursor);
                self.cursor = self.insert_at(pos, text);
            }
        }
    }

    fn replace_range(&mut self, text: &str, pos: CursorPos) {
        let pos = self.clamp(pos);
        self.insert_at(pos, text);
        self.selection = None;
        // An insertion at the cursor leaves it at the pre-insert
        // position; callers reposition it explicitly.
        self.cursor = self.clamp(self.cursor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_buffer_has_one_line() {
        let buffer = ScratchBuffer::empty();
        assert_eq!(buffer.line_count(), 1);
        assert_eq!(buffer.content(), "");
        assert_eq!(buffer.cursor(), CursorPos::new(0, 0));
    }

    #[test]
    fn test_new_preserves_trailing_newline() {
        let buffer = ScratchBuffer::new("abc\n");
        assert_eq!(buffer.line_count(), 2);
        assert_eq!(buffer.content(), "abc\n");
    }

    #[test]
    fn test_replace_range_single_line() {
        let mut buffer = ScratchBuffer::new("hello world");
        buffer.replace_range("big ", CursorPos::new(0, 6));
        assert_eq!(buffer.content(), "hello big world");
    }

    #[test]
    fn test_replace_range_keeps_cursor_in_place() {
        let mut buffer = ScratchBuffer::new("hello");
        buffer.set_cursor(CursorPos::new(0, 2));
        buffer.replace_range("##", CursorPos::new(0, 2));
        assert_eq!(buffer.content(), "he##llo");
        assert_eq!(buffer.cursor(), CursorPos::new(0, 2));
    }

    #[test]
    fn test_replace_range_multiline() {
        let mut buffer = ScratchBuffer::new("headtail");
        buffer.replace_range("one\ntwo\nthree", CursorPos::new(0, 4));
        assert_eq!(buffer.content(), "headone\ntwo\nthreetail");
        assert_eq!(buffer.line_count(), 3);
    }

    #[test]
    fn test_set_cursor_clamps_line_and_column() {
        let mut buffer = ScratchBuffer::new("ab\ncd");
        buffer.set_cursor(CursorPos::new(9, 9));
        assert_eq!(buffer.cursor(), CursorPos::new(1, 2));
        buffer.set_cursor(CursorPos::new(0, 9));
        assert_eq!(buffer.cursor(), CursorPos::new(0, 2));
    }

    #[test]
    fn test_selection_text_single_line() {
        let mut buffer = ScratchBuffer::new("hello world");
        buffer.select(CursorPos::new(0, 6), CursorPos::new(0, 11));
        assert_eq!(buffer.selection(), "world");
        assert_eq!(buffer.cursor(), CursorPos::new(0, 11));
    }

    #[test]
    fn test_selection_reversed_anchor_and_head() {
        let mut buffer = ScratchBuffer::new("hello");
        buffer.select(CursorPos::new(0, 4), CursorPos::new(0, 1));
        assert_eq!(buffer.selection(), "ell");
    }

    #[test]
    fn test_selection_across_lines() {
        let mut buffer = ScratchBuffer::new("one\ntwo\nthree");
        buffer.select(CursorPos::new(0, 2), CursorPos::new(2, 3));
        assert_eq!(buffer.selection(), "e\ntwo\nthr");
    }

    #[test]
    fn test_no_selection_is_empty_string() {
        let buffer = ScratchBuffer::new("hello");
        assert_eq!(buffer.selection(), "");
    }

    #[test]
    fn test_replace_selection_replaces_text_and_moves_cursor() {
        let mut buffer = ScratchBuffer::new("hello world");
        buffer.select(CursorPos::new(0, 0), CursorPos::new(0, 5));
        buffer.replace_selection("goodbye");
        assert_eq!(buffer.content(), "goodbye world");
        assert_eq!(buffer.cursor(), CursorPos::new(0, 7));
        assert_eq!(buffer.selection(), "");
    }

    #[test]
    fn test_replace_selection_across_lines() {
        let mut buffer = ScratchBuffer::new("one\ntwo\nthree");
        buffer.select(CursorPos::new(0, 1), CursorPos::new(2, 2));
        buffer.replace_selection("X");
        assert_eq!(buffer.content(), "oXree");
    }

    #[test]
    fn test_replace_selection_without_selection_inserts_at_cursor() {
        let mut buffer = ScratchBuffer::new("ab");
        buffer.set_cursor(CursorPos::new(0, 1));
        buffer.replace_selection("--");
        assert_eq!(buffer.content(), "a--b");
        assert_eq!(buffer.cursor(), CursorPos::new(0, 3));
    }

    #[test]
    fn test_set_cursor_clears_selection() {
        let mut buffer = ScratchBuffer::new("hello");
        buffer.select(CursorPos::new(0, 0), CursorPos::new(0, 3));
        buffer.set_cursor(CursorPos::new(0, 0));
        assert_eq!(buffer.selection(), "");
    }
}
