//! Text mutations behind the editor commands.
//!
//! Every operation is a single splice at the current cursor position
//! followed by an explicit cursor move. Because `replace_range` at the
//! cursor leaves the cursor in place, all new positions are computed from
//! the position read before the insertion. Nothing here validates the
//! surrounding document; unmatched braces are permitted.

use tracing::debug;

use crate::host::{CursorPos, Editor};

/// Fence inserted by [`insert_code_block`]; the trailing space on the
/// first line is where the language tag goes.
const CODE_BLOCK: &str = "``` \n```";

/// Columns from the insertion start to the language tag position.
const CODE_BLOCK_CURSOR_OFFSET: usize = 3;

const UNDERLINE_OPEN: &str = "<u>";
const UNDERLINE_CLOSE: &str = "</u>";
const LINE_BREAK_TAG: &str = "<br>";

/// Replacement text for the sample editor command.
const SAMPLE_TEXT: &str = "Sample Editor Command";

/// Insert a code fence and park the cursor where the language tag is
/// typed, three columns past the insertion start.
pub fn insert_code_block(editor: &mut dyn Editor) {
    let pos = editor.cursor();
    editor.replace_range(CODE_BLOCK, pos);
    editor.set_cursor(CursorPos::new(pos.line, pos.ch + CODE_BLOCK_CURSOR_OFFSET));
}

/// Insert a heading marker of the given level and advance the cursor past
/// the trailing space.
pub fn insert_heading(editor: &mut dyn Editor, level: u8) {
    let marker = format!("{} ", "#".repeat(level as usize));
    let pos = editor.cursor();
    editor.replace_range(&marker, pos);
    editor.set_cursor(CursorPos::new(pos.line, pos.ch + marker.len()));
}

/// Wrap the selection in underline tags.
///
/// With no selection, inserts an empty tag pair and leaves the cursor
/// between the tags.
pub fn underline(editor: &mut dyn Editor) {
    let selection = editor.selection();
    if !selection.is_empty() {
        editor.replace_selection(&format!("{}{}{}", UNDERLINE_OPEN, selection, UNDERLINE_CLOSE));
    } else {
        let pos = editor.cursor();
        editor.replace_range(&format!("{}{}", UNDERLINE_OPEN, UNDERLINE_CLOSE), pos);
        editor.set_cursor(CursorPos::new(pos.line, pos.ch + UNDERLINE_OPEN.len()));
    }
}

/// Insert a line break tag and move the cursor to the start of the next
/// line. The surface clamps when there is no next line.
pub fn insert_line_break(editor: &mut dyn Editor) {
    let pos = editor.cursor();
    editor.replace_range(LINE_BREAK_TAG, pos);
    editor.set_cursor(CursorPos::new(pos.line + 1, 0));
}

/// Insert a literal character and advance the cursor past it.
pub fn insert_literal(editor: &mut dyn Editor, literal: char) {
    let pos = editor.cursor();
    editor.replace_range(literal.encode_utf8(&mut [0; 4]), pos);
    editor.set_cursor(CursorPos::new(pos.line, pos.ch + literal.len_utf8()));
}

/// Log the current selection, then replace it with the sample text.
pub fn replace_selection_sample(editor: &mut dyn Editor) {
    debug!(selection = %editor.selection(), "Sample editor command");
    editor.replace_selection(SAMPLE_TEXT);
}
