//! Byte offset <-> LSP position conversion

use tower_lsp::lsp_types::Position;

/// Start offsets of every line in a text. Columns are counted in UTF-16 code
/// units, as LSP positions require.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(text.match_indices('\n').map(|(index, _)| index + 1));
        Self { line_starts }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Offsets past the end clamp to the end of `text`
    pub fn offset_to_position(&self, text: &str, offset: usize) -> Position {
        let offset = floor_char_boundary(text, offset.min(text.len()));
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let line_start = self.line_starts[line];
        let character = text[line_start..offset].encode_utf16().count();

        Position::new(line as u32, character as u32)
    }

    /// Columns past the end of a line clamp to that line's end; lines past the
    /// end of the text clamp to the end of the text.
    pub fn position_to_offset(&self, text: &str, position: Position) -> usize {
        let Some(&line_start) = self.line_starts.get(position.line as usize) else {
            return text.len();
        };
        let line_end = self
            .line_starts
            .get(position.line as usize + 1)
            .map_or(text.len(), |next| next - 1);
        let line = &text[line_start..line_end];
        let line = line.strip_suffix('\r').unwrap_or(line);

        let mut column = 0;
        for (index, ch) in line.char_indices() {
            if column >= position.character as usize {
                return line_start + index;
            }
            column += ch.len_utf16();
        }

        line_start + line.len()
    }
}

fn floor_char_boundary(text: &str, mut offset: usize) -> usize {
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}
