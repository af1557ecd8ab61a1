/// A 0-based line and UTF-8 character column.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SourcePosition {
    line: usize,
    col_utf8: usize,
}

impl SourcePosition {
    pub fn new(line: usize, col_utf8: usize) -> Self {
        Self { line, col_utf8 }
    }

    /// Locates `byte_offset` in `source`. `\r\n`, `\n` and a lone `\r` each
    /// end a line. Offsets past the end resolve to the end of the text.
    pub fn of_offset(source: &str, byte_offset: usize) -> Self {
        let mut line = 0;
        let mut col_utf8 = 0;
        let mut last_char_was_cr = false;
        for (offset, ch) in source.char_indices() {
            if offset >= byte_offset {
                break;
            }
            match ch {
                '\n' if last_char_was_cr => {
                    last_char_was_cr = false;
                },
                '\n' | '\r' => {
                    line += 1;
                    col_utf8 = 0;
                    last_char_was_cr = ch == '\r';
                },
                _ => {
                    col_utf8 += 1;
                    last_char_was_cr = false;
                },
            }
        }
        Self { line, col_utf8 }
    }

    /// Line number (0-based).
    pub fn line(&self) -> usize {
        self.line
    }

    /// UTF-8 character column within the line (0-based).
    pub fn col_utf8(&self) -> usize {
        self.col_utf8
    }
}
