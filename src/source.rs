use crate::{Position, SourceText};
use once_cell::sync::OnceCell;

impl<'s> From<&'s str> for SourceText<'s> {
    fn from(value: &'s str) -> Self {
        SourceText::new(value)
    }
}

impl<'s> SourceText<'s> {
    pub fn new(value: &'s str) -> Self {
        Self {
            value,
            line_breaks: OnceCell::new(),
        }
    }

    fn line_breaks(&self) -> &Vec<usize> {
        self.line_breaks.get_or_init(|| {
            self.value
                .bytes()
                .enumerate()
                .filter_map(|(index, b)| if b == b'\n' { Some(index) } else { None })
                .collect()
        })
    }

    /// Line/column of the given byte offset, both 1-based.
    pub fn position(&self, offset: usize) -> Position {
        let line_breaks = self.line_breaks();
        let index = match line_breaks.binary_search(&offset) {
            Ok(index) | Err(index) => index,
        };

        if index == 0 {
            Position::new(1, offset + 1)
        } else {
            let break_point = line_breaks[index - 1] + 1;
            Position::new(index + 1, offset - break_point + 1)
        }
    }
}
