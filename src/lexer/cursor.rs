/// Cursor over a char sequence that can scan in both directions from a byte offset.
///
/// Positions always sit on char boundaries.
pub struct Cursor<'a> {
    /// Byte index that the cursor is pointing to in the source
    curr_pt: usize,
    chars: &'a str,
}

impl<'a> Cursor<'a> {
    /// Start at `pos`, clamped to the input and moved back onto a char boundary.
    pub fn at(input: &'a str, pos: usize) -> Cursor<'a> {
        let mut curr_pt = pos.min(input.len());
        while !input.is_char_boundary(curr_pt) {
            curr_pt -= 1;
        }
        Cursor {
            curr_pt,
            chars: input,
        }
    }

    /// Peek the character after the cursor.
    pub fn first(&self) -> Option<char> {
        self.chars[self.curr_pt..].chars().next()
    }

    /// Peek the character before the cursor.
    pub fn prev(&self) -> Option<char> {
        self.chars[..self.curr_pt].chars().next_back()
    }

    /// Move forward while `pred` holds.
    pub fn take_while(&mut self, mut pred: impl FnMut(char) -> bool) {
        while let Some(c) = self.first() {
            if !pred(c) {
                break;
            }
            self.curr_pt += c.len_utf8();
        }
    }

    /// Move backward while `pred` holds.
    pub fn take_while_back(&mut self, mut pred: impl FnMut(char) -> bool) {
        while let Some(c) = self.prev() {
            if !pred(c) {
                break;
            }
            self.curr_pt -= c.len_utf8();
        }
    }

    /// Returns current cursor position
    pub fn curr_pt(&self) -> usize {
        self.curr_pt
    }
}
