use crate::lexer::cursor::Cursor;

pub mod cursor;

/// Test if a character is considered an LC3 identifier character.
pub(crate) fn is_id(c: char) -> bool {
    // Non-prefixed numerical literals are considered identifiers.
    // This is because line numbers can be used as labels.
    matches!(c, 'a'..='z' | 'A'..='Z' | '0'..='9' | '_')
}

/// The identifier touching byte `offset` of `text`, or `""` if there is none.
///
/// A cursor sitting directly after a word still selects it, which is where it ends up while
/// typing. Offsets past the end are clamped, and offsets inside a multi-byte character are
/// moved back to its start.
pub fn word_at(text: &str, offset: usize) -> &str {
    let mut cursor = Cursor::at(text, offset);
    cursor.take_while_back(is_id);
    let start = cursor.curr_pt();
    cursor.take_while(is_id);
    &text[start..cursor.curr_pt()]
}
