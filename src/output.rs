use std::cell::RefCell;
use std::path::Path;

use colored::Colorize;

#[derive(Clone, Copy, Debug)]
pub enum MsgColor {
    Green,
    Cyan,
    Red,
}

thread_local! {
    static IS_MINIMAL: RefCell<bool> = const { RefCell::new(false) };
}

/// Returns the previous value.
pub fn set_minimal(new_value: bool) -> bool {
    IS_MINIMAL.with(|value| value.replace(new_value))
}

pub fn is_minimal() -> bool {
    IS_MINIMAL.with(|value| *value.borrow())
}

/// Print a status line with a right-aligned coloured verb. Silent with `--minimal`.
pub fn message(color: MsgColor, left: &str, right: &str) {
    if is_minimal() {
        return;
    }
    println!("{}", status_line(color, left, right));
}

pub fn file_message(color: MsgColor, left: &str, right: &Path) {
    let right = format!("target {}", right.display());
    message(color, left, &right);
}

fn status_line(color: MsgColor, left: &str, right: &str) -> String {
    let left = match color {
        MsgColor::Green => left.green(),
        MsgColor::Cyan => left.cyan(),
        MsgColor::Red => left.red(),
    };
    format!("{left:>12} {right}")
}
