use colored::Colorize;

use crate::catalog::example_lines;
use crate::resolve::Payload;

/// Sizing hints passed along with a freshly shown popup.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PopupOptions {
    pub max_width: u32,
    /// Keep the popup open alongside the host's auto-complete list.
    pub cooperate_with_auto_complete: bool,
}

impl Default for PopupOptions {
    fn default() -> Self {
        PopupOptions {
            max_width: 480,
            cooperate_with_auto_complete: true,
        }
    }
}

const STYLE: &str = r#"<style>
    .key {
        color: red;
        display: inline-block;
    }
    .snip {
        color: purple;
        display: inline-block;
        padding-right: 48px;
        text-align: right;
    }
    .body {
        font-style: italic;
    }
</style>"#;

/// Popup body in the minimal HTML dialect editor popups understand.
///
/// Sections appear as key, operand syntax, description, then example. Example lines are joined
/// with `<br>`, and an example marked with a leading break starts on its own line.
pub fn popup_markup(payload: &Payload) -> String {
    let example = example_lines(payload.example)
        .map(escape)
        .collect::<Vec<_>>()
        .join("<br>");
    let lead = if payload.example.starts_with('\n') {
        "<br>"
    } else {
        ""
    };

    let mut out = String::with_capacity(STYLE.len() + payload.description.len() + 256);
    out.push_str(STYLE);
    out.push_str(&format!(
        concat!(
            "\n<div>",
            "\n    <h4><label class=\"key\">{}</label>&nbsp;&nbsp;&nbsp;&nbsp;<label class=\"snip\">{}</label></h4>",
            "\n    <p class=\"body\">{}</p>",
            "\n    <span>Example: <code>{}{}</code></span>",
            "\n</div>\n",
        ),
        escape(&payload.key),
        escape(payload.operands),
        escape(payload.description),
        lead,
        example,
    ));
    out
}

/// Plain-text rendition for terminals, in the same section order as [`popup_markup`].
pub fn terminal(payload: &Payload) -> String {
    let mut out = format!("{}", payload.key.red().bold());
    if !payload.operands.is_empty() {
        out.push_str(&format!("    {}", payload.operands.magenta()));
    }
    out.push_str("\n\n");
    for line in payload.description.lines() {
        out.push_str(&format!("{}\n", line.italic()));
    }
    out.push_str("\nExample:\n");
    for line in example_lines(payload.example) {
        out.push_str(&format!("    {line}\n"));
    }
    out
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}
