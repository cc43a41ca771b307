//! Terminal rendering of the output panel.

use synext_core::{BASELINE_ELEMENT_ID, LINE_BREAK, PanelSnapshot, SYNTAX_ELEMENT_ID};

/// Render both regions, one neighbour per line.
pub fn render_panel(snapshot: &PanelSnapshot) -> String {
    let mut out = String::new();
    push_region(&mut out, SYNTAX_ELEMENT_ID, "syntactic neighbours", &snapshot.syntax);
    out.push('\n');
    push_region(
        &mut out,
        BASELINE_ELEMENT_ID,
        "baseline neighbours",
        &snapshot.baseline,
    );
    out
}

fn push_region(out: &mut String, id: &str, title: &str, content: &str) {
    out.push_str(&format!("[{id}] {title}\n"));
    if content.is_empty() {
        out.push_str("  (empty)\n");
        return;
    }
    for line in content.split(LINE_BREAK) {
        out.push_str("  ");
        out.push_str(line);
        out.push('\n');
    }
}
