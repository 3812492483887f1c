use camera_menu::domain::value_objects::SelectionPath;

use crate::ui::text::{glyphs, ColoredText};

/// Outcome line for an edit command
pub fn render_edit(
    action: &str,
    id: &str,
    selection: &SelectionPath,
    dry_run: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let icon = ColoredText::success(glyphs::success(supports_unicode)).render(supports_color);
    let mut line = format!("{icon} {action} in {id}");
    if !selection.is_empty() {
        line.push_str(&format!(
            " {}",
            ColoredText::dim(format!("(selected {selection})")).render(supports_color)
        ));
    }
    if dry_run {
        line.push_str(&format!(
            " {}",
            ColoredText::warning("[dry run, not saved]").render(supports_color)
        ));
    }
    line.push('\n');
    line
}

/// Error line for a failed command
pub fn render_error(message: &str, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} {}\n",
        ColoredText::error(glyphs::error(supports_unicode)).render(supports_color),
        ColoredText::error(message).render(supports_color)
    )
}
