use camera_menu::domain::entities::MenuDocument;
use camera_menu::domain::value_objects::SelectionPath;
use camera_menu::HELP_PATH_SEPARATOR;

use crate::ui::text::{glyphs, ColoredText};

/// One camera's menu as columns, one per open level
pub struct MenuView<'a> {
    document: &'a MenuDocument,
    selection: &'a SelectionPath,
}

impl<'a> MenuView<'a> {
    pub fn new(document: &'a MenuDocument, selection: &'a SelectionPath) -> Self {
        Self {
            document,
            selection,
        }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let tree = self.document.tree();
        let mut out = String::new();

        out.push_str(&format!(
            "{} {}\n",
            ColoredText::plain(self.document.identity().label())
                .bold()
                .render(supports_color),
            ColoredText::dim(format!("({})", self.document.id())).render(supports_color)
        ));

        let crumbs = self.selection.breadcrumbs(tree);
        if !crumbs.is_empty() {
            out.push_str(
                &ColoredText::info(crumbs.join(HELP_PATH_SEPARATOR)).render(supports_color),
            );
            out.push('\n');
        }

        if tree.is_empty() {
            out.push_str(&ColoredText::dim("No menu entries.").render(supports_color));
            out.push('\n');
            return out;
        }

        for level in self.selection.levels(tree) {
            out.push('\n');
            out.push_str(
                &ColoredText::dim(format!("Level {}", level.depth + 1)).render(supports_color),
            );
            out.push('\n');

            for (index, node) in level.parent.iter().enumerate() {
                let selected = level.selected == Some(index);
                let marker = if selected {
                    glyphs::selected(supports_unicode)
                } else {
                    " "
                };
                let label = if selected {
                    ColoredText::info(node.label()).bold()
                } else {
                    ColoredText::plain(node.label())
                };
                out.push_str(&format!(
                    "  {marker} {index:>2}  {}",
                    label.render(supports_color)
                ));
                if !node.is_leaf() {
                    out.push(' ');
                    out.push_str(glyphs::submenu(supports_unicode));
                }
                if let Some(icon) = node.icon() {
                    out.push_str(&format!(
                        " {}",
                        ColoredText::dim(format!("[{icon}]")).render(supports_color)
                    ));
                }
                out.push('\n');
            }
        }

        if let Some(text) = self.help_text(&crumbs) {
            out.push('\n');
            out.push_str(&format!(
                "{} {}\n",
                ColoredText::warning("Help:").render(supports_color),
                text
            ));
        }
        out
    }

    fn help_text(&self, crumbs: &[String]) -> Option<&'a str> {
        if crumbs.is_empty() {
            return None;
        }
        self.document.help().get_for(crumbs)
    }
}

/// Help text for one entry, or a note that it has none
pub fn render_help(breadcrumb: &str, text: Option<&str>, supports_color: bool) -> String {
    match text {
        Some(text) => format!(
            "{}\n{}\n",
            ColoredText::info(breadcrumb).bold().render(supports_color),
            text
        ),
        None => format!(
            "{}\n{}\n",
            ColoredText::info(breadcrumb).bold().render(supports_color),
            ColoredText::dim("No help text for this entry.").render(supports_color)
        ),
    }
}
