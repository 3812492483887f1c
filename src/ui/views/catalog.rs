use camera_menu::application::BrandGroup;

use crate::ui::text::ColoredText;

pub struct CatalogView<'a> {
    groups: &'a [BrandGroup],
}

impl<'a> CatalogView<'a> {
    pub fn new(groups: &'a [BrandGroup]) -> Self {
        Self { groups }
    }

    pub fn render(&self, supports_color: bool) -> String {
        let mut out = String::new();

        if self.groups.is_empty() {
            out.push_str(&format!(
                "{}\n{}\n",
                ColoredText::dim("No cameras found.").render(supports_color),
                ColoredText::dim("Point --data-dir at a folder of menu documents, or import a bundle.")
                    .render(supports_color)
            ));
            return out;
        }

        let width = self
            .groups
            .iter()
            .flat_map(|group| &group.cameras)
            .map(|camera| camera.label.chars().count())
            .max()
            .unwrap_or(0);

        for group in self.groups {
            let brand = if group.brand.is_empty() {
                "(no brand)"
            } else {
                group.brand.as_str()
            };
            out.push_str(&ColoredText::info(brand).bold().render(supports_color));
            out.push('\n');

            for camera in &group.cameras {
                let pad = width.saturating_sub(camera.label.chars().count());
                out.push_str(&format!(
                    "  {}{}  {}",
                    camera.label,
                    " ".repeat(pad),
                    ColoredText::dim(camera.id.as_str()).render(supports_color)
                ));
                if camera.custom {
                    out.push_str(&format!(
                        " {}",
                        ColoredText::warning("(custom)").render(supports_color)
                    ));
                }
                out.push('\n');
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camera_menu::application::CameraSummary;

    fn summary(id: &str, label: &str, custom: bool) -> CameraSummary {
        CameraSummary {
            id: id.to_string(),
            label: label.to_string(),
            brand: String::new(),
            model: String::new(),
            display_name: label.to_string(),
            custom,
        }
    }

    #[test]
    fn renders_brands_with_aligned_ids() {
        let groups = vec![
            BrandGroup {
                brand: "Canon".to_string(),
                cameras: vec![summary("canon-r5", "Canon R5", false)],
            },
            BrandGroup {
                brand: "Sony".to_string(),
                cameras: vec![summary("custom-1-abc", "Sony A7 IV", true)],
            },
        ];
        let out = CatalogView::new(&groups).render(false);
        insta::assert_snapshot!(out, @r"
        Canon
          Canon R5    canon-r5
        Sony
          Sony A7 IV  custom-1-abc (custom)
        ");
    }

    #[test]
    fn empty_catalog_explains_itself() {
        let out = CatalogView::new(&[]).render(false);
        assert!(out.starts_with("No cameras found."));
    }
}
