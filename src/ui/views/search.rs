use camera_menu::domain::services::SearchHit;

use crate::ui::text::ColoredText;

pub struct SearchView<'a> {
    query: &'a str,
    hits: &'a [SearchHit<'a>],
}

impl<'a> SearchView<'a> {
    pub fn new(query: &'a str, hits: &'a [SearchHit<'a>]) -> Self {
        Self { query, hits }
    }

    pub fn render(&self, supports_color: bool) -> String {
        let mut out = String::new();
        let noun = if self.hits.len() == 1 { "match" } else { "matches" };
        out.push_str(&format!(
            "{} {noun} for '{}'\n",
            self.hits.len(),
            self.query
        ));

        let width = self
            .hits
            .iter()
            .map(|hit| hit.selection().to_string().len())
            .max()
            .unwrap_or(0);

        for hit in self.hits {
            let path = hit.selection().to_string();
            out.push_str(&format!(
                "  {path:<width$}  {}\n",
                highlight(&hit.breadcrumb(), supports_color)
            ));
        }
        out
    }
}

fn highlight(breadcrumb: &str, supports_color: bool) -> String {
    match breadcrumb.rsplit_once(" > ") {
        Some((ancestors, last)) => format!(
            "{} > {}",
            ColoredText::dim(ancestors).render(supports_color),
            ColoredText::info(last).bold().render(supports_color)
        ),
        None => ColoredText::info(breadcrumb).bold().render(supports_color),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camera_menu::domain::entities::MenuDocument;
    use camera_menu::domain::services::search;

    #[test]
    fn lists_paths_and_breadcrumbs() {
        let doc = MenuDocument::parse(
            "cam",
            "Level 1,Level 2,Level 3\nPhoto,Exposure,ISO\nPhoto,ISO Auto\nVideo,ISO\n",
        )
        .unwrap();
        let hits: Vec<_> = search(doc.tree(), "iso", true).collect();
        let out = SearchView::new("iso", &hits).render(false);
        insta::assert_snapshot!(out, @r"
        3 matches for 'iso'
          0.0.0  Photo > Exposure > ISO
          0.1    Photo > ISO Auto
          1.0    Video > ISO
        ");
    }

    #[test]
    fn no_hits() {
        let out = SearchView::new("zzz", &[]).render(true);
        assert_eq!(out, "0 matches for 'zzz'\n");
    }
}
