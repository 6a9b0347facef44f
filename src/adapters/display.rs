use crate::core::{DisplayRegion, MenuItem, MenuView};

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn menu_card(item: &MenuItem) -> String {
    let tags = item
        .tags
        .iter()
        .map(|tag| format!(r#"<span class="menu-tag">{}</span>"#, escape_html(tag)))
        .collect::<String>();

    format!(
        concat!(
            r#"<div class="menu-item fade-in-up">"#,
            r#"<div class="menu-info">"#,
            r#"<h4>{name}</h4>"#,
            r#"<p class="body-medium">{description}</p>"#,
            r#"<div class="menu-tags">{tags}</div>"#,
            r#"</div>"#,
            r#"<div class="menu-price">{price}</div>"#,
            r#"</div>"#
        ),
        name = escape_html(&item.name),
        description = escape_html(&item.description),
        tags = tags,
        price = escape_html(&item.price),
    )
}

/// Menu grid rendered as HTML markup.
#[derive(Debug, Clone, Default)]
pub struct HtmlRegion {
    markup: String,
}

impl HtmlRegion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }
}

impl DisplayRegion for HtmlRegion {
    fn repopulate(&mut self, view: &MenuView<'_>) {
        self.markup = match view {
            MenuView::Items(items) => items
                .iter()
                .map(|item| menu_card(item))
                .collect::<Vec<_>>()
                .join("\n"),
            placeholder => format!(
                r#"<p class="body-medium menu-empty">{}</p>"#,
                placeholder.placeholder().unwrap_or_default()
            ),
        };
    }
}

/// Menu grid rendered as terminal lines.
#[derive(Debug, Clone, Default)]
pub struct TextRegion {
    lines: Vec<String>,
}

impl TextRegion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl DisplayRegion for TextRegion {
    fn repopulate(&mut self, view: &MenuView<'_>) {
        self.lines.clear();
        match view {
            MenuView::Items(items) => {
                for item in items {
                    self.lines.push(format!("{}  {}", item.name, item.price));
                    self.lines.push(format!("    {}", item.description));
                    if !item.tags.is_empty() {
                        self.lines.push(format!("    [{}]", item.tags.join(", ")));
                    }
                }
            }
            placeholder => self
                .lines
                .push(placeholder.placeholder().unwrap_or_default().to_string()),
        }
    }
}
