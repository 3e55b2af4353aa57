//! Markup fragments for the sidebar archive and the all-designs listing.
//! Every catalog field and routed selector goes through [`escape_html`].

use rand::{rngs::StdRng, Rng, SeedableRng};
use shared::{domain::DesignRecord, locale::SidebarStrings};

use crate::{escape::escape_html, window::WindowResult};

/// Chooses which of the two listing layouts an item gets.
pub trait VariantPicker {
    fn credits_first(&mut self) -> bool;
}

/// Coin flip per item.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomVariants;

impl VariantPicker for RandomVariants {
    fn credits_first(&mut self) -> bool {
        rand::random()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedVariants(pub bool);

impl VariantPicker for FixedVariants {
    fn credits_first(&mut self) -> bool {
        self.0
    }
}

#[derive(Debug)]
pub struct SeededVariants(StdRng);

impl SeededVariants {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl VariantPicker for SeededVariants {
    fn credits_first(&mut self) -> bool {
        self.0.gen_bool(0.5)
    }
}

/// Where archive links point: `{lang_prefix}/{design}/...`.
#[derive(Debug, Clone)]
pub struct NavLinks<'a> {
    pub lang_prefix: &'a str,
    pub design: &'a str,
    pub view_all_href: &'a str,
}

impl NavLinks<'_> {
    pub fn page_href(&self, page: u32) -> String {
        if page == 0 {
            format!("{}/{}/", self.lang_prefix, self.design)
        } else {
            format!("{}/{}/page{page}/", self.lang_prefix, self.design)
        }
    }
}

pub fn render_design_list(records: &[&DesignRecord]) -> String {
    let mut html = String::new();
    for record in records {
        html.push_str(&format!(
            r#"
      <li>
        <a href="/{id}/">{name}</a>
        <span class="designer-name">{designer}</span>
      </li>"#,
            id = escape_html(record.id.as_str()),
            name = escape_html(&record.name),
            designer = escape_html(&record.designer),
        ));
    }
    html
}

pub fn render_nav(
    window: &WindowResult,
    links: &NavLinks<'_>,
    sidebar: &SidebarStrings,
) -> String {
    let mut html = String::new();

    if let Some(next) = window.nav.next_page_number {
        html.push_str(&format!(
            r#"
      <li class="next">
        <a href="{href}">
          {label} <span class="indicator">&rsaquo;</span>
        </a>
      </li>"#,
            href = escape_html(&links.page_href(next)),
            label = sidebar.design_archives_next,
        ));
    }

    if let Some(previous) = window.nav.previous_page_number {
        html.push_str(&format!(
            r#"
      <li class="previous">
        <a href="{href}">
          <span class="indicator">&lsaquo;</span> {label}
        </a>
      </li>"#,
            href = escape_html(&links.page_href(previous)),
            label = sidebar.design_archives_previous,
        ));
    }

    html.push_str(&format!(
        r#"
    <li class="viewall">
      <a href="{href}" title="{title}">
        {label}
      </a>
    </li>"#,
        href = escape_html(links.view_all_href),
        title = escape_html(&sidebar.design_archives_viewall_title),
        label = sidebar.design_archives_viewall_text,
    ));

    html
}

pub fn render_browser_items(
    records: &[&DesignRecord],
    picker: &mut dyn VariantPicker,
) -> String {
    let mut html = String::new();
    for record in records {
        let id = escape_html(record.id.as_str());
        let credits = format!(
            r#"
					<div class="design-credits">
						<h3>{name}</h3>
						by <a href="{url}">{designer}</a>
					</div>"#,
            name = escape_html(&record.name),
            url = escape_html(&record.designer_url),
            designer = escape_html(&record.designer),
        );
        let preview = format!(
            r#"
					<a href="/{id}/" class="design-preview">
						<img src="/content/previews/{id}.png" alt="Design preview">
					</a>"#
        );

        let (first, second) = if picker.credits_first() {
            (credits, preview)
        } else {
            (preview, credits)
        };
        html.push_str(&format!("\n\t\t\t\t<li>{first}{second}\n\t\t\t\t</li>"));
    }
    html
}

pub fn render_pagination(current_page: u32, total_pages: usize) -> String {
    let mut html = String::new();
    for page in 1..=total_pages {
        let class = if page == current_page as usize {
            r#" class="current""#
        } else {
            ""
        };
        html.push_str(&format!(
            r#"
		<li>
			<a href="/pages/alldesigns/?pg={page}"{class}>
				{page}		</a>
		</li>"#
        ));
    }
    html
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
