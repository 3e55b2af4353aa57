use std::{
    fs,
    io::ErrorKind,
    path::{Component, Path, PathBuf},
    sync::Arc,
};

use catalog::{Catalog, LocaleStore};
use shared::error::ApiError;

pub mod browser;
pub mod escape;
pub mod page;
pub mod render;
pub mod request;
pub mod stylesheet;
pub mod window;

use browser::{paginate, parse_page_query};
use page::GalleryView;
use render::{NavLinks, VariantPicker};
use request::GalleryRequest;
use stylesheet::{stylesheet_for_design, typekit_kit_id};
use window::select_window;

pub use render::RandomVariants;

/// Fixed outbound links used by the page skeletons.
#[derive(Debug, Clone)]
pub struct SiteLinks {
    pub view_all: String,
    pub validate_html: String,
    pub validate_css: String,
    pub license: String,
    pub accessibility: String,
    pub github: String,
    pub resources: String,
    pub faq: String,
    pub submit: String,
    pub translations: String,
}

impl Default for SiteLinks {
    fn default() -> Self {
        Self {
            view_all: "/pages/alldesigns/".into(),
            validate_html: "http://validator.w3.org/check/referer".into(),
            validate_css: "http://jigsaw.w3.org/css-validator/check/referer".into(),
            license: "http://creativecommons.org/licenses/by-nc-sa/3.0/".into(),
            accessibility: "http://www.mezzoblue.com/zengarden/faq/#aaa".into(),
            github: "https://github.com/mezzoblue/csszengarden.com".into(),
            resources: "/pages/resources/".into(),
            faq: "/pages/faq/".into(),
            submit: "/pages/submit/".into(),
            translations: "/pages/translations/".into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SiteOptions {
    pub site_root: PathBuf,
    pub default_design: String,
    pub nav_page_size: usize,
    pub browser_page_size: usize,
    pub links: SiteLinks,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            site_root: PathBuf::from("."),
            default_design: "214".into(),
            nav_page_size: 8,
            browser_page_size: 12,
            links: SiteLinks::default(),
        }
    }
}

#[derive(Clone)]
pub struct ApiContext {
    pub catalog: Catalog,
    pub locales: LocaleStore,
    pub site: Arc<SiteOptions>,
}

/// The main gallery page: the chosen design's stylesheet over the fixed
/// skeleton, with the sidebar archive window for `request.page`.
pub fn gallery_page(
    ctx: &ApiContext,
    request: &GalleryRequest,
    css_query: Option<&str>,
) -> String {
    let site = &ctx.site;
    let design = request
        .design
        .as_deref()
        .or(css_query.filter(|css| !css.is_empty()))
        .unwrap_or(&site.default_design);
    let locale = ctx.locales.get(request.lang.as_deref());

    let stylesheet = stylesheet_for_design(design);
    let typekit_id = typekit_kit_id(&site.site_root, &stylesheet);

    let window = select_window(ctx.catalog.len(), request.page, site.nav_page_size);
    let design_list_html = render::render_design_list(&window.records(ctx.catalog.records()));

    let lang_prefix = request.lang_prefix();
    let links = NavLinks {
        lang_prefix: &lang_prefix,
        design,
        view_all_href: &site.links.view_all,
    };
    let nav_html = render::render_nav(&window, &links, &locale.sidebar);

    tracing::debug!(
        design,
        page = ?request.page,
        start_index = window.start_index,
        count = window.count,
        "rendering gallery page"
    );

    page::render_gallery_page(&GalleryView {
        locale,
        links: &site.links,
        stylesheet: &stylesheet,
        typekit_id: typekit_id.as_deref(),
        design_list_html: &design_list_html,
        nav_html: &nav_html,
    })
}

/// The "all designs" listing. `pg` is the raw query value.
pub fn all_designs_page(
    ctx: &ApiContext,
    pg: Option<&str>,
    picker: &mut dyn VariantPicker,
) -> String {
    let page_number = parse_page_query(pg);
    let listing = paginate(ctx.catalog.records(), page_number, ctx.site.browser_page_size);

    let items_html = render::render_browser_items(&listing.items, picker);
    let pagination_html = render::render_pagination(listing.page, listing.total_pages);

    let skeleton_path = ctx.site.site_root.join("pages").join("alldesigns.html");
    let skeleton = match fs::read_to_string(&skeleton_path) {
        Ok(html) => Some(html),
        Err(error) if error.kind() == ErrorKind::NotFound => None,
        Err(error) => {
            tracing::warn!(
                path = %skeleton_path.display(),
                %error,
                "all designs skeleton unreadable; using built-in page"
            );
            None
        }
    };

    page::render_all_designs_page(skeleton.as_deref(), &items_html, &pagination_html)
}

/// `/pages/{name}`: the archived HTML file when present, a built-in legacy
/// page otherwise.
pub fn static_page(ctx: &ApiContext, name: &str) -> Result<String, ApiError> {
    let relative = name.trim_matches('/');
    let relative = relative.strip_suffix(".html").unwrap_or(relative);
    let Some(path) = page_file(&ctx.site.site_root, relative) else {
        return Err(ApiError::not_found("Page not found"));
    };

    match fs::read_to_string(&path) {
        Ok(html) => return Ok(html),
        Err(error) if error.kind() == ErrorKind::NotFound => {}
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "static page unreadable");
            return Err(ApiError::internal("page could not be read"));
        }
    }

    let page_name = relative.rsplit('/').next().unwrap_or(relative);
    page::legacy_page(page_name)
        .map(|legacy| page::render_content_page(&legacy))
        .ok_or_else(|| ApiError::not_found("Page not found"))
}

fn page_file(site_root: &Path, relative: &str) -> Option<PathBuf> {
    if relative.is_empty() {
        return None;
    }
    if !Path::new(relative)
        .components()
        .all(|component| matches!(component, Component::Normal(_)))
    {
        return None;
    }
    Some(site_root.join("pages").join(format!("{relative}.html")))
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
