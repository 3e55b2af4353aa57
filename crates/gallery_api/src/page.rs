//! Full-page skeletons around the rendered fragments.

use shared::locale::Locale;

use crate::{escape::escape_html, SiteLinks};

const DESIGN_LIST_OPEN: &str = r#"<ul class="design-list" role="navigation">"#;
const DESIGN_NAV_OPEN: &str = r#"<ul class="design-nav" role="navigation">"#;

pub struct GalleryView<'a> {
    pub locale: &'a Locale,
    pub links: &'a SiteLinks,
    pub stylesheet: &'a str,
    pub typekit_id: Option<&'a str>,
    pub design_list_html: &'a str,
    pub nav_html: &'a str,
}

pub fn render_gallery_page(view: &GalleryView<'_>) -> String {
    let locale = view.locale;
    let (head, intro, main, footer, sidebar) = (
        &locale.head,
        &locale.intro,
        &locale.main,
        &locale.footer,
        &locale.sidebar,
    );
    let links = view.links;
    let stylesheet = escape_html(view.stylesheet);
    let typekit = view
        .typekit_id
        .map(|kit_id| {
            format!(
                "\n\t<script src=\"//use.typekit.net/{kit}.js\"></script>\
                 \n\t<script>try{{Typekit.load();}}catch(e){{}}</script>",
                kit = escape_html(kit_id)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
	<meta charset="utf-8">
	<title>{title}</title>
	<meta name="description" content="{description}">
	<meta name="robots" content="all">
	<link rel="stylesheet" media="screen" href="{stylesheet}">{typekit}
	<meta name="viewport" content="width=device-width, initial-scale=1.0">
</head>

<!--
{head_comment}
-->

<body id="css-zen-garden">
<div class="page-wrapper">

	<section class="intro" id="zen-intro">
		<header role="banner">
			<h1>{intro_h1}</h1>
			<h2>{intro_h2}</h2>
		</header>

		<div class="summary" id="zen-summary" role="article">
			<p>{summary_p1}</p>
			<p>{summary_p2}</p>
		</div>

		<div class="preamble" id="zen-preamble" role="article">
			<h3>{preamble_h3}</h3>
			<p>{preamble_p1}</p>
			<p>{preamble_p2}</p>
			<p>{preamble_p3}</p>
		</div>
	</section>

	<div class="main supporting" id="zen-supporting" role="main">
		<div class="explanation" id="zen-explanation" role="article">
			<h3>{explanation_h3}</h3>
			<p>{explanation_p1}</p>
			<p>{explanation_p2}</p>
		</div>

		<div class="participation" id="zen-participation" role="article">
			<h3>{participation_h3}</h3>
			<p>{participation_p1}</p>
			<p>{participation_p2}</p>
			<p>{participation_p3}</p>
		</div>

		<div class="benefits" id="zen-benefits" role="article">
			<h3>{benefits_h3}</h3>
			<p>{benefits_p1}</p>
		</div>

		<div class="requirements" id="zen-requirements" role="article">
			<h3>{requirements_h3}</h3>
			<p>{requirements_p1}</p>
			<p>{requirements_p2}</p>
			<p>{requirements_p3}</p>
			<p>{requirements_p4}</p>
			<p>{requirements_p5}</p>
		</div>

		<footer>
			<a href="{validate_html}" title="{validate_html_title}" class="zen-validate-html">{validate_html_text}</a>
			<a href="{validate_css}" title="{validate_css_title}" class="zen-validate-css">{validate_css_text}</a>
			<a href="{license}" title="{license_title}" class="zen-license">{license_text}</a>
			<a href="{accessibility}" title="{accessibility_title}" class="zen-accessibility">{accessibility_text}</a>
			<a href="{github}" title="{github_title}" class="zen-github">{github_text}</a>
		</footer>
	</div>

	<aside class="sidebar" role="complementary">
		<div class="wrapper">

			<div class="design-selection" id="design-selection">
				<h3 class="select">{selection_h3}</h3>
				<nav role="navigation">
					<ul>{design_list}
					</ul>
				</nav>
			</div>

			<div class="design-archives" id="design-archives">
				<h3 class="archives">{archives_h3}</h3>
				<nav role="navigation">
					<ul>{nav}
					</ul>
				</nav>
			</div>

			<div class="zen-resources" id="zen-resources">
				<h3 class="resources">{resources_h3}</h3>
				<ul>
					<li class="view-css">
						<a href="{stylesheet}" title="{view_css_title}">{view_css_text}</a>
					</li>
					<li class="css-resources">
						<a href="{resources}" title="{css_resources_title}">{css_resources_text}</a>
					</li>
					<li class="zen-faq">
						<a href="{faq}" title="{faq_title}">{faq_text}</a>
					</li>
					<li class="zen-submit">
						<a href="{submit}" title="{submit_title}">{submit_text}</a>
					</li>
					<li class="zen-translations">
						<a href="{translations}" title="{translations_title}">{translations_text}</a>
					</li>
				</ul>
			</div>
		</div>
	</aside>
</div>

<!--
{foot_comment}
-->
<div class="extra1" role="presentation"></div><div class="extra2" role="presentation"></div>
<div class="extra3" role="presentation"></div><div class="extra4" role="presentation"></div>
<div class="extra5" role="presentation"></div><div class="extra6" role="presentation"></div>

</body>
</html>
"#,
        lang = escape_html(&locale.lang),
        title = head.title,
        description = escape_html(&head.description),
        head_comment = head.comment,
        intro_h1 = intro.h1,
        intro_h2 = intro.h2,
        summary_p1 = intro.summary_p1,
        summary_p2 = intro.summary_p2,
        preamble_h3 = intro.preamble_h3,
        preamble_p1 = intro.preamble_p1,
        preamble_p2 = intro.preamble_p2,
        preamble_p3 = intro.preamble_p3,
        explanation_h3 = main.explanation_h3,
        explanation_p1 = main.explanation_p1,
        explanation_p2 = main.explanation_p2,
        participation_h3 = main.participation_h3,
        participation_p1 = main.participation_p1,
        participation_p2 = main.participation_p2,
        participation_p3 = main.participation_p3,
        benefits_h3 = main.benefits_h3,
        benefits_p1 = main.benefits_p1,
        requirements_h3 = main.requirements_h3,
        requirements_p1 = main.requirements_p1,
        requirements_p2 = main.requirements_p2,
        requirements_p3 = main.requirements_p3,
        requirements_p4 = main.requirements_p4,
        requirements_p5 = main.requirements_p5,
        validate_html = escape_html(&links.validate_html),
        validate_html_title = escape_html(&footer.zen_validate_html_title),
        validate_html_text = footer.zen_validate_html_text,
        validate_css = escape_html(&links.validate_css),
        validate_css_title = escape_html(&footer.zen_validate_css_title),
        validate_css_text = footer.zen_validate_css_text,
        license = escape_html(&links.license),
        license_title = escape_html(&footer.zen_license_title),
        license_text = footer.zen_license_text,
        accessibility = escape_html(&links.accessibility),
        accessibility_title = escape_html(&footer.zen_accessibility_title),
        accessibility_text = footer.zen_accessibility_text,
        github = escape_html(&links.github),
        github_title = escape_html(&footer.zen_github_title),
        github_text = footer.zen_github_text,
        selection_h3 = sidebar.design_selection_h3,
        design_list = view.design_list_html,
        archives_h3 = sidebar.design_archives_h3,
        nav = view.nav_html,
        resources_h3 = sidebar.design_resources_h3,
        view_css_title = escape_html(&sidebar.view_css_title),
        view_css_text = sidebar.view_css_text,
        resources = escape_html(&links.resources),
        css_resources_title = escape_html(&sidebar.css_resources_title),
        css_resources_text = sidebar.css_resources_text,
        faq = escape_html(&links.faq),
        faq_title = escape_html(&sidebar.zen_faq_title),
        faq_text = sidebar.zen_faq_text,
        submit = escape_html(&links.submit),
        submit_title = escape_html(&sidebar.zen_submit_title),
        submit_text = sidebar.zen_submit_text,
        translations = escape_html(&links.translations),
        translations_title = escape_html(&sidebar.zen_translations_title),
        translations_text = sidebar.zen_translations_text,
        foot_comment = locale.foot.comment,
    )
}

/// Replaces the inner markup of the first `open_tag ... </ul>` block.
pub fn splice_list(
    html: &str,
    open_tag: &str,
    inner: &str,
    closing_indent: &str,
) -> Option<String> {
    let open_at = html.find(open_tag)?;
    let inner_start = open_at + open_tag.len();
    let close_rel = html[inner_start..].find("</ul>")?;
    let inner_end = inner_start + close_rel;

    let mut spliced = String::with_capacity(html.len() + inner.len());
    spliced.push_str(&html[..inner_start]);
    spliced.push_str(inner);
    spliced.push('\n');
    spliced.push_str(closing_indent);
    spliced.push_str(&html[inner_end..]);
    Some(spliced)
}

/// Drops the rendered listing and pagination into `skeleton`, or into the
/// built-in page when there is no skeleton or it lacks either list.
pub fn render_all_designs_page(
    skeleton: Option<&str>,
    items_html: &str,
    pagination_html: &str,
) -> String {
    skeleton
        .and_then(|html| splice_list(html, DESIGN_LIST_OPEN, items_html, "\t\t\t"))
        .and_then(|html| splice_list(&html, DESIGN_NAV_OPEN, pagination_html, ""))
        .unwrap_or_else(|| builtin_all_designs_page(items_html, pagination_html))
}

fn builtin_all_designs_page(items_html: &str, pagination_html: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
	<meta charset="utf-8">
	<title>CSS Zen Garden: All Designs</title>
	<link rel="stylesheet" media="screen" href="/content/content.css">
	<meta name="viewport" content="width=device-width, initial-scale=1.0">
</head>
<body>
<div class="page-wrapper">
	<header role="banner" class="page-banner">
		<h1>CSS Zen Garden</h1>
		<a href="/" class="return"><span>Return to CSS Zen Garden</span></a>
	</header>
	<div class="page-body">
		<div class="page-main" role="main">
			<h2>All Designs</h2>
			{DESIGN_LIST_OPEN}{items_html}
			</ul>
			{DESIGN_NAV_OPEN}{pagination_html}
</ul>
		</div>
	</div>
</div>
</body>
</html>
"#
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentPage {
    pub title: &'static str,
    pub content: &'static str,
}

/// Pages that predate the static HTML archive and only exist as built-in
/// content.
pub fn legacy_page(name: &str) -> Option<ContentPage> {
    let page = match name {
        "about" => ContentPage {
            title: "CSS Zen Garden: About",
            content: "<h2>About the CSS Zen Garden</h2><p>The CSS Zen Garden is a project to showcase web design using CSS.</p><p>Created by Dave Shea, it demonstrates what can be accomplished through CSS-based design.</p>",
        },
        "resources" => ContentPage {
            title: "CSS Zen Garden: Resources",
            content: r#"<h2>CSS Resources</h2><p>Here are some helpful CSS resources:</p><ul><li><a href="https://developer.mozilla.org/en-US/docs/Web/CSS">MDN CSS Documentation</a></li><li><a href="https://css-tricks.com/">CSS-Tricks</a></li><li><a href="https://www.w3.org/Style/CSS/">W3C CSS</a></li></ul>"#,
        },
        "submit" => ContentPage {
            title: "CSS Zen Garden: Submit a Design",
            content: r#"<h2>Submit a Design</h2><p>We welcome new submissions to the CSS Zen Garden!</p><p>Please read the <a href="/pages/faq/">FAQ</a> for submission guidelines.</p><p>Submit your design via GitHub: <a href="https://github.com/mezzoblue/csszengarden.com">github.com/mezzoblue/csszengarden.com</a></p>"#,
        },
        "translations" => ContentPage {
            title: "CSS Zen Garden: Translations",
            content: "<h2>Translations</h2><p>The CSS Zen Garden has been translated into multiple languages.</p><p>Translations are served from the locale directory when available.</p>",
        },
        _ => return None,
    };
    Some(page)
}

pub fn render_content_page(page: &ContentPage) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{title}</title>
  <link rel="stylesheet" media="screen" href="/content/content.css">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
</head>
<body>
  <div class="page-wrapper">
    <header role="banner" class="page-banner">
      <h1>CSS Zen Garden</h1>
      <a href="/" class="return"><span>Return to CSS Zen Garden</span></a>
    </header>
    <div class="page-body">
      <div class="page-main" role="main">
        {content}
      </div>
    </div>
  </div>
</body>
</html>"#,
        title = page.title,
        content = page.content,
    )
}

#[cfg(test)]
#[path = "tests/page_tests.rs"]
mod tests;
