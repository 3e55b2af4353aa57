//! Translatable page strings.
//!
//! Values are trusted markup: they may contain `<abbr>` and `<a>` elements and
//! are interpolated into pages without escaping.

use serde::{Deserialize, Serialize};

const ENGLISH_TOML: &str = include_str!("../locales/en.toml");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Locale {
    pub lang: String,
    pub head: HeadStrings,
    pub intro: IntroStrings,
    pub main: MainStrings,
    pub footer: FooterStrings,
    pub sidebar: SidebarStrings,
    pub foot: FootStrings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadStrings {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub comment: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntroStrings {
    pub h1: String,
    pub h2: String,
    pub summary_p1: String,
    pub summary_p2: String,
    pub preamble_h3: String,
    pub preamble_p1: String,
    pub preamble_p2: String,
    pub preamble_p3: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MainStrings {
    pub explanation_h3: String,
    pub explanation_p1: String,
    pub explanation_p2: String,
    pub participation_h3: String,
    pub participation_p1: String,
    pub participation_p2: String,
    pub participation_p3: String,
    pub benefits_h3: String,
    pub benefits_p1: String,
    pub requirements_h3: String,
    pub requirements_p1: String,
    pub requirements_p2: String,
    pub requirements_p3: String,
    pub requirements_p4: String,
    pub requirements_p5: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FooterStrings {
    pub zen_validate_html_title: String,
    pub zen_validate_html_text: String,
    pub zen_validate_css_title: String,
    pub zen_validate_css_text: String,
    pub zen_license_title: String,
    pub zen_license_text: String,
    pub zen_accessibility_title: String,
    pub zen_accessibility_text: String,
    pub zen_github_title: String,
    pub zen_github_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SidebarStrings {
    pub design_selection_h3: String,
    pub design_selection_by: String,
    pub design_archives_h3: String,
    pub design_archives_next: String,
    pub design_archives_previous: String,
    pub design_archives_viewall_title: String,
    pub design_archives_viewall_text: String,
    pub design_resources_h3: String,
    pub view_css_title: String,
    pub view_css_text: String,
    pub css_resources_title: String,
    pub css_resources_text: String,
    pub zen_faq_title: String,
    pub zen_faq_text: String,
    pub zen_submit_title: String,
    pub zen_submit_text: String,
    pub zen_translations_title: String,
    pub zen_translations_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FootStrings {
    #[serde(default)]
    pub comment: String,
}

impl Locale {
    pub fn from_toml_str(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    /// The compiled-in English strings every other language falls back to.
    pub fn english() -> Result<Self, toml::de::Error> {
        Self::from_toml_str(ENGLISH_TOML)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_english_parses() {
        let locale = Locale::english().expect("bundled english");
        assert_eq!(locale.lang, "en");
        assert_eq!(locale.sidebar.design_archives_next, "Next Designs");
        assert_eq!(locale.sidebar.design_archives_viewall_text, "View All Designs");
        assert_eq!(locale.footer.zen_github_text, "GH");
    }

    #[test]
    fn rejects_locale_with_missing_section() {
        let result = Locale::from_toml_str("lang = \"fr\"\n");
        assert!(result.is_err());
    }
}
