use percent_encoding::percent_decode_str;
use shared::domain::is_all_digits;

/// Everything a gallery path can select. Resolved once per request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryRequest {
    pub design: Option<String>,
    pub lang: Option<String>,
    pub page: Option<u32>,
}

impl GalleryRequest {
    /// Matches `/`, `/{design}/`, `/{design}/page{n}/` and the same shapes
    /// under `/tr/{lang}`. Trailing slashes are optional. Returns `None` for
    /// any other path.
    pub fn from_path(path: &str) -> Option<Self> {
        let inner = path.strip_prefix('/')?;
        let inner = inner.strip_suffix('/').unwrap_or(inner);

        let segments: Vec<String> = if inner.is_empty() {
            Vec::new()
        } else {
            inner
                .split('/')
                .map(decode_segment)
                .collect::<Option<Vec<_>>>()?
        };

        match segments.as_slice() {
            [] => Some(Self::default()),
            [tr, lang, rest @ ..] if tr == "tr" => {
                let mut request = Self::design_shape(rest)?;
                request.lang = Some(lang.clone());
                Some(request)
            }
            shape => Self::design_shape(shape),
        }
    }

    fn design_shape(segments: &[String]) -> Option<Self> {
        match segments {
            [] => Some(Self::default()),
            [single] => match parse_page_segment(single) {
                Some(page) => Some(Self {
                    page: Some(page),
                    ..Self::default()
                }),
                None => Some(Self {
                    design: Some(single.clone()),
                    ..Self::default()
                }),
            },
            [design, page] => Some(Self {
                design: Some(design.clone()),
                page: Some(parse_page_segment(page)?),
                ..Self::default()
            }),
            _ => None,
        }
    }

    /// `/tr/{lang}` when a language was routed, otherwise empty.
    pub fn lang_prefix(&self) -> String {
        self.lang
            .as_deref()
            .map(|lang| format!("/tr/{lang}"))
            .unwrap_or_default()
    }
}

/// `page{digits}`, e.g. `page3`.
pub fn parse_page_segment(segment: &str) -> Option<u32> {
    let digits = segment.strip_prefix("page")?;
    if !is_all_digits(digits) {
        return None;
    }
    digits.parse().ok()
}

fn decode_segment(raw: &str) -> Option<String> {
    if raw.is_empty() {
        return None;
    }
    let decoded = percent_decode_str(raw).decode_utf8().ok()?;
    Some(decoded.into_owned())
}

#[cfg(test)]
#[path = "tests/request_tests.rs"]
mod tests;
