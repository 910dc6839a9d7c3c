//! Text export formats for a palette, and share-link parsing.
//!
//! | Format | Output |
//! |--------|--------|
//! | [`ExportFormat::Css`] | `:root` block of `--color-N` custom properties |
//! | [`ExportFormat::Json`] | `{ "colors": [...] }`, pretty printed |
//! | [`ExportFormat::Url`] | `<base>?colors=rrggbb-rrggbb-...` |
//!
//! ```rust
//! use tinct::{export, parse_share_url, Color, ExportFormat};
//!
//! let colors = [Color::new(255, 0, 0), Color::new(0, 0, 255)];
//! let url = export(&colors, ExportFormat::Url, "https://tinct.local/").unwrap();
//! assert_eq!(url, "https://tinct.local/?colors=ff0000-0000ff");
//! assert_eq!(parse_share_url(&url).unwrap(), colors);
//! ```

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::{form_urlencoded, Url};

use crate::color::Color;
use crate::error::{ColorError, Result};

/// Query parameter carrying the palette in share links.
pub const SHARE_PARAM: &str = "colors";

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Css,
    Json,
    Url,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Css => "css",
            ExportFormat::Json => "json",
            ExportFormat::Url => "url",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "css" => Ok(ExportFormat::Css),
            "json" => Ok(ExportFormat::Json),
            "url" => Ok(ExportFormat::Url),
            other => Err(format!("unknown export format '{}'", other)),
        }
    }
}

#[derive(Serialize)]
struct JsonExport<'a> {
    colors: &'a [Color],
}

/// Renders `colors` in `format`. `base_url` is only used by
/// [`ExportFormat::Url`].
pub fn export(colors: &[Color], format: ExportFormat, base_url: &str) -> Result<String> {
    match format {
        ExportFormat::Css => Ok(to_css(colors)),
        ExportFormat::Json => to_json(colors),
        ExportFormat::Url => to_share_url(colors, base_url),
    }
}

/// CSS custom properties, numbered from 1.
pub fn to_css(colors: &[Color]) -> String {
    let vars: Vec<String> = colors
        .iter()
        .enumerate()
        .map(|(i, color)| format!("  --color-{}: {};", i + 1, color))
        .collect();
    format!(":root {{\n{}\n}}", vars.join("\n"))
}

/// Pretty JSON object with a single `colors` array.
pub fn to_json(colors: &[Color]) -> Result<String> {
    Ok(serde_json::to_string_pretty(&JsonExport { colors })?)
}

/// Share link: `base_url` with a `colors` query of dash-joined hex digits.
///
/// Other query parameters on `base_url` are kept; an existing `colors`
/// parameter is replaced.
pub fn to_share_url(colors: &[Color], base_url: &str) -> Result<String> {
    let joined: Vec<String> = colors
        .iter()
        .map(|c| c.to_string().trim_start_matches('#').to_string())
        .collect();

    let mut url = Url::parse(base_url)?;
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != SHARE_PARAM)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    url.query_pairs_mut()
        .clear()
        .extend_pairs(kept)
        .append_pair(SHARE_PARAM, &joined.join("-"));
    Ok(url.into())
}

/// Reads the palette back out of a share link.
///
/// Accepts an absolute URL or a bare query string (`colors=...`, with or
/// without a leading `?`). Values are percent-decoded, fragments are ignored
/// and other query parameters are skipped.
pub fn parse_share_url(input: &str) -> Result<Vec<Color>> {
    let value = match Url::parse(input) {
        Ok(url) => find_share_param(url.query_pairs()),
        Err(_) => {
            let query = input.split('#').next().unwrap_or_default();
            let query = query.split_once('?').map_or(query, |(_, query)| query);
            find_share_param(form_urlencoded::parse(query.as_bytes()))
        }
    }
    .ok_or_else(|| ColorError::InvalidShareUrl(format!("no '{}' parameter", SHARE_PARAM)))?;

    if value.is_empty() {
        return Err(ColorError::InvalidShareUrl(format!(
            "empty '{}' parameter",
            SHARE_PARAM
        )));
    }

    value.split('-').map(Color::from_hex).collect()
}

fn find_share_param<'a>(mut pairs: impl Iterator<Item = (Cow<'a, str>, Cow<'a, str>)>) -> Option<String> {
    pairs
        .find(|(key, _)| key == SHARE_PARAM)
        .map(|(_, value)| value.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Color> {
        vec![Color::new(0xff, 0x6b, 0x35), Color::new(0x00, 0x4e, 0x89)]
    }

    #[test]
    fn css_block() {
        assert_eq!(
            to_css(&sample()),
            ":root {\n  --color-1: #ff6b35;\n  --color-2: #004e89;\n}"
        );
    }

    #[test]
    fn json_document() {
        let json = to_json(&sample()).unwrap();
        assert_eq!(
            json,
            "{\n  \"colors\": [\n    \"#ff6b35\",\n    \"#004e89\"\n  ]\n}"
        );
    }

    #[test]
    fn url_with_base() {
        let url = export(&sample(), ExportFormat::Url, "https://example.com/palette").unwrap();
        assert_eq!(url, "https://example.com/palette?colors=ff6b35-004e89");
    }

    #[test]
    fn parse_share_url_roundtrip() {
        let url = to_share_url(&sample(), "https://example.com/").unwrap();
        assert_eq!(parse_share_url(&url).unwrap(), sample());
    }

    #[test]
    fn parse_share_url_with_other_params_and_fragment() {
        let colors = parse_share_url("https://x.test/?theme=dark&colors=FFFFFF-000000#top").unwrap();
        assert_eq!(colors, vec![Color::WHITE, Color::BLACK]);
    }

    #[test]
    fn parse_bare_query() {
        assert_eq!(parse_share_url("colors=ffffff").unwrap(), vec![Color::WHITE]);
    }

    #[test]
    fn parse_share_url_missing_param() {
        let err = parse_share_url("https://x.test/?theme=dark").unwrap_err();
        assert!(matches!(err, ColorError::InvalidShareUrl(_)));
        assert!(parse_share_url("https://x.test/?colors=").is_err());
    }

    #[test]
    fn parse_share_url_bad_color() {
        let err = parse_share_url("https://x.test/?colors=ffffff-xyz").unwrap_err();
        assert!(matches!(err, ColorError::InvalidColorFormat(_)));
    }

    #[test]
    fn url_keeps_existing_query() {
        let colors = [Color::new(255, 0, 0), Color::new(0, 0, 255)];
        let url = to_share_url(&colors, "https://x.test/p?theme=dark").unwrap();
        assert_eq!(url, "https://x.test/p?theme=dark&colors=ff0000-0000ff");
        assert_eq!(parse_share_url(&url).unwrap(), colors);
    }

    #[test]
    fn url_replaces_existing_colors() {
        let url = to_share_url(&sample(), "https://x.test/?colors=ffffff&a=1").unwrap();
        assert_eq!(url, "https://x.test/?a=1&colors=ff6b35-004e89");
    }

    #[test]
    fn url_rejects_relative_base() {
        assert!(matches!(
            to_share_url(&sample(), "palette"),
            Err(ColorError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn parse_share_url_percent_decodes() {
        let colors = parse_share_url("https://x.test/?colors=ff0000%2D0000ff").unwrap();
        assert_eq!(colors, vec![Color::new(255, 0, 0), Color::new(0, 0, 255)]);
        let colors = parse_share_url("?colors=ff0000%2d0000FF").unwrap();
        assert_eq!(colors, vec![Color::new(255, 0, 0), Color::new(0, 0, 255)]);
    }

    #[test]
    fn format_names() {
        assert_eq!("CSS".parse::<ExportFormat>().unwrap(), ExportFormat::Css);
        assert_eq!(ExportFormat::Json.to_string(), "json");
        assert!("png".parse::<ExportFormat>().is_err());
    }
}
