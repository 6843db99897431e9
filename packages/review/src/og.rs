//! Open Graph page metadata.
//!
//! Every page carries the same title and description; the preview image is
//! generated by the OG image endpoint from query parameters.

use serde::Serialize;
use url::Url;

use crate::config::{
    OG_DESCRIPTION, OG_DESCRIPTION_PREVIEW_CHARS, OG_IMAGE_DEFAULT_DESCRIPTION,
    OG_IMAGE_DEFAULT_TITLE, OG_IMAGE_PATH, OG_TITLE,
};
use crate::error::Result;

/// Open Graph tags for one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OgTags {
    pub title: String,
    pub description: String,
    pub url: String,
    pub image: String,
}

impl OgTags {
    /// Build tags for the page at `path` on `origin`.
    ///
    /// The page URL drops any query string or fragment from `path`. The
    /// image URL carries the title and a shortened description.
    ///
    /// # Examples
    /// ```
    /// use contract_review::og::OgTags;
    ///
    /// let tags = OgTags::for_page("https://review.example", "/result").unwrap();
    /// assert_eq!(tags.url, "https://review.example/result");
    /// assert!(tags.image.starts_with("https://review.example/api/og?title="));
    /// ```
    pub fn for_page(origin: &str, path: &str) -> Result<Self> {
        let origin = Url::parse(origin)?;
        let mut page = origin.join(path)?;
        page.set_query(None);
        page.set_fragment(None);

        let mut image = origin.join(OG_IMAGE_PATH)?;
        image
            .query_pairs_mut()
            .append_pair("title", OG_TITLE)
            .append_pair("description", &description_preview(OG_DESCRIPTION));

        Ok(Self {
            title: OG_TITLE.to_string(),
            description: OG_DESCRIPTION.to_string(),
            url: page.to_string(),
            image: image.to_string(),
        })
    }
}

/// Shorten a description for the image URL.
fn description_preview(description: &str) -> String {
    let preview: String = description.chars().take(OG_DESCRIPTION_PREVIEW_CHARS).collect();
    format!("{preview}...")
}

/// Parameters accepted by the OG image endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OgImageParams {
    pub title: String,
    pub description: String,
}

impl OgImageParams {
    /// Read parameters from decoded query pairs, falling back to defaults.
    ///
    /// Empty values count as missing.
    pub fn from_query<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut title = None;
        let mut description = None;

        for (key, value) in pairs {
            match key {
                "title" if title.is_none() => title = Some(value),
                "description" if description.is_none() => description = Some(value),
                _ => {}
            }
        }

        Self {
            title: non_empty_or(title, OG_IMAGE_DEFAULT_TITLE),
            description: non_empty_or(description, OG_IMAGE_DEFAULT_DESCRIPTION),
        }
    }

    /// Read parameters from a full image URL.
    pub fn from_url(image_url: &str) -> Result<Self> {
        let url = Url::parse(image_url)?;
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        Ok(Self::from_query(
            pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())),
        ))
    }
}

fn non_empty_or(value: Option<&str>, default: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}
