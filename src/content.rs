//! Content Loading
//!
//! Resolves a documentation slug to page content. Any failure becomes a
//! "not found" page; the cause is only logged.

use async_trait::async_trait;
use percent_encoding::percent_decode_str;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ContentError {
    #[error("invalid slug `{0}`")]
    InvalidSlug(String),
    #[error("no content for slug `{0}`")]
    Missing(String),
    #[error("content source unavailable: {0}")]
    Unavailable(String),
}

/// A resolved documentation page
#[derive(Debug, Clone, PartialEq)]
pub struct DocContent {
    pub slug: String,
    pub title: String,
    pub body: String,
}

/// What the doc route renders
#[derive(Debug, Clone, PartialEq)]
pub enum PageOutcome {
    Found(DocContent),
    NotFound,
}

/// Source of documentation content
#[async_trait(?Send)]
pub trait ContentLoader {
    async fn load(&self, slug: &str) -> Result<DocContent, ContentError>;
}

/// Decode a raw route segment into a slug
pub fn decode_slug(raw: &str) -> Result<String, ContentError> {
    let slug = percent_decode_str(raw)
        .decode_utf8()
        .map_err(|_| ContentError::InvalidSlug(raw.to_string()))?
        .into_owned();
    if slug.is_empty() || slug.contains('/') || slug.trim() != slug {
        return Err(ContentError::InvalidSlug(raw.to_string()));
    }
    Ok(slug)
}

/// Stand-in until a real content source (files, CMS) is wired up
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderLoader;

#[async_trait(?Send)]
impl ContentLoader for PlaceholderLoader {
    async fn load(&self, slug: &str) -> Result<DocContent, ContentError> {
        let slug = decode_slug(slug)?;
        Ok(DocContent {
            body: format!("Content for {} will be loaded here.", slug),
            title: "Documentation".to_string(),
            slug,
        })
    }
}

/// Load `slug`, turning every error into `PageOutcome::NotFound`
pub async fn resolve_page<L>(loader: &L, slug: &str) -> PageOutcome
where
    L: ContentLoader + ?Sized,
{
    match loader.load(slug).await {
        Ok(content) => PageOutcome::Found(content),
        Err(e) => {
            log::error!("Error loading content for slug \"{}\": {}", slug, e);
            PageOutcome::NotFound
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingLoader(ContentError);

    #[async_trait(?Send)]
    impl ContentLoader for FailingLoader {
        async fn load(&self, _slug: &str) -> Result<DocContent, ContentError> {
            Err(self.0.clone())
        }
    }

    #[tokio::test]
    async fn test_failing_loader_yields_not_found() {
        for error in [
            ContentError::Missing("missing-page".into()),
            ContentError::Unavailable("offline".into()),
            ContentError::InvalidSlug("missing-page".into()),
        ] {
            let outcome = resolve_page(&FailingLoader(error), "missing-page").await;
            assert_eq!(outcome, PageOutcome::NotFound);
        }
    }

    #[tokio::test]
    async fn test_placeholder_content() {
        let outcome = resolve_page(&PlaceholderLoader, "getting-started").await;
        match outcome {
            PageOutcome::Found(doc) => {
                assert_eq!(doc.slug, "getting-started");
                assert_eq!(doc.title, "Documentation");
                assert_eq!(doc.body, "Content for getting-started will be loaded here.");
            }
            PageOutcome::NotFound => panic!("placeholder should resolve"),
        }
    }

    #[tokio::test]
    async fn test_placeholder_rejects_bad_slugs() {
        assert_eq!(resolve_page(&PlaceholderLoader, "").await, PageOutcome::NotFound);
        assert_eq!(resolve_page(&PlaceholderLoader, "a%2Fb").await, PageOutcome::NotFound);
        assert_eq!(resolve_page(&PlaceholderLoader, "%FF").await, PageOutcome::NotFound);
    }

    #[tokio::test]
    async fn test_works_through_trait_object() {
        let loader: Box<dyn ContentLoader> = Box::new(FailingLoader(ContentError::Missing("x".into())));
        assert_eq!(resolve_page(loader.as_ref(), "x").await, PageOutcome::NotFound);
    }

    #[test]
    fn test_decode_slug() {
        assert_eq!(decode_slug("core-concepts"), Ok("core-concepts".to_string()));
        assert_eq!(decode_slug("hello%20world"), Ok("hello world".to_string()));
        assert_eq!(decode_slug("%20"), Err(ContentError::InvalidSlug("%20".to_string())));
    }

    #[test]
    fn test_decode_slug_rejects_surrounding_whitespace() {
        for raw in ["%20foo", "foo%20", "%09foo", "foo%0A"] {
            assert_eq!(decode_slug(raw), Err(ContentError::InvalidSlug(raw.to_string())), "{}", raw);
        }
    }

    #[tokio::test]
    async fn test_padded_slug_is_not_found() {
        let outcome = resolve_page(&PlaceholderLoader, "%20theming").await;
        assert_eq!(outcome, PageOutcome::NotFound);
    }
}
