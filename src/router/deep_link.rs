//! URL-facing routing.
//!
//! [`UrlRouter`] derives segments from a full URL and passes the URL itself to
//! handlers as a [`DeepLink`], so query and fragment reach the handler
//! untouched even though they never take part in matching.

use anyhow::{Context, Result};
use smallvec::SmallVec;
use url::Url;

use crate::pattern::Component;
use crate::runtime_config::RouterConfig;
use crate::segments::{as_segments, url_segments};

use super::core::Routes;

/// Maximum number of query parameters before heap allocation.
pub const MAX_INLINE_QUERY_PARAMS: usize = 8;

/// Decoded query pairs in URL order.
pub type QueryVec = SmallVec<[(String, String); MAX_INLINE_QUERY_PARAMS]>;

/// A parsed deep link: the URL, its decoded path segments and query pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepLink {
    url: Url,
    segments: Vec<String>,
    query_params: QueryVec,
}

impl DeepLink {
    #[must_use]
    pub fn new(url: Url) -> Self {
        let segments = url_segments(&url);
        let query_params = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        Self {
            url,
            segments,
            query_params,
        }
    }

    /// Parse a URL string into a deep link.
    ///
    /// # Errors
    ///
    /// Returns the URL library's parse error for malformed input.
    pub fn parse(input: &str) -> Result<Self, url::ParseError> {
        Url::parse(input).map(Self::new)
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Decoded path segments, the input to matching.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Raw query string, without the leading `?`.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.url.query()
    }

    /// Raw fragment, without the leading `#`.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.url.fragment()
    }

    #[must_use]
    pub fn query_params(&self) -> &[(String, String)] {
        &self.query_params
    }

    /// Get a query parameter by name
    ///
    /// Uses "last write wins" semantics: if duplicate query parameter names exist
    /// (e.g., `?tab=a&tab=b`), returns the last occurrence.
    #[must_use]
    pub fn get_query_param(&self, name: &str) -> Option<&str> {
        self.query_params
            .iter()
            .rfind(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

impl From<Url> for DeepLink {
    fn from(url: Url) -> Self {
        Self::new(url)
    }
}

/// URL-facing router: handlers receive the [`DeepLink`] and the capture.
///
/// ```rust
/// use pathrouter::pattern::{seq, Literal, OptionalParameter};
/// use pathrouter::UrlRouter;
/// use std::sync::Arc;
/// use std::sync::Mutex;
///
/// let seen = Arc::new(Mutex::new(None));
/// let mut router = UrlRouter::new();
///
/// let sink = Arc::clone(&seen);
/// router.add(
///     seq().then(Literal::new("search")).then(OptionalParameter),
///     move |link, query: Option<String>| {
///         let page = link.get_query_param("page").map(str::to_owned);
///         *sink.lock().unwrap() = Some((query, page));
///     },
/// );
///
/// assert!(router.handle_str("https://example.com/search/rust?page=2")?);
/// assert_eq!(
///     *seen.lock().unwrap(),
///     Some((Some("rust".to_string()), Some("2".to_string())))
/// );
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct UrlRouter {
    routes: Routes<DeepLink>,
}

impl UrlRouter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: RouterConfig) -> Self {
        Self {
            routes: Routes::with_config(config),
        }
    }

    /// Register `handler` for URLs whose path is fully matched by `pattern`.
    pub fn add<P, H>(&mut self, pattern: P, handler: H) -> &mut Self
    where
        P: Component,
        H: Fn(&DeepLink, P::Output) + Send + Sync + 'static,
    {
        self.routes.add(pattern, handler);
        self
    }

    pub fn add_labeled<P, H>(&mut self, label: &str, pattern: P, handler: H) -> &mut Self
    where
        P: Component,
        H: Fn(&DeepLink, P::Output) + Send + Sync + 'static,
    {
        self.routes.add_labeled(label, pattern, handler);
        self
    }

    /// Run the first handler whose pattern fully matches the link's path.
    pub fn handle_link(&self, link: &DeepLink) -> bool {
        self.routes
            .dispatch_strs(&as_segments(link.segments()), link)
            .is_some()
    }

    pub fn handle(&self, url: &Url) -> bool {
        self.handle_link(&DeepLink::new(url.clone()))
    }

    /// Parse `input` and dispatch it.
    ///
    /// # Errors
    ///
    /// Returns an error if `input` is not a valid absolute URL. A URL that
    /// parses but matches no route is `Ok(false)`, not an error.
    pub fn handle_str(&self, input: &str) -> Result<bool> {
        let link = DeepLink::parse(input).with_context(|| format!("Invalid deep link URL: {input}"))?;
        Ok(self.handle_link(&link))
    }

    #[must_use]
    pub fn routes(&self) -> &Routes<DeepLink> {
        &self.routes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl From<UrlRouter> for Routes<DeepLink> {
    fn from(router: UrlRouter) -> Self {
        router.routes
    }
}
