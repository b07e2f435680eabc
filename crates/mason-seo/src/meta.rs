//! Per-page metadata input and resolution.

use crate::structured::{breadcrumb_json_ld, product_json_ld};
use crate::{Breadcrumb, ProductSummary, SiteDefaults};

/// Open Graph content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentType {
    #[default]
    Website,
    Product,
    Article,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Website => "website",
            ContentType::Product => "product",
            ContentType::Article => "article",
        }
    }
}

/// Which attribute a `<meta>` tag is keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaAttr {
    /// `<meta name=...>`
    Name,
    /// `<meta property=...>`
    Property,
}

/// A single `<meta>` tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
    pub attr: MetaAttr,
    pub key: String,
    pub content: String,
}

impl MetaTag {
    pub fn name(key: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            attr: MetaAttr::Name,
            key: key.into(),
            content: content.into(),
        }
    }

    pub fn property(key: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            attr: MetaAttr::Property,
            key: key.into(),
            content: content.into(),
        }
    }
}

/// What a page knows about itself.
///
/// Every field is optional; [`PageMeta::resolve`] fills gaps from
/// [`SiteDefaults`].
///
/// # Example
///
/// ```rust,ignore
/// let meta = PageMeta::new()
///     .title("Carrara Marble Tile")
///     .canonical("/product/carrara")
///     .content_type(ContentType::Product)
///     .resolve(&site);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageMeta {
    title: Option<String>,
    description: Option<String>,
    keywords: Vec<String>,
    image: Option<String>,
    canonical: Option<String>,
    content_type: ContentType,
    product: Option<ProductSummary>,
    breadcrumbs: Vec<Breadcrumb>,
    no_index: bool,
    extra_tags: Vec<MetaTag>,
}

impl PageMeta {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn keywords<I, K>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Canonical path, relative to the site or absolute.
    pub fn canonical(mut self, path: impl Into<String>) -> Self {
        self.canonical = Some(path.into());
        self
    }

    pub fn content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = content_type;
        self
    }

    pub fn product(mut self, product: ProductSummary) -> Self {
        self.product = Some(product);
        self
    }

    pub fn breadcrumbs(mut self, crumbs: Vec<Breadcrumb>) -> Self {
        self.breadcrumbs = crumbs;
        self
    }

    pub fn no_index(mut self, no_index: bool) -> Self {
        self.no_index = no_index;
        self
    }

    pub fn extra_tag(mut self, tag: MetaTag) -> Self {
        self.extra_tags.push(tag);
        self
    }

    /// Merge with site defaults into the tags a document head needs.
    pub fn resolve(&self, site: &SiteDefaults) -> ResolvedMeta {
        let title = non_blank(&self.title)
            .map(|t| format!("{} | {}", t, site.site_name))
            .unwrap_or_else(|| site.default_title.clone());
        let description = non_blank(&self.description)
            .unwrap_or(&site.default_description)
            .to_string();
        let keywords = if self.keywords.is_empty() {
            site.default_keywords.join(", ")
        } else {
            self.keywords.join(", ")
        };
        let image = site.absolute_url(non_blank(&self.image).unwrap_or(&site.default_image));
        let canonical_url = site.absolute_url(non_blank(&self.canonical).unwrap_or(""));
        let robots = if self.no_index {
            "noindex, nofollow"
        } else {
            "index, follow"
        };

        let mut tags = vec![
            MetaTag::property("og:title", &title),
            MetaTag::property("og:description", &description),
            MetaTag::property("og:image", &image),
            MetaTag::property("og:url", &canonical_url),
            MetaTag::property("og:type", self.content_type.as_str()),
            MetaTag::property("og:site_name", &site.site_name),
            MetaTag::name("twitter:card", "summary_large_image"),
            MetaTag::name("twitter:title", &title),
            MetaTag::name("twitter:description", &description),
            MetaTag::name("twitter:image", &image),
        ];
        if let Some(handle) = non_blank(&site.twitter_handle) {
            tags.push(MetaTag::name("twitter:site", handle));
        }
        tags.extend(self.extra_tags.iter().cloned());

        let mut json_ld = Vec::with_capacity(2);
        if let Some(product) = &self.product {
            match product_json_ld(product, &canonical_url, site) {
                Ok(block) => json_ld.push(block),
                Err(e) => tracing::warn!(
                    error = %e,
                    sku = product.sku.as_str(),
                    url = canonical_url.as_str(),
                    "dropping product structured data"
                ),
            }
        }
        match breadcrumb_json_ld(&self.breadcrumbs, site) {
            Ok(Some(block)) => json_ld.push(block),
            Ok(None) => {}
            Err(e) => tracing::warn!(error = %e, "dropping breadcrumb structured data"),
        }

        ResolvedMeta {
            title,
            description,
            keywords,
            canonical_url,
            robots,
            tags,
            json_ld,
        }
    }
}

/// Everything a document head renders for one page.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedMeta {
    pub title: String,
    pub description: String,
    /// Comma-separated keyword list.
    pub keywords: String,
    pub canonical_url: String,
    pub robots: &'static str,
    /// Open Graph and Twitter tags, then page extras.
    pub tags: Vec<MetaTag>,
    /// Serialized `application/ld+json` blocks, product first.
    pub json_ld: Vec<String>,
}

impl ResolvedMeta {
    /// Content of the first tag with this key.
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|t| t.key == key)
            .map(|t| t.content.as_str())
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
