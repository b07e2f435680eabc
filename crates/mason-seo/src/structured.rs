//! schema.org structured data.
//!
//! Field order in the emitted JSON follows struct declaration order, which
//! keeps the output stable for crawlers and snapshot comparisons.

use crate::{SeoError, SiteDefaults};
use mason_commerce::{Money, Product};
use serde::Serialize;

const SCHEMA_CONTEXT: &str = "https://schema.org";
const IN_STOCK: &str = "https://schema.org/InStock";
const OUT_OF_STOCK: &str = "https://schema.org/OutOfStock";

/// Highest rating accepted into `aggregateRating`.
pub const MAX_RATING: f32 = 5.0;

/// Product fields a page hands to the metadata injector.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSummary {
    pub name: String,
    pub description: String,
    pub images: Vec<String>,
    pub sku: String,
    pub brand: Option<String>,
    pub price: Money,
    pub in_stock: bool,
    pub rating: Option<f32>,
    pub review_count: Option<u32>,
}

impl ProductSummary {
    /// Check that every required schema.org field can be filled.
    pub fn validate(&self) -> Result<(), SeoError> {
        if self.name.trim().is_empty() {
            return Err(SeoError::InvalidProduct {
                field: "name",
                reason: "must not be blank".into(),
            });
        }
        if self.sku.trim().is_empty() {
            return Err(SeoError::InvalidProduct {
                field: "sku",
                reason: "must not be blank".into(),
            });
        }
        if self.price.is_negative() {
            return Err(SeoError::InvalidProduct {
                field: "price",
                reason: format!("negative amount {}", self.price.amount_cents),
            });
        }
        Ok(())
    }

    /// Rating usable for `aggregateRating`, if present and in range.
    pub fn usable_rating(&self) -> Option<f32> {
        self.rating
            .filter(|r| r.is_finite() && (0.0..=MAX_RATING).contains(r))
    }
}

impl From<&Product> for ProductSummary {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            images: product.images.clone(),
            sku: product.sku.clone(),
            brand: Some(product.brand.clone()).filter(|b| !b.trim().is_empty()),
            price: product.price,
            in_stock: product.in_stock(),
            rating: product.rating,
            review_count: product.review_count,
        }
    }
}

/// One step of a breadcrumb trail.
#[derive(Debug, Clone, PartialEq)]
pub struct Breadcrumb {
    pub name: String,
    /// Site-relative path; the current page usually has none.
    pub path: Option<String>,
}

impl Breadcrumb {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: Some(path.into()),
        }
    }

    /// A crumb that does not link anywhere.
    pub fn current(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: None,
        }
    }
}

#[derive(Debug, Serialize)]
struct Typed<T> {
    #[serde(rename = "@type")]
    kind: &'static str,
    #[serde(flatten)]
    body: T,
}

#[derive(Debug, Serialize)]
struct Named {
    name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Offer {
    price: String,
    price_currency: &'static str,
    availability: &'static str,
    url: String,
    seller: Typed<Named>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AggregateRating {
    rating_value: f32,
    best_rating: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    review_count: Option<u32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProductLd {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: String,
    description: String,
    image: Vec<String>,
    sku: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    brand: Option<Typed<Named>>,
    offers: Typed<Offer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    aggregate_rating: Option<Typed<AggregateRating>>,
}

#[derive(Debug, Serialize)]
struct ListItem {
    #[serde(rename = "@type")]
    kind: &'static str,
    position: usize,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    item: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BreadcrumbListLd {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    item_list_element: Vec<ListItem>,
}

/// Render a schema.org `Product` block.
///
/// Fails without emitting anything when the product does not validate.
pub fn product_json_ld(
    product: &ProductSummary,
    canonical_url: &str,
    site: &SiteDefaults,
) -> Result<String, SeoError> {
    product.validate()?;

    let ld = ProductLd {
        context: SCHEMA_CONTEXT,
        kind: "Product",
        name: product.name.trim().to_string(),
        description: product.description.clone(),
        image: product
            .images
            .iter()
            .filter(|i| !i.trim().is_empty())
            .map(|i| site.absolute_url(i))
            .collect(),
        sku: product.sku.trim().to_string(),
        brand: product
            .brand
            .as_deref()
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .map(|b| Typed {
                kind: "Brand",
                body: Named { name: b.to_string() },
            }),
        offers: Typed {
            kind: "Offer",
            body: Offer {
                price: product.price.display_amount(),
                price_currency: product.price.currency.code(),
                availability: if product.in_stock { IN_STOCK } else { OUT_OF_STOCK },
                url: canonical_url.to_string(),
                seller: Typed {
                    kind: "Organization",
                    body: Named {
                        name: site.seller_name.clone(),
                    },
                },
            },
        },
        aggregate_rating: product.usable_rating().map(|rating| Typed {
            kind: "AggregateRating",
            body: AggregateRating {
                rating_value: rating,
                best_rating: MAX_RATING,
                review_count: product.review_count,
            },
        }),
    };

    Ok(serde_json::to_string(&ld)?)
}

/// Render a schema.org `BreadcrumbList` block, or `None` for an empty trail.
pub fn breadcrumb_json_ld(
    crumbs: &[Breadcrumb],
    site: &SiteDefaults,
) -> Result<Option<String>, SeoError> {
    if crumbs.is_empty() {
        return Ok(None);
    }

    let ld = BreadcrumbListLd {
        context: SCHEMA_CONTEXT,
        kind: "BreadcrumbList",
        item_list_element: crumbs
            .iter()
            .enumerate()
            .map(|(i, crumb)| ListItem {
                kind: "ListItem",
                position: i + 1,
                name: crumb.name.clone(),
                item: crumb.path.as_deref().map(|p| site.absolute_url(p)),
            })
            .collect(),
    };

    Ok(Some(serde_json::to_string(&ld)?))
}
