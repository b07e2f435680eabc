//! Seed catalog.
//!
//! The storefront ships its browsing categories, products and bookable
//! services. Ids double as URL segments.

use mason_commerce::{CatalogEntry, Currency, EntryId, Money, Product};

/// Everything the pages browse.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    /// Product categories shown on the home page.
    pub categories: Vec<CatalogEntry>,
    pub products: Vec<Product>,
    /// Service tree walked by the booking flow.
    pub services: Vec<CatalogEntry>,
}

impl Catalog {
    /// The built-in catalog.
    pub fn seed() -> Self {
        Self {
            categories: seed_categories(),
            products: seed_products(),
            services: seed_services(),
        }
    }

    pub fn category(&self, id: &str) -> Option<&CatalogEntry> {
        self.categories.iter().find(|c| c.id.as_str() == id)
    }

    pub fn product(&self, slug: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.slug == slug)
    }

    pub fn products_in<'a>(&'a self, category: &'a EntryId) -> impl Iterator<Item = &'a Product> {
        self.products.iter().filter(move |p| &p.category_id == category)
    }
}

fn seed_categories() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new("tiles", "Tiles")
            .with_description("Porcelain, ceramic and natural stone tiles")
            .with_image("/images/categories/tiles.jpg"),
        CatalogEntry::new("flooring", "Flooring")
            .with_description("Hardwood, laminate and vinyl planks")
            .with_image("/images/categories/flooring.jpg"),
        CatalogEntry::new("paint", "Paint & Finishes")
            .with_description("Interior paints, primers and sealers")
            .with_image("/images/categories/paint.jpg"),
        CatalogEntry::new("decor", "Décor")
            .with_description("Lighting, mirrors and wall accents")
            .with_image("/images/categories/decor.jpg"),
    ]
}

struct Seed {
    slug: &'static str,
    sku: &'static str,
    name: &'static str,
    brand: &'static str,
    description: &'static str,
    cents: i64,
    stock: i64,
    rating: Option<(f32, u32)>,
    category: &'static str,
}

const PRODUCTS: &[Seed] = &[
    Seed {
        slug: "carrara-marble-tile",
        sku: "TIL-CAR-60",
        name: "Carrara Marble Tile 60x60",
        brand: "Lapis",
        description: "Polished Italian marble with soft grey veining. Sold per square metre.",
        cents: 4599,
        stock: 120,
        rating: Some((4.7, 38)),
        category: "tiles",
    },
    Seed {
        slug: "terracotta-hex-tile",
        sku: "TIL-TER-HX",
        name: "Terracotta Hex Tile",
        brand: "Fornace",
        description: "Handmade hexagonal terracotta for warm, rustic floors.",
        cents: 3250,
        stock: 0,
        rating: Some((4.2, 11)),
        category: "tiles",
    },
    Seed {
        slug: "oak-engineered-plank",
        sku: "FLR-OAK-190",
        name: "Engineered Oak Plank 190mm",
        brand: "Nordwood",
        description: "Brushed and oiled oak top layer on a stable multi-ply core.",
        cents: 5890,
        stock: 64,
        rating: Some((4.8, 52)),
        category: "flooring",
    },
    Seed {
        slug: "stone-look-vinyl",
        sku: "FLR-SPC-ST",
        name: "Stone-Look SPC Vinyl",
        brand: "Aquafloor",
        description: "Waterproof rigid-core vinyl with a slate texture.",
        cents: 2799,
        stock: 300,
        rating: None,
        category: "flooring",
    },
    Seed {
        slug: "limewash-paint",
        sku: "PNT-LIM-5L",
        name: "Mineral Limewash 5L",
        brand: "Calce",
        description: "Breathable mineral paint for a soft, clouded finish.",
        cents: 6400,
        stock: 40,
        rating: Some((4.5, 19)),
        category: "paint",
    },
    Seed {
        slug: "arched-brass-mirror",
        sku: "DEC-MIR-ARC",
        name: "Arched Brass Mirror",
        brand: "Atelier M",
        description: "Slim brushed-brass frame, 60x120cm.",
        cents: 18900,
        stock: 8,
        rating: None,
        category: "decor",
    },
];

fn seed_products() -> Vec<Product> {
    PRODUCTS
        .iter()
        .map(|s| {
            let mut product = Product::new(
                s.slug,
                s.sku,
                s.name,
                Money::new(s.cents, Currency::USD),
                s.category,
            );
            product.brand = s.brand.to_string();
            product.description = s.description.to_string();
            product.images = vec![format!("/images/products/{}.jpg", s.slug)];
            product.stock = s.stock;
            product.rating = s.rating.map(|(r, _)| r);
            product.review_count = s.rating.map(|(_, n)| n);
            product
        })
        .collect()
}

fn service(id: &str, name: &str, description: &str) -> CatalogEntry {
    CatalogEntry::new(id, name).with_description(description)
}

fn seed_services() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new("flooring-services", "Flooring")
            .with_description("Installation and repair for every floor type")
            .with_image("/images/services/flooring.jpg")
            .with_children(vec![
                CatalogEntry::new("hardwood", "Hardwood")
                    .with_description("Solid and engineered wood floors")
                    .with_children(vec![
                        service("hardwood-install", "Installation", "Fitting over screed or joists"),
                        service("hardwood-refinish", "Sanding & Refinishing", "Restore worn boards"),
                    ]),
                CatalogEntry::new("tile-floor", "Tile")
                    .with_description("Ceramic, porcelain and stone floors")
                    .with_children(vec![
                        service("tile-install", "Installation", "Levelling, laying and grouting"),
                        service("tile-regrout", "Regrouting", "Replace cracked or stained grout"),
                    ]),
            ]),
        CatalogEntry::new("painting", "Painting")
            .with_description("Interior walls, ceilings and trim")
            .with_image("/images/services/painting.jpg")
            .with_children(vec![
                service("paint-room", "Single Room", "Walls and ceiling of one room"),
                service("paint-feature", "Feature Wall", "Limewash or colour-block accent wall"),
            ]),
        CatalogEntry::new("design-consult", "Design Consultation")
            .with_description("An hour with a Mason designer, in store or at home")
            .with_image("/images/services/consult.jpg"),
    ]
}
