use crate::app::AppContext;
use crate::components::{ProductCard, SelectionGrid, SeoHead};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use mason_commerce::CatalogEntry;
use mason_seo::PageMeta;

const FEATURED: usize = 3;

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let navigate = use_navigate();

    let open_category = Callback::new(move |entry: CatalogEntry| {
        navigate(&format!("/category/{}", entry.id), Default::default());
    });

    let featured = ctx
        .catalog
        .products
        .iter()
        .filter(|p| p.in_stock())
        .take(FEATURED)
        .cloned()
        .map(|product| view! { <ProductCard product=product/> })
        .collect_view();

    view! {
        <SeoHead meta=PageMeta::new().canonical("/")/>

        <section class="hero">
            <h1>{ctx.site.default_title.clone()}</h1>
            <p>{ctx.site.default_description.clone()}</p>
            <a href="/booking" class="btn">"Book an installation"</a>
        </section>

        <h2>"Shop by category"</h2>
        <SelectionGrid entries=ctx.catalog.categories.clone() on_select=open_category/>

        <h2>"Featured products"</h2>
        <div class="products">{featured}</div>
    }
}
