use super::NotFound;
use crate::app::AppContext;
use crate::components::{ProductCard, ProductCardSkeleton, SeoHead, SkeletonOverlay};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use mason_commerce::{CatalogEntry, Product};
use mason_seo::{Breadcrumb, PageMeta};

const MIN_PLACEHOLDERS: usize = 3;

#[component]
pub fn CategoryPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let params = use_params_map();

    move || {
        let id = params.get().get("id").unwrap_or_default();
        match ctx.catalog.category(&id).cloned() {
            Some(category) => view! { <CategoryListing category=category/> }.into_any(),
            None => view! { <NotFound/> }.into_any(),
        }
    }
}

#[component]
fn CategoryListing(category: CatalogEntry) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let products: Vec<Product> = ctx.catalog.products_in(&category.id).cloned().collect();
    let placeholders = products.len().max(MIN_PLACEHOLDERS);
    let loaded = RwSignal::new(false);

    let meta = PageMeta::new()
        .title(category.name.clone())
        .description(category.description.clone())
        .canonical(format!("/category/{}", category.id))
        .breadcrumbs(vec![
            Breadcrumb::new("Home", "/"),
            Breadcrumb::current(category.name.clone()),
        ]);

    view! {
        <SeoHead meta=meta/>
        <h1>{category.name.clone()}</h1>
        <p class="lead">{category.description.clone()}</p>

        <SkeletonOverlay visible=Signal::derive(move || !loaded.get()) on_complete=move || loaded.set(true)>
            <div class="products">
                {(0..placeholders).map(|_| view! { <ProductCardSkeleton/> }).collect_view()}
            </div>
        </SkeletonOverlay>

        <Show when=move || loaded.get()>
            {if products.is_empty() {
                view! { <p>"No products in this category yet."</p> }.into_any()
            } else {
                view! {
                    <div class="products">
                        {products.clone().into_iter().map(|product| view! { <ProductCard product=product/> }).collect_view()}
                    </div>
                }.into_any()
            }}
        </Show>
    }
}
