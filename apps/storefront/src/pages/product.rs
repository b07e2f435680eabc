use super::NotFound;
use crate::app::AppContext;
use crate::components::{SeoHead, Toast};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use mason_commerce::Product;
use mason_core::overlay::Tone;
use mason_seo::{Breadcrumb, ContentType, PageMeta, ProductSummary};

#[component]
pub fn ProductPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let params = use_params_map();

    move || {
        let slug = params.get().get("slug").unwrap_or_default();
        match ctx.catalog.product(&slug).cloned() {
            Some(product) => view! { <ProductDetail product=product/> }.into_any(),
            None => view! { <NotFound/> }.into_any(),
        }
    }
}

fn product_meta(product: &Product, category_name: Option<&str>) -> PageMeta {
    let mut crumbs = vec![Breadcrumb::new("Home", "/")];
    if let Some(name) = category_name {
        crumbs.push(Breadcrumb::new(name, format!("/category/{}", product.category_id)));
    }
    crumbs.push(Breadcrumb::current(product.name.clone()));

    let mut meta = PageMeta::new()
        .title(product.name.clone())
        .description(product.description.clone())
        .canonical(product.href())
        .content_type(ContentType::Product)
        .product(ProductSummary::from(product))
        .breadcrumbs(crumbs);
    if let Some(image) = product.primary_image() {
        meta = meta.image(image);
    }
    meta
}

#[component]
fn ProductDetail(product: Product) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let category_name = ctx
        .catalog
        .category(product.category_id.as_str())
        .map(|c| c.name.clone());
    let meta = product_meta(&product, category_name.as_deref());
    let added = RwSignal::new(false);
    let in_stock = product.in_stock();
    let toast_message = format!("Added {} to your cart", product.name);

    view! {
        <SeoHead meta=meta/>
        <div class="product-detail">
            {product.primary_image().map(|src| view! { <img src=src.to_string() alt=product.name.clone()/> })}
            <div>
                <p class="brand">{product.brand.clone()}</p>
                <h1>{product.name.clone()}</h1>
                <p class="price">{product.price_display()}</p>
                <p>{product.description.clone()}</p>
                <p class="stock">
                    {if in_stock { format!("{} in stock", product.stock) } else { "Out of stock".to_string() }}
                </p>
                <button class="btn" disabled=!in_stock on:click=move |_| added.set(true)>
                    "Add to cart"
                </button>
            </div>
        </div>
        <Toast visible=added message=toast_message tone=Tone::Success/>
    }
}
