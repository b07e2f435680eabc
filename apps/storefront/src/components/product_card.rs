use leptos::prelude::*;
use mason_commerce::Product;

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let href = product.href();
    let price = product.price_display();
    let image = product.primary_image().map(str::to_string);
    let stock = if product.in_stock() {
        format!("{} in stock", product.stock)
    } else {
        "Out of stock".to_string()
    };

    view! {
        <div class="product-card">
            {match image {
                Some(src) => view! { <img src=src alt=product.name.clone() loading="lazy"/> }.into_any(),
                None => view! { <div class="product-image-placeholder"></div> }.into_any(),
            }}
            <div class="product-info">
                <h3>{product.name}</h3>
                <p class="brand">{product.brand}</p>
                <p class="price">{price}</p>
                <p class="stock">{stock}</p>
                <a href=href class="btn">"View details"</a>
            </div>
        </div>
    }
}

#[component]
pub fn ProductCardSkeleton() -> impl IntoView {
    view! {
        <div class="product-card">
            <div class="skeleton skeleton-image"></div>
            <div class="product-info">
                <div class="skeleton skeleton-title"></div>
                <div class="skeleton skeleton-price"></div>
            </div>
        </div>
    }
}
