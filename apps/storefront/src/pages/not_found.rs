use crate::components::SeoHead;
use leptos::prelude::*;
use mason_seo::PageMeta;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <SeoHead meta=PageMeta::new().title("Page not found").no_index(true)/>
        <section class="status-card">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a class="btn" href="/">"Back to home"</a>
        </section>
    }
}
