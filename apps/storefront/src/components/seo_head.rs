//! Document head metadata.

use crate::app::AppContext;
use leptos::prelude::*;
use leptos_meta::{Link, Meta, Script, Title};
use mason_seo::{MetaAttr, PageMeta};

/// Title, social tags, canonical link and JSON-LD for one page.
#[component]
pub fn SeoHead(meta: PageMeta) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let resolved = meta.resolve(&ctx.site);

    let tags = resolved
        .tags
        .into_iter()
        .map(|tag| match tag.attr {
            MetaAttr::Name => view! { <Meta name=tag.key content=tag.content/> }.into_any(),
            MetaAttr::Property => {
                view! { <Meta property=tag.key content=tag.content/> }.into_any()
            }
        })
        .collect_view();

    let structured = resolved
        .json_ld
        .into_iter()
        .map(|block| view! { <Script type_="application/ld+json">{block}</Script> })
        .collect_view();

    view! {
        <Title text=resolved.title/>
        <Meta name="description" content=resolved.description/>
        <Meta name="keywords" content=resolved.keywords/>
        <Meta name="robots" content=resolved.robots/>
        <Link rel="canonical" href=resolved.canonical_url/>
        {tags}
        {structured}
    }
}
