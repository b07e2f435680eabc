use crate::app::AppContext;
use crate::components::{SelectionGrid, SeoHead};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use mason_commerce::{BookingFlow, BookingStep, CatalogEntry};
use mason_seo::{Breadcrumb, PageMeta};

const STEPS: [BookingStep; 4] = [
    BookingStep::Category,
    BookingStep::Subcategory,
    BookingStep::Service,
    BookingStep::Review,
];

#[component]
pub fn BookingPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let flow = RwSignal::new(BookingFlow::new(ctx.catalog.services.clone()));
    let step = Memo::new(move |_| flow.with(BookingFlow::step));
    let navigate = use_navigate();

    let choose = Callback::new(move |entry: CatalogEntry| {
        match flow.try_update(|f| f.select(&entry.id)) {
            Some(Ok(next)) => tracing::debug!(entry = %entry.id, step = next.as_str(), "booking advanced"),
            Some(Err(e)) => tracing::warn!(entry = %entry.id, error = %e, "booking selection rejected"),
            None => {}
        }
    });

    let confirm = move |_: leptos::ev::MouseEvent| match flow.with(BookingFlow::booking_path) {
        Ok(path) => navigate(&path, Default::default()),
        Err(e) => tracing::warn!(error = %e, "booking not ready"),
    };

    let steps = STEPS
        .into_iter()
        .map(|s| {
            view! {
                <li class:current=move || step.get() == s>
                    {format!("{}. {}", s.number(), s.display_name())}
                </li>
            }
        })
        .collect_view();

    let body = move || {
        if step.get() != BookingStep::Review {
            let entries = flow.with(|f| f.entries().to_vec());
            return view! { <SelectionGrid entries=entries on_select=choose/> }.into_any();
        }
        let summary = flow.with(|f| f.selection().and_then(|s| s.describe(f.catalog())));
        match summary {
            Some(summary) => view! {
                <dl class="booking-summary">
                    <dt>"Category"</dt>
                    <dd>{summary.category}</dd>
                    {summary.subcategory.map(|name| view! { <dt>"Type"</dt><dd>{name}</dd> })}
                    <dt>"Service"</dt>
                    <dd>{summary.service}</dd>
                </dl>
            }
            .into_any(),
            None => view! { <p>"That service is no longer available."</p> }.into_any(),
        }
    };

    view! {
        <SeoHead meta=PageMeta::new()
            .title("Book a service")
            .description("Book installation, repair and design services with Mason.")
            .canonical("/booking")
            .breadcrumbs(vec![Breadcrumb::new("Home", "/"), Breadcrumb::current("Book a service")])/>

        <h1>"Book a service"</h1>
        <ol class="steps">{steps}</ol>
        <h2>{move || step.get().display_name()}</h2>

        {body}

        <div class="actions">
            <button
                class="btn btn--ghost"
                disabled=move || step.get() == BookingStep::Category
                on:click=move |_| flow.update(|f| {
                    f.back();
                })
            >
                "Back"
            </button>
            <button class="btn btn--ghost" on:click=move |_| flow.update(BookingFlow::reset)>
                "Start over"
            </button>
            <Show when=move || step.get() == BookingStep::Review>
                <button class="btn" on:click=confirm.clone()>"Continue to booking"</button>
            </Show>
        </div>
    }
}
