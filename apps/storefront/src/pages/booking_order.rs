use super::current_query;
use crate::app::AppContext;
use crate::components::SeoHead;
use leptos::prelude::*;
use mason_commerce::BookingSelection;
use mason_seo::PageMeta;

/// Confirms the selection carried in the query.
#[component]
pub fn BookingOrderPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let query = current_query();

    let summary = match BookingSelection::from_query(&query) {
        Ok(selection) => selection.describe(&ctx.catalog.services),
        Err(e) => {
            tracing::warn!(query = query.as_str(), error = %e, "unreadable booking selection");
            None
        }
    };

    let content = match summary {
        Some(summary) => view! {
            <section class="status-card">
                <h1>"Your booking"</h1>
                <dl class="booking-summary">
                    <dt>"Category"</dt>
                    <dd>{summary.category}</dd>
                    {summary.subcategory.map(|name| view! { <dt>"Type"</dt><dd>{name}</dd> })}
                    <dt>"Service"</dt>
                    <dd>{summary.service}</dd>
                </dl>
                <p>"A Mason specialist will contact you to schedule a visit."</p>
                <div class="actions">
                    <a class="btn" href="/">"Back to shop"</a>
                    <a class="btn btn--ghost" href="/booking">"Book another service"</a>
                </div>
            </section>
        }
        .into_any(),
        None => view! {
            <section class="status-card">
                <h1>"Booking not found"</h1>
                <p>"We couldn't read that booking. Please choose your service again."</p>
                <a class="btn" href="/booking">"Start booking"</a>
            </section>
        }
        .into_any(),
    };

    view! {
        <SeoHead meta=PageMeta::new().title("Your booking").no_index(true)/>
        {content}
    }
}
