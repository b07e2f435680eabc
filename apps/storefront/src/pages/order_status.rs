use super::current_query;
use crate::components::SeoHead;
use leptos::prelude::*;
use mason_seo::PageMeta;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
struct StatusQuery {
    #[serde(rename = "orderNumber", default)]
    order_number: String,
    #[serde(default)]
    email: String,
}

fn read_query(query: &str) -> Option<StatusQuery> {
    let parsed: StatusQuery = serde_urlencoded::from_str(query.trim_start_matches('?')).ok()?;
    let complete = !parsed.order_number.trim().is_empty() && !parsed.email.trim().is_empty();
    complete.then_some(parsed)
}

#[component]
pub fn OrderStatusPage() -> impl IntoView {
    let content = match read_query(&current_query()) {
        Some(status) => view! {
            <section class="status-card">
                <h1>"Order " {status.order_number}</h1>
                <p>"Updates for this order are sent to " <strong>{status.email}</strong> "."</p>
                <div class="actions">
                    <a class="btn" href="/profile">"View my orders"</a>
                    <a class="btn btn--ghost" href="/track-order">"Track another order"</a>
                </div>
            </section>
        }
        .into_any(),
        None => view! {
            <section class="status-card">
                <h1>"Order not specified"</h1>
                <p>"Enter your order number and email to look up an order."</p>
                <a class="btn" href="/track-order">"Track an order"</a>
            </section>
        }
        .into_any(),
    };

    view! {
        <SeoHead meta=PageMeta::new().title("Order status").no_index(true)/>
        {content}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mason_commerce::checkout::TrackOrderForm;

    #[test]
    fn test_reads_back_tracking_path() {
        let target = TrackOrderForm::new(" MSN-1042 ", "jo+orders@example.com")
            .validate()
            .unwrap();
        let path = target.path();
        let query = path.split_once('?').map(|(_, q)| q).unwrap();

        let status = read_query(query).unwrap();
        assert_eq!(status.order_number, "MSN-1042");
        assert_eq!(status.email, "jo+orders@example.com");
    }

    #[test]
    fn test_incomplete_query() {
        assert!(read_query("?orderNumber=MSN-1").is_none());
        assert!(read_query("").is_none());
    }
}
