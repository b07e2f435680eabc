use super::current_query;
use crate::app::{AppContext, VerifiedPayment};
use crate::components::{PaymentStatusPanel, SeoHead};
use crate::services;
use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;
use mason_commerce::{PaymentReturnParams, PaymentStatus};
use mason_seo::PageMeta;

#[component]
pub fn PaymentSuccessPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let verified = expect_context::<VerifiedPayment>();
    let params = PaymentReturnParams::from_query(&current_query());

    let initial = match params.session_id.as_deref() {
        // Already verified by the failure page during this visit.
        Some(session_id) => verified.take_for(session_id),
        None => Some(PaymentStatus::Succeeded {
            order: services::order_fallback(&ctx).recall(Utc::now()),
            message: None,
        }),
    };
    let needs_verification = initial.is_none();
    let status = RwSignal::new(initial.unwrap_or(PaymentStatus::Loading));

    if needs_verification {
        spawn_local(async move {
            let resolved = services::verify_payment_return(&ctx, &params).await;
            status.set(resolved);
        });
    }

    view! {
        <SeoHead meta=PageMeta::new().title("Payment successful").no_index(true)/>
        <PaymentStatusPanel status=status/>
    }
}
