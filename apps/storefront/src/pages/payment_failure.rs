use super::current_query;
use crate::app::{AppContext, VerifiedPayment};
use crate::components::{PaymentStatusPanel, SeoHead};
use crate::services;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use mason_commerce::{PaymentReturnParams, PaymentStatus};
use mason_seo::PageMeta;

/// Where the provider sends cancelled or failed payments.
///
/// The session is still verified: a payment that did go through redirects
/// to the success page with the same query.
#[component]
pub fn PaymentFailurePage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let verified = expect_context::<VerifiedPayment>();
    let navigate = use_navigate();
    let params = PaymentReturnParams::from_query(&current_query());
    let status = RwSignal::new(PaymentStatus::Loading);

    spawn_local(async move {
        let resolved = services::verify_payment_return(&ctx, &params).await;
        if !resolved.is_success() {
            status.set(resolved);
            return;
        }
        if let Some(session_id) = params.session_id.clone() {
            verified.0.set(Some((session_id, resolved)));
        }
        navigate(
            &params.success_path(),
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    });

    view! {
        <SeoHead meta=PageMeta::new().title("Payment failed").no_index(true)/>
        <PaymentStatusPanel status=status/>
    }
}
