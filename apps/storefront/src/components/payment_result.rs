//! Result panels for the payment pages.

use super::LoadingScreen;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use mason_commerce::checkout::FailureAction;
use mason_commerce::{OrderId, OrderSummary, PaymentStatus};

#[component]
pub fn PaymentSuccessView(order: Option<OrderSummary>, message: Option<String>) -> impl IntoView {
    let number = order
        .as_ref()
        .and_then(|o| o.display_number())
        .map(str::to_string);

    view! {
        <section class="status-card status-success">
            <h1>"Payment successful"</h1>
            <p>{message.unwrap_or_else(|| "Thank you, your order is confirmed.".to_string())}</p>
            {number.map(|n| view! { <p class="order-number">"Order number: " <strong>{n}</strong></p> })}
            <div class="actions">
                <a class="btn" href="/profile">"View my orders"</a>
                <a class="btn btn--ghost" href="/">"Continue shopping"</a>
            </div>
        </section>
    }
}

/// Failure details plus retry, orders and home actions.
#[component]
pub fn PaymentFailureView(
    order_number: Option<String>,
    order_id: Option<OrderId>,
    message: String,
) -> impl IntoView {
    let navigate = use_navigate();

    let actions = FailureAction::ALL
        .into_iter()
        .map(|action| {
            let target = action.target(order_id.as_ref());
            let navigate = navigate.clone();
            let class = if action == FailureAction::RetryPayment {
                "btn"
            } else {
                "btn btn--ghost"
            };
            view! {
                <button class=class on:click=move |_| navigate(&target, NavigateOptions::default())>
                    {action.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <section class="status-card status-failure">
            <h1>"Payment failed"</h1>
            <p class="field-error">{message}</p>
            {order_number.map(|n| view! { <p class="order-number">"Order number: " <strong>{n}</strong></p> })}
            <div class="actions">{actions}</div>
        </section>
    }
}

/// Loading screen while verifying, then the matching result panel.
#[component]
pub fn PaymentStatusPanel(status: RwSignal<PaymentStatus>) -> impl IntoView {
    view! {
        <LoadingScreen
            visible=Signal::derive(move || status.with(PaymentStatus::is_loading))
            message="Verifying your payment"
        />
        {move || match status.get() {
            PaymentStatus::Loading => ().into_any(),
            PaymentStatus::Succeeded { order, message } => {
                view! { <PaymentSuccessView order=order message=message/> }.into_any()
            }
            PaymentStatus::Failed { order_number, order_id, message } => {
                view! { <PaymentFailureView order_number=order_number order_id=order_id message=message/> }
                    .into_any()
            }
        }}
    }
}
