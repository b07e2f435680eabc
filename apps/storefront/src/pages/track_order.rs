use crate::components::SeoHead;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use mason_commerce::checkout::{error_for, FieldError, TrackOrderForm, TrackingField};
use mason_seo::PageMeta;

#[component]
pub fn TrackOrderPage() -> impl IntoView {
    let order_number = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let errors = RwSignal::new(Vec::<FieldError>::new());
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = TrackOrderForm::new(order_number.get_untracked(), email.get_untracked());
        match form.validate() {
            Ok(target) => {
                errors.set(Vec::new());
                navigate(&target.path(), Default::default());
            }
            Err(found) => errors.set(found),
        }
    };

    let error = move |field: TrackingField| errors.with(|e| error_for(e, field));

    view! {
        <SeoHead meta=PageMeta::new()
            .title("Track your order")
            .description("Check the status of a Mason order with your order number and email.")
            .canonical("/track-order")/>

        <h1>"Track your order"</h1>
        <form class="track-form" on:submit=on_submit novalidate=true>
            <div class="form-field" class:has-error=move || error(TrackingField::OrderNumber).is_some()>
                <label for="orderNumber">"Order number"</label>
                <input
                    id="orderNumber"
                    name="orderNumber"
                    prop:value=order_number
                    on:input=move |ev| order_number.set(event_target_value(&ev))
                />
                {move || error(TrackingField::OrderNumber).map(|m| view! { <p class="field-error">{m}</p> })}
            </div>
            <div class="form-field" class:has-error=move || error(TrackingField::Email).is_some()>
                <label for="email">"Email"</label>
                <input
                    id="email"
                    name="email"
                    type="email"
                    prop:value=email
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                {move || error(TrackingField::Email).map(|m| view! { <p class="field-error">{m}</p> })}
            </div>
            <button type="submit" class="btn">"Track order"</button>
        </form>
    }
}
