//! Loading screens, skeletons and toasts.
//!
//! All three share [`use_overlay`], which keeps an [`OverlayDriver`] in step
//! with a visibility signal and ties its dismissal timer to the component.

use crate::app::AppContext;
use leptos::prelude::*;
use mason_core::overlay::{OverlayDriver, OverlayKind, OverlaySpec, TimerScheduler, Tone};
use std::time::Duration;

/// Browser `setTimeout` timers.
struct WindowTimers;

impl TimerScheduler for WindowTimers {
    type Handle = TimeoutHandle;

    fn schedule(&self, delay: Duration, fire: Box<dyn FnOnce()>) -> Option<TimeoutHandle> {
        set_timeout_with_handle(fire, delay)
            .map_err(|e| tracing::warn!(error = ?e, "setTimeout failed"))
            .ok()
    }

    fn cancel(&self, handle: TimeoutHandle) {
        handle.clear();
    }
}

/// Drive an overlay from `visible`.
///
/// Each showing schedules at most one timer. Hiding, reshowing or unmounting
/// cancels it, and a timer that fires for an earlier showing does nothing.
pub fn use_overlay(spec: OverlaySpec, visible: Signal<bool>, on_complete: Option<Callback<()>>) {
    let mut driver = OverlayDriver::new(spec, WindowTimers);
    if let Some(callback) = on_complete {
        driver = driver.on_complete(move || callback.run(()));
    }
    let driver = StoredValue::new_local(driver);

    Effect::new(move |_| {
        let visible = visible.get();
        driver.update_value(|d| d.set_visible(visible));
    });

    on_cleanup(move || {
        driver.try_update_value(OverlayDriver::cancel);
    });
}

fn render_overlay(
    spec: &OverlaySpec,
    visible: Signal<bool>,
    children: Option<ChildrenFn>,
) -> impl IntoView {
    let class = format!("{} tone-{}", spec.kind.class(), spec.tone.as_str());
    let spinner = spec.kind == OverlayKind::LoadingScreen;
    let message = spec.message.clone();

    view! {
        <Show when=move || visible.get()>
            <div class=class.clone() aria-live="polite">
                {spinner.then(|| view! { <div class="spinner"></div> })}
                {message.clone().map(|m| view! { <p>{m}</p> })}
                {children.as_ref().map(|c| c())}
            </div>
        </Show>
    }
}

/// Full-screen spinner with a message. Stays until `visible` goes false.
#[component]
pub fn LoadingScreen(
    #[prop(into)] visible: Signal<bool>,
    #[prop(into)] message: String,
) -> impl IntoView {
    let spec = OverlaySpec::loading(message);
    use_overlay(spec.clone(), visible, None);
    render_overlay(&spec, visible, None)
}

/// Placeholder content that reports completion after the skeleton delay.
#[component]
pub fn SkeletonOverlay(
    #[prop(into)] visible: Signal<bool>,
    #[prop(into)] on_complete: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let spec = OverlaySpec::skeleton().with_duration(ctx.config.overlays.skeleton_duration());
    use_overlay(spec.clone(), visible, Some(on_complete));
    render_overlay(&spec, visible, Some(children))
}

/// Notification that clears `visible` once its delay passes.
#[component]
pub fn Toast(
    visible: RwSignal<bool>,
    #[prop(into)] message: String,
    #[prop(optional)] tone: Tone,
    #[prop(optional)] duration: Option<Duration>,
) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let spec = OverlaySpec::toast(message)
        .with_tone(tone)
        .with_duration(duration.unwrap_or_else(|| ctx.config.overlays.toast_duration()));
    let hide = Callback::new(move |()| visible.set(false));
    use_overlay(spec.clone(), visible.into(), Some(hide));
    render_overlay(&spec, visible.into(), None)
}
