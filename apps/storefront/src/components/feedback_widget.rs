//! Third-party feedback widget.

use crate::app::AppContext;
use leptos::prelude::*;

/// Mounts the configured feedback widget for as long as this component lives.
#[component]
pub fn FeedbackWidget() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let feedback = &ctx.config.feedback;
    if !feedback.enabled {
        return;
    }

    #[cfg(feature = "browser")]
    {
        use crate::services::dom::DomWidgets;
        use mason_core::widget::WidgetSpec;

        let Some(registry) = use_context::<DomWidgets>() else {
            tracing::warn!("no widget registry in context");
            return;
        };

        let mut spec = WidgetSpec::new(feedback.id.clone(), feedback.script_src.clone());
        spec.globals = feedback.globals.clone();

        match registry.with_value(|r| r.mount(spec)) {
            Ok(handle) => {
                let slot = StoredValue::new_local(Some(handle));
                on_cleanup(move || {
                    let _ = slot.try_update_value(Option::take);
                });
            }
            Err(e) => tracing::warn!(widget = feedback.id.as_str(), error = %e, "feedback widget not mounted"),
        }
    }
}
