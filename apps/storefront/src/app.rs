//! Application shell: shared context, layout and routes.

use crate::catalog::Catalog;
use crate::components::FeedbackWidget;
use crate::pages::*;
use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use mason_commerce::PaymentStatus;
use mason_core::{MasonError, StoreConfig};
use mason_seo::SiteDefaults;
use std::sync::Arc;

/// Configuration shipped with the bundle.
pub const STORE_TOML: &str = include_str!("../store.toml");

/// Shared, read-only state every page reads from context.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: Arc<StoreConfig>,
    pub site: Arc<SiteDefaults>,
    pub catalog: Arc<Catalog>,
}

impl AppContext {
    pub fn new(config: StoreConfig) -> Self {
        let site = config.site_defaults();
        Self {
            config: Arc::new(config),
            site: Arc::new(site),
            catalog: Arc::new(Catalog::seed()),
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, MasonError> {
        StoreConfig::from_toml(content).map(Self::new)
    }
}

/// Load the bundled configuration and start logging.
///
/// A broken configuration is logged and replaced by defaults so the store
/// still renders.
pub fn bootstrap() -> AppContext {
    let loaded = AppContext::from_toml(STORE_TOML);
    let level = loaded
        .as_ref()
        .map(|ctx| ctx.config.logging.level.as_str())
        .unwrap_or("info");
    if let Err(e) = mason_core::logging::init(level) {
        leptos::logging::warn!("logging unavailable: {e}");
    }

    match loaded {
        Ok(ctx) => {
            tracing::info!(site = ctx.site.site_name.as_str(), "storefront starting");
            ctx
        }
        Err(e) => {
            tracing::error!(error = %e, "invalid store.toml, using defaults");
            AppContext::new(StoreConfig::default())
        }
    }
}

/// A payment already verified during this visit, keyed by session id.
///
/// The failure page sets it before redirecting to the success page, which
/// then renders it instead of verifying again.
#[derive(Debug, Clone, Copy)]
pub struct VerifiedPayment(pub RwSignal<Option<(String, PaymentStatus)>>);

impl VerifiedPayment {
    pub fn take_for(&self, session_id: &str) -> Option<PaymentStatus> {
        let matches = self
            .0
            .with_untracked(|v| v.as_ref().is_some_and(|(id, _)| id == session_id));
        if !matches {
            return None;
        }
        self.0
            .try_update(Option::take)
            .flatten()
            .map(|(_, status)| status)
    }
}

#[component]
pub fn App(ctx: AppContext) -> impl IntoView {
    provide_meta_context();
    provide_context(ctx);
    provide_context(VerifiedPayment(RwSignal::new(None)));

    #[cfg(feature = "browser")]
    provide_context::<crate::services::dom::DomWidgets>(StoredValue::new_local(
        mason_core::widget::WidgetRegistry::new(crate::services::dom::DomWidgetHost),
    ));

    let fallback = || view! { <NotFound/> }.into_view();

    view! {
        <Router>
            <Header/>
            <main>
                <Routes fallback>
                    <Route path=path!("") view=HomePage/>
                    <Route path=path!("/category/:id") view=CategoryPage/>
                    <Route path=path!("/product/:slug") view=ProductPage/>
                    <Route path=path!("/booking") view=BookingPage/>
                    <Route path=path!("/booking-order") view=BookingOrderPage/>
                    <Route path=path!("/track-order") view=TrackOrderPage/>
                    <Route path=path!("/order-status") view=OrderStatusPage/>
                    <Route path=path!("/checkout") view=CheckoutPage/>
                    <Route path=path!("/profile") view=ProfilePage/>
                    <Route path=path!("/payment/success") view=PaymentSuccessPage/>
                    <Route path=path!("/payment/failure") view=PaymentFailurePage/>
                </Routes>
            </main>
            <Footer/>
            <FeedbackWidget/>
        </Router>
    }
}

#[component]
fn Header() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    view! {
        <header class="site-header">
            <a class="brand" href="/">{ctx.site.site_name.clone()}</a>
            <nav>
                <a href="/">"Shop"</a>
                <a href="/booking">"Book a service"</a>
                <a href="/track-order">"Track order"</a>
                <a href="/profile">"My orders"</a>
            </nav>
        </header>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    view! {
        <footer class="site-footer">
            <p>{ctx.site.default_description.clone()}</p>
            <p class="small">{format!("© {}", ctx.site.site_name)}</p>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_is_valid() {
        let ctx = AppContext::from_toml(STORE_TOML).unwrap();
        assert!(ctx.config.api_base_url().starts_with("https://"));
        assert_eq!(ctx.site.base_url, ctx.config.site.base_url);
        assert!(!ctx.catalog.services.is_empty());
    }
}
