//! Routed pages.

use leptos::prelude::GetUntracked;

mod booking;
mod booking_order;
mod category;
mod checkout;
mod home;
mod not_found;
mod order_status;
mod payment_failure;
mod payment_success;
mod product;
mod profile;
mod track_order;

pub use booking::BookingPage;
pub use booking_order::BookingOrderPage;
pub use category::CategoryPage;
pub use checkout::CheckoutPage;
pub use home::HomePage;
pub use not_found::NotFound;
pub use order_status::OrderStatusPage;
pub use payment_failure::PaymentFailurePage;
pub use payment_success::PaymentSuccessPage;
pub use product::ProductPage;
pub use profile::ProfilePage;
pub use track_order::TrackOrderPage;

/// Current query string, read once.
pub(crate) fn current_query() -> String {
    leptos_router::hooks::use_location().search.get_untracked()
}
