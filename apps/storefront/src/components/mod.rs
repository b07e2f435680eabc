//! Reusable view components.

pub mod feedback_widget;
pub mod overlay;
pub mod payment_result;
pub mod product_card;
pub mod selection_grid;
pub mod seo_head;

pub use feedback_widget::FeedbackWidget;
pub use overlay::{LoadingScreen, SkeletonOverlay, Toast};
pub use payment_result::{PaymentFailureView, PaymentStatusPanel, PaymentSuccessView};
pub use product_card::{ProductCard, ProductCardSkeleton};
pub use selection_grid::SelectionGrid;
pub use seo_head::SeoHead;
