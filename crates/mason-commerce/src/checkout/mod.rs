//! Checkout module.
//!
//! Order summaries as handed back by the payment API or the local fallback
//! cache, the order-tracking form, and payment return handling.

mod order;
mod payment;
mod tracking;

pub use order::OrderSummary;
pub use payment::{
    FailureAction, PaymentReturnParams, PaymentStatus, DEFAULT_FAILURE_MESSAGE,
    PAYMENT_FAILURE_PATH, PAYMENT_SUCCESS_PATH,
};
pub use tracking::{
    error_for, FieldError, TrackOrderForm, TrackingField, TrackingTarget, ORDER_STATUS_PATH,
};
