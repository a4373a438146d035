pub mod aggregate;

pub use aggregate::{is_valid_email, CheckoutForm, FieldError, Order, OrderId};
