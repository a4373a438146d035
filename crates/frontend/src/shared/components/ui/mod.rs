pub mod badge;
pub mod input;

pub use badge::CountBadge;
pub use input::{field_error, Input};
