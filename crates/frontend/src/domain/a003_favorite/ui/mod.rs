pub mod favorites_page;
pub mod heart_toggle;
