pub mod components;
pub mod config;
pub mod date_utils;
pub mod events;
pub mod icons;
pub mod navigation;
pub mod page_frame;
pub mod page_standard;
pub mod storage;
pub mod toast;
