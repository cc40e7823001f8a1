pub mod api_utils;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod form;
pub mod icons;
pub mod list_utils;
pub mod page_frame;
pub mod page_standard;
