pub mod api;
pub mod api_utils;
pub mod cache;
pub mod components;
pub mod form;
pub mod icons;
pub mod list_utils;
pub mod list_view;
pub mod notifications;
pub mod page_frame;
pub mod page_standard;
