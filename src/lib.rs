pub mod api_client;
pub mod config;
pub mod data;
pub mod debouncer;
pub mod filters;
pub mod layout;
pub mod logging;
pub mod table_display;
