/// Application state handed to every handler.
pub mod http_service_data;
