pub mod error_interceptor;
pub mod request_tracker;
