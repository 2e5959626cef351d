//! Error translation shared by route handlers

pub mod error;

pub use error::{domain_error_response, json_error_handler, validation_error_response};
