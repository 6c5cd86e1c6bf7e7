pub mod error_handler;
pub mod image_probe;

pub use error_handler::ErrorHandler;
