//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod footer;
pub mod header;
pub mod health_panel;
pub mod image_panel;
pub mod logs;
pub mod status_views;
