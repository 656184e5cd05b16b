//! UI module for gridline
//!
//! This module handles the terminal components, rendering, and user interactions.

pub mod app;
pub mod components;
pub mod core;
pub mod layout;
pub mod renderer;

pub use app::AppComponent;
pub use layout::LayoutManager;
pub use renderer::run_app;
