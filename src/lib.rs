//! gridline - a terminal data grid with a persistent column layout
//!
//! Columns can be reordered by dragging their headers (or with the
//! keyboard), resized from their right edge and hidden from a chip bar.
//! The resulting layout survives restarts through a small preference store.
//! Rows can be selected individually or in bulk, and bulk deletes are
//! applied to the grid's own copy while the host is told about them.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`preferences`] - Durable key/value store for layout state
//! * [`grid`] - Column layout, drag controller, selection and view model
//! * [`ui`] - Terminal user interface components
//! * [`demo`] - Sample columns and rows for the binary

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Sample team-member data set
pub mod demo;

/// Framework-independent grid state
pub mod grid;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Preference storage backends
pub mod preferences;

/// Terminal user interface components and rendering
pub mod ui;
