//! Core UI functionality for gridline.
//!
//! This module contains the building blocks every terminal component uses:
//! the [`Action`] vocabulary components communicate with, the [`Component`]
//! trait, and the async [`EventHandler`] that feeds crossterm input into the
//! render loop.
//!
//! # Architecture
//!
//! 1. **Components** implement the [`Component`] trait for consistent rendering
//! 2. **Actions** describe user intent; only the component that owns a piece
//!    of state applies the actions that mutate it
//! 3. **Events** are processed through the [`EventHandler`] system

pub mod actions;
pub mod component;
pub mod event_handler;

pub use actions::Action;
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
