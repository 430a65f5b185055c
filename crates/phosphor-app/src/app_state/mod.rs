//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the frame
//! loop. Owns the config store, the terminal state and the compositor, and
//! routes window events between them.

mod command_task;
mod config_actions;
mod core;
mod event_handler;
mod init;
mod input;
mod polling;
mod render;
mod resize;
mod types;

pub use core::PhosphorApp;
