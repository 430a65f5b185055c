//! Configuration schema types for phosphor.
//!
//! All structs use `serde(default)` so partial documents work correctly.
//! Keys are camelCase so exported files stay compatible with hand-written
//! `terminal-config.json` documents.

mod api;
mod crt;
mod debugging;
mod gradient;
mod terminal;
mod text;
mod ui;

pub use api::*;
pub use crt::*;
pub use debugging::*;
pub use gradient::*;
pub use terminal::*;
pub use text::*;
pub use ui::*;

use serde::{Deserialize, Serialize};

/// Root configuration for phosphor.
///
/// Created from defaults at startup, optionally overwritten by a merged
/// JSON document, then mutated live for the rest of the session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhosphorConfig {
    pub crt: CrtConfig,
    pub gradient: GradientConfig,
    pub terminal: TerminalConfig,
    pub api: ApiConfig,
    pub ui: UiConfig,
    pub text: TextConfig,
    pub debugging: DebugConfig,
}

// =============================================================================
// Tests
// =============================================================================
