use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DebugConfig {
    /// Draw a 100px coordinate grid over the content surface.
    pub show_grid: bool,
    /// Per-tick driver logging and FPS reports at debug level.
    pub full_console_logging: bool,
}
