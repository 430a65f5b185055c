//! Pure descriptions of what each surface shows.
//!
//! Builders here turn terminal state, config and layout into quads, text
//! items and image placements. Nothing in this module touches the GPU, so
//! the whole drawing contract is unit-tested.

mod border;
mod content;
mod debug;

pub use border::{BorderUniforms, BEZEL_GLOW, HAIRLINE_COLOR, MARGIN_BAND_COLOR};
pub use content::{
    access_button_rect, build_content, hit_access_button, ContentFrame, ContentScene,
    GlitchStroke, ImagePlacement, LogoImage, TextStyle, BACKGROUND, PROMPT,
};
pub use debug::debug_grid;
