//! Logo assets: the still boot logo and the post-boot animation frames.
//!
//! Every file is optional. A frame that is missing or fails to decode is
//! logged and left empty; drawing skips it.

use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::gpu::RendererError;

/// File names tried, in order, for the still logo.
pub const STILL_LOGO_FILES: [&str; 2] = ["logo.png", "GIAD-AestheticPreserver_Pixelated.png"];

/// Decoded logo images, not yet uploaded.
#[derive(Default)]
pub struct LogoImages {
    pub still: Option<RgbaImage>,
    /// One slot per animation frame.
    pub frames: Vec<Option<RgbaImage>>,
}

impl LogoImages {
    /// Load from `dir`, or produce empty slots when there is no asset dir.
    pub fn load(dir: Option<&Path>, total_frames: u32) -> Self {
        let Some(dir) = dir else {
            tracing::info!("No asset directory; logo disabled");
            return Self {
                still: None,
                frames: (0..total_frames).map(|_| None).collect(),
            };
        };

        let still = STILL_LOGO_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
            .and_then(|path| load_image(&path).map_err(|e| tracing::warn!("{e}")).ok());

        let frames: Vec<_> = (0..total_frames)
            .map(|index| {
                frame_candidates(dir, index)
                    .into_iter()
                    .find(|path| path.is_file())
                    .and_then(|path| load_image(&path).map_err(|e| tracing::warn!("{e}")).ok())
            })
            .collect();

        let loaded = frames.iter().filter(|f| f.is_some()).count();
        tracing::info!(
            dir = %dir.display(),
            still = still.is_some(),
            loaded,
            total = total_frames,
            "Loaded logo assets"
        );
        Self { still, frames }
    }

    pub fn loaded_frames(&self) -> usize {
        self.frames.iter().filter(|f| f.is_some()).count()
    }
}

/// Paths tried for animation frame `index`.
pub fn frame_candidates(dir: &Path, index: u32) -> [PathBuf; 3] {
    [
        dir.join(format!("frame_{index:02}.png")),
        dir.join(format!("frame_{index:02}_delay-0.08s.gif")),
        dir.join("gif-frames")
            .join(format!("frame_{index:02}_delay-0.08s.gif")),
    ]
}

fn load_image(path: &Path) -> Result<RgbaImage, RendererError> {
    image::open(path)
        .map(|img| img.to_rgba8())
        .map_err(|e| RendererError::AssetError(format!("{}: {e}", path.display())))
}
