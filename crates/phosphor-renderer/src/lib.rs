pub mod bezel;
pub mod compositor;
pub mod crt;
pub mod gpu;
pub mod layout;
pub mod logo;
pub mod perf;
pub mod quad;
pub mod scene;
pub mod sprite;
pub mod surface;
pub mod text;
pub mod textures;

pub use compositor::Compositor;
pub use crt::{CrtControl, CrtUniforms, SurfaceKind};
pub use gpu::{GpuContext, RendererError};
pub use layout::{compute_layout, LayoutSnapshot};
pub use logo::LogoImages;
pub use perf::FrameTimer;
pub use quad::{QuadInstance, QuadRenderer};
pub use surface::Disposable;
pub use text::TextSurface;
