//! GPU textures owned by the compositor.

/// Color format of both offscreen surfaces and uploaded images.
pub const OFFSCREEN_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;

/// A GPU resource owner that can release its allocations explicitly.
///
/// The compositor disposes every resource before replacing it and walks
/// all of them in a fixed order at teardown.
pub trait Disposable {
    fn dispose(&mut self);
}

/// Render target sampled by a CRT material.
pub struct OffscreenSurface {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    /// Physical pixel size.
    pub width: u32,
    pub height: u32,
}

impl OffscreenSurface {
    pub fn new(device: &wgpu::Device, width: u32, height: u32, label: &str) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: OFFSCREEN_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        tracing::debug!(label, width, height, "Created offscreen surface");
        Self {
            texture,
            view,
            width,
            height,
        }
    }
}

impl Disposable for OffscreenSurface {
    fn dispose(&mut self) {
        self.texture.destroy();
    }
}

/// Immutable RGBA texture uploaded once: noise, overlay and logo frames.
pub struct StaticTexture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub width: u32,
    pub height: u32,
}

impl StaticTexture {
    /// Upload tightly packed RGBA8 `pixels` of `width`×`height`.
    pub fn from_rgba(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        label: &str,
        width: u32,
        height: u32,
        pixels: &[u8],
    ) -> Self {
        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: OFFSCREEN_FORMAT,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(width * 4),
                rows_per_image: Some(height),
            },
            size,
        );
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Self {
            texture,
            view,
            width,
            height,
        }
    }
}

impl Disposable for StaticTexture {
    fn dispose(&mut self) {
        self.texture.destroy();
    }
}
