//! Owner of every GPU resource: the window surface, both offscreen
//! surfaces, their CRT materials and the passes that fill them.
//!
//! Surfaces are recreated on each structural relayout; the previous ones
//! are disposed first. Nothing outside this module creates or destroys GPU
//! resources.

mod frame;

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use phosphor_config::PhosphorConfig;
use rand::Rng;
use winit::window::Window;

use crate::bezel::BezelPass;
use crate::crt::{CrtMaterial, CrtUniforms, SurfaceKind};
use crate::gpu::{GpuContext, RendererError};
use crate::sprite::{ImageRenderer, ImageTexture};
use crate::layout::{compute_layout, LayoutSnapshot};
use crate::logo::LogoImages;
use crate::quad::QuadRenderer;
use crate::scene::{hit_access_button, BorderUniforms};
use crate::surface::{Disposable, OffscreenSurface, OFFSCREEN_FORMAT};
use crate::text::TextSurface;
use crate::textures::CrtTextures;

pub struct Compositor {
    gpu: GpuContext,
    layout: LayoutSnapshot,
    content: OffscreenSurface,
    border: OffscreenSurface,
    under_quads: QuadRenderer,
    over_quads: QuadRenderer,
    text: TextSurface,
    images: ImageRenderer,
    still_logo: Option<ImageTexture>,
    logo_frames: Vec<Option<ImageTexture>>,
    bezel: BezelPass,
    textures: CrtTextures,
    content_material: CrtMaterial,
    border_material: CrtMaterial,
    distortion_enabled: bool,
    border_dirty: bool,
    config_revision: Option<u64>,
    advance_cache: Option<(f32, f32)>,
    last_atlas_trim: Instant,
}

impl Compositor {
    pub async fn new<R: Rng>(
        window: Arc<Window>,
        config: &PhosphorConfig,
        logo: &LogoImages,
        fonts_dir: Option<&Path>,
        rng: &mut R,
    ) -> Result<Self, RendererError> {
        let gpu = GpuContext::new(window).await?;
        let layout = logical_layout(&gpu);
        let (content, border) = create_surfaces(&gpu, &layout);

        let device = &gpu.device;
        let queue = &gpu.queue;
        let format = gpu.format();

        let mut text = TextSurface::new(device, queue, OFFSCREEN_FORMAT, &config.text.font_family);
        if let Some(dir) = fonts_dir {
            text.load_fonts_dir(dir);
        }

        let images = ImageRenderer::new(device, OFFSCREEN_FORMAT);
        let still_logo = logo
            .still
            .as_ref()
            .map(|img| images.upload(device, queue, "still logo", img));
        let logo_frames = logo
            .frames
            .iter()
            .enumerate()
            .map(|(i, frame)| {
                frame
                    .as_ref()
                    .map(|img| images.upload(device, queue, &format!("logo frame {i}"), img))
            })
            .collect();

        let textures = CrtTextures::new(device, queue, rng);
        let content_material = CrtMaterial::new(
            device,
            queue,
            format,
            SurfaceKind::Content,
            CrtUniforms::for_surface(config, SurfaceKind::Content, &layout, true),
            &content.view,
            &textures,
        );
        let border_material = CrtMaterial::new(
            device,
            queue,
            format,
            SurfaceKind::Border,
            CrtUniforms::for_surface(config, SurfaceKind::Border, &layout, true),
            &border.view,
            &textures,
        );

        tracing::info!(
            width = layout.viewport_width,
            height = layout.viewport_height,
            mobile = layout.is_mobile,
            distortion = layout.distortion,
            "Compositor ready"
        );

        Ok(Self {
            under_quads: QuadRenderer::new(device, OFFSCREEN_FORMAT),
            over_quads: QuadRenderer::new(device, OFFSCREEN_FORMAT),
            bezel: BezelPass::new(device, OFFSCREEN_FORMAT),
            gpu,
            layout,
            content,
            border,
            text,
            images,
            still_logo,
            logo_frames,
            textures,
            content_material,
            border_material,
            distortion_enabled: true,
            border_dirty: true,
            config_revision: None,
            advance_cache: None,
            last_atlas_trim: Instant::now(),
        })
    }

    pub fn layout(&self) -> &LayoutSnapshot {
        &self.layout
    }

    /// Whether a click at window position `(x, y)`, in logical pixels,
    /// lands on the access button.
    pub fn hit_access_button(&self, config: &PhosphorConfig, x: f64, y: f64) -> bool {
        hit_access_button(&self.layout, config, x, y)
    }

    /// Reconfigure the window surface. Cheap; call on every resize event.
    /// The structural relayout happens in [`apply_layout`](Self::apply_layout).
    pub fn resize_surface(&mut self, width: u32, height: u32, scale_factor: f64) {
        self.gpu.set_scale_factor(scale_factor);
        self.gpu.resize(width, height);
    }

    /// Recompute the layout from the current window size, recreate both
    /// surfaces and push the new geometry into both materials.
    pub fn apply_layout(&mut self, config: &PhosphorConfig) {
        let layout = logical_layout(&self.gpu);
        tracing::debug!(
            width = layout.viewport_width,
            height = layout.viewport_height,
            mobile = layout.is_mobile,
            portrait = layout.is_portrait,
            distortion = layout.distortion,
            "Applying layout"
        );

        self.content.dispose();
        self.border.dispose();
        let (content, border) = create_surfaces(&self.gpu, &layout);
        self.content = content;
        self.border = border;
        self.layout = layout;

        let device = &self.gpu.device;
        self.content_material
            .rebind(device, &self.content.view, &self.textures);
        self.border_material
            .rebind(device, &self.border.view, &self.textures);
        self.push_uniforms(config);
        self.border_dirty = true;
    }

    /// Push config changes into the materials when `revision` moved.
    pub fn apply_config(&mut self, config: &PhosphorConfig, revision: u64) {
        if self.config_revision == Some(revision) {
            return;
        }
        self.config_revision = Some(revision);
        self.text.set_family(&config.text.font_family);
        self.advance_cache = None;
        self.push_uniforms(config);
        self.border_dirty = true;
    }

    /// Flip the distortion uniform between zero and the layout value.
    pub fn toggle_distortion(&mut self, config: &PhosphorConfig) -> bool {
        self.distortion_enabled = !self.distortion_enabled;
        self.push_uniforms(config);
        tracing::info!(enabled = self.distortion_enabled, "Distortion toggled");
        self.distortion_enabled
    }

    fn push_uniforms(&mut self, config: &PhosphorConfig) {
        let queue = &self.gpu.queue;
        for material in [&mut self.content_material, &mut self.border_material] {
            let next = CrtUniforms::for_surface(
                config,
                material.kind(),
                &self.layout,
                self.distortion_enabled,
            );
            material.apply(queue, next);
        }
    }

    /// Write elapsed seconds into both materials.
    pub fn set_time(&mut self, seconds: f32) {
        let queue = &self.gpu.queue;
        self.content_material.set_time(queue, seconds);
        self.border_material.set_time(queue, seconds);
    }

    /// Monospace advance at `font_size`, measured once per size.
    fn advance(&mut self, font_size: f32) -> f32 {
        match self.advance_cache {
            Some((size, advance)) if size == font_size => advance,
            _ => {
                let advance = self.text.measure_advance(font_size);
                self.advance_cache = Some((font_size, advance));
                advance
            }
        }
    }

    fn border_uniforms(&self, config: &PhosphorConfig) -> BorderUniforms {
        BorderUniforms::from_config(
            config,
            self.layout.viewport_width as f32,
            self.layout.viewport_height as f32,
        )
    }

    fn scale_factor(&self) -> f32 {
        self.gpu.scale_factor as f32
    }
}

impl Disposable for Compositor {
    fn dispose(&mut self) {
        let mut resources: Vec<&mut dyn Disposable> = vec![
            &mut self.content,
            &mut self.border,
            &mut self.under_quads,
            &mut self.over_quads,
            &mut self.images,
            &mut self.bezel,
            &mut self.textures,
            &mut self.content_material,
            &mut self.border_material,
        ];
        if let Some(still) = self.still_logo.as_mut() {
            resources.push(still);
        }
        resources.extend(
            self.logo_frames
                .iter_mut()
                .flatten()
                .map(|f| f as &mut dyn Disposable),
        );
        let count = resources.len();
        for resource in resources {
            resource.dispose();
        }
        tracing::info!(count, "Disposed GPU resources");
    }
}

fn logical_layout(gpu: &GpuContext) -> LayoutSnapshot {
    let scale = gpu.scale_factor.max(f64::EPSILON);
    compute_layout(
        (gpu.size.width as f64 / scale).max(1.0),
        (gpu.size.height as f64 / scale).max(1.0),
    )
}

/// Content and border surfaces at physical resolution. The content canvas
/// spans the logical viewport; its material maps it onto the content rect.
fn create_surfaces(gpu: &GpuContext, layout: &LayoutSnapshot) -> (OffscreenSurface, OffscreenSurface) {
    let scale = gpu.scale_factor;
    let content = OffscreenSurface::new(
        &gpu.device,
        (layout.viewport_width * scale).round() as u32,
        (layout.viewport_height * scale).round() as u32,
        "content surface",
    );
    let border = OffscreenSurface::new(&gpu.device, gpu.size.width, gpu.size.height, "border surface");
    (content, border)
}
