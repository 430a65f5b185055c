use std::time::{Duration, Instant};

use phosphor_config::PhosphorConfig;
use phosphor_terminal::{MonospaceMeasure, TerminalState};
use rand::Rng;

use super::Compositor;
use crate::gpu::RendererError;
use crate::sprite::ImageTexture;
use crate::scene::{build_content, ContentFrame, ContentScene, GlitchStroke, LogoImage, TextStyle};

const ATLAS_TRIM_INTERVAL: Duration = Duration::from_secs(1);

impl Compositor {
    /// Draw one frame: content pass, border pass when stale, then both CRT
    /// materials into the window.
    ///
    /// Returns the largest scroll offset the response allows, when the
    /// post-boot view computed one. A lost or outdated swapchain is
    /// reconfigured and the frame skipped.
    pub fn render<R: Rng>(
        &mut self,
        state: &TerminalState,
        config: &PhosphorConfig,
        now: Instant,
        alert: Option<&str>,
        rng: &mut R,
    ) -> Result<Option<usize>, RendererError> {
        let output = match self.gpu.current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                tracing::debug!("Surface lost or outdated, reconfiguring");
                let size = self.gpu.size;
                self.gpu.resize(size.width, size.height);
                return Ok(None);
            }
            Err(e) => {
                tracing::error!("Failed to get surface texture: {e}");
                return Err(RendererError::SurfaceError(e.to_string()));
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let style = TextStyle::from_config(config, &self.layout);
        let measure = MonospaceMeasure {
            advance: self.advance(style.font_size),
        };
        let still_logo = self.still_logo.as_ref().map(ImageTexture::size);
        let current_frame = self
            .logo_frame(state.frame_index() as usize)
            .map(ImageTexture::size);
        let scene = build_content(&ContentFrame {
            state,
            config,
            layout: &self.layout,
            now,
            measure: &measure,
            still_logo,
            current_frame,
            alert,
            glitch: GlitchStroke::random(rng),
        });

        self.prepare_content(&scene)?;
        if self.border_dirty {
            self.bezel.prepare(&self.gpu.queue, &self.border_uniforms(config));
        }
        self.set_time(state.elapsed(now).as_secs_f32());

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("phosphor frame encoder"),
            });

        self.draw_content(&mut encoder, &scene)?;

        if self.border_dirty {
            self.bezel.draw(&mut encoder, &self.border.view);
            self.border_dirty = false;
            tracing::debug!("Border surface redrawn");
        }

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("phosphor composite pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.content_material.render(&mut pass);
            self.border_material.render(&mut pass);
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        log_first_frame(self.gpu.size.width, self.gpu.size.height, self.gpu.format());
        self.trim_atlas_if_due(now);

        Ok(scene.scroll_limit)
    }

    fn logo_frame(&self, index: usize) -> Option<&ImageTexture> {
        self.logo_frames.get(index).and_then(Option::as_ref)
    }

    fn image_for(&self, image: LogoImage) -> Option<&ImageTexture> {
        match image {
            LogoImage::Still => self.still_logo.as_ref(),
            LogoImage::Frame(index) => self.logo_frame(index),
        }
    }

    fn prepare_content(&mut self, scene: &ContentScene) -> Result<(), RendererError> {
        let width = self.layout.viewport_width as f32;
        let height = self.layout.viewport_height as f32;
        let device = &self.gpu.device;
        let queue = &self.gpu.queue;

        self.under_quads
            .prepare(device, queue, &scene.under, width, height);
        self.over_quads
            .prepare(device, queue, &scene.over, width, height);

        // At most one image is visible per frame.
        if let Some(placement) = scene.images.first() {
            let r = placement.rect;
            self.images.prepare(
                queue,
                [width, height],
                [r.x as f32, r.y as f32, r.width as f32, r.height as f32],
            );
        }

        let scale = self.scale_factor();
        self.text.prepare(
            device,
            queue,
            self.content.width,
            self.content.height,
            scale,
            &scene.texts,
        )
    }

    fn draw_content(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        scene: &ContentScene,
    ) -> Result<(), RendererError> {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("content pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &self.content.view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        self.under_quads.render(&mut pass);
        if let Some(image) = scene
            .images
            .first()
            .and_then(|placement| self.image_for(placement.image))
        {
            self.images.render(&mut pass, image);
        }
        self.text.render(&mut pass)?;
        self.over_quads.render(&mut pass);
        Ok(())
    }

    fn trim_atlas_if_due(&mut self, now: Instant) {
        if now.saturating_duration_since(self.last_atlas_trim) >= ATLAS_TRIM_INTERVAL {
            self.text.trim_atlas();
            self.last_atlas_trim = now;
        }
    }
}

/// Log the first frame presentation (once only).
fn log_first_frame(width: u32, height: u32, format: wgpu::TextureFormat) {
    static PRESENTED: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);
    if !PRESENTED.swap(true, std::sync::atomic::Ordering::Relaxed) {
        tracing::info!(
            "First frame presented ({}x{}, format={:?})",
            width,
            height,
            format,
        );
    }
}
