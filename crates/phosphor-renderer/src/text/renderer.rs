use std::path::Path;

use glyphon::{
    Attrs, Buffer, Cache, ColorMode, Family, FontSystem, Metrics, Resolution, Shaping,
    SwashCache, TextArea, TextAtlas, TextBounds, TextRenderer, Viewport,
};
use phosphor_common::Color;

use super::{glow_alpha, glow_offsets, TextItem};
use crate::gpu::RendererError;

fn family_attrs(family: &str) -> Attrs<'_> {
    match family {
        "" | "monospace" => Attrs::new().family(Family::Monospace),
        name => Attrs::new().family(Family::Name(name)),
    }
}

fn to_glyphon(color: Color) -> glyphon::Color {
    glyphon::Color::rgba(color.r, color.g, color.b, color.a)
}

/// Glyphon resources for one render target.
///
/// Items are laid out in logical pixels and rasterized at `scale_factor`.
/// Buffers are pooled and grown as needed, never shrunk.
pub struct TextSurface {
    font_system: FontSystem,
    swash_cache: SwashCache,
    atlas: TextAtlas,
    viewport: Viewport,
    renderer: TextRenderer,
    buffers: Vec<Buffer>,
    family: String,
}

impl TextSurface {
    pub fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        format: wgpu::TextureFormat,
        family: &str,
    ) -> Self {
        let font_system = FontSystem::new();
        let swash_cache = SwashCache::new();
        let cache = Cache::new(device);
        let viewport = Viewport::new(device, &cache);
        // The offscreen target is linear; colors must not be re-encoded.
        let mut atlas = TextAtlas::with_color_mode(device, queue, &cache, format, ColorMode::Web);
        let renderer =
            TextRenderer::new(&mut atlas, device, wgpu::MultisampleState::default(), None);

        Self {
            font_system,
            swash_cache,
            atlas,
            viewport,
            renderer,
            buffers: Vec::new(),
            family: family.to_string(),
        }
    }

    /// Register every font file found in `dir`.
    pub fn load_fonts_dir(&mut self, dir: &Path) {
        let before = self.font_system.db().len();
        self.font_system.db_mut().load_fonts_dir(dir);
        let loaded = self.font_system.db().len() - before;
        tracing::info!(dir = %dir.display(), loaded, "Loaded font faces");
    }

    pub fn set_family(&mut self, family: &str) {
        self.family = family.to_string();
    }


    /// Width in logical pixels of `text` at `font_size`.
    pub fn measure(&mut self, text: &str, font_size: f32) -> f32 {
        let attrs = family_attrs(&self.family);
        let mut buffer = Buffer::new(&mut self.font_system, Metrics::new(font_size, font_size));
        buffer.set_size(&mut self.font_system, None, None);
        buffer.set_text(&mut self.font_system, text, attrs, Shaping::Advanced);
        buffer.shape_until_scroll(&mut self.font_system, false);
        buffer
            .layout_runs()
            .map(|run| run.line_w)
            .fold(0.0, f32::max)
    }

    /// Advance of one monospace cell at `font_size`.
    pub fn measure_advance(&mut self, font_size: f32) -> f32 {
        let width = self.measure("M", font_size);
        if width > 0.0 {
            width
        } else {
            font_size * 0.6
        }
    }

    /// Shape and upload `items` for the next [`render`](Self::render).
    /// `width`/`height` are the physical target size.
    pub fn prepare(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        width: u32,
        height: u32,
        scale_factor: f32,
        items: &[TextItem],
    ) -> Result<(), RendererError> {
        self.viewport.update(queue, Resolution { width, height });

        while self.buffers.len() < items.len() {
            self.buffers
                .push(Buffer::new(&mut self.font_system, Metrics::new(16.0, 20.0)));
        }

        let attrs = family_attrs(&self.family);
        let mut widths = Vec::with_capacity(items.len());
        for (buffer, item) in self.buffers.iter_mut().zip(items) {
            buffer.set_metrics(
                &mut self.font_system,
                Metrics::new(item.font_size, item.line_height),
            );
            buffer.set_size(&mut self.font_system, None, None);
            buffer.set_text(&mut self.font_system, &item.text, attrs.clone(), Shaping::Advanced);
            buffer.shape_until_scroll(&mut self.font_system, false);
            widths.push(
                buffer
                    .layout_runs()
                    .map(|run| run.line_w)
                    .fold(0.0, f32::max),
            );
        }

        let bounds = TextBounds {
            left: 0,
            top: 0,
            right: width as i32,
            bottom: height as i32,
        };

        let mut areas: Vec<TextArea<'_>> = Vec::new();
        for ((buffer, item), width) in self.buffers.iter().zip(items).zip(&widths) {
            let left = item.left(*width);
            let top = item.top();

            if let Some(glow) = item.glow {
                let alpha = glow_alpha(glow.blur);
                if alpha > 0.0 {
                    let color = to_glyphon(glow.color.with_alpha(alpha));
                    for (dx, dy) in glow_offsets(glow.blur) {
                        areas.push(TextArea {
                            buffer,
                            left: (left + dx) * scale_factor,
                            top: (top + dy) * scale_factor,
                            scale: scale_factor,
                            bounds,
                            default_color: color,
                            custom_glyphs: &[],
                        });
                    }
                }
            }

            areas.push(TextArea {
                buffer,
                left: left * scale_factor,
                top: top * scale_factor,
                scale: scale_factor,
                bounds,
                default_color: to_glyphon(item.color),
                custom_glyphs: &[],
            });
        }

        self.renderer
            .prepare(
                device,
                queue,
                &mut self.font_system,
                &mut self.atlas,
                &self.viewport,
                areas,
                &mut self.swash_cache,
            )
            .map_err(|e| RendererError::TextError(e.to_string()))
    }

    pub fn render<'pass>(
        &'pass self,
        pass: &mut wgpu::RenderPass<'pass>,
    ) -> Result<(), RendererError> {
        self.renderer
            .render(&self.atlas, &self.viewport, pass)
            .map_err(|e| RendererError::TextError(e.to_string()))
    }

    /// Free unused glyph allocations. Called once per second.
    pub fn trim_atlas(&mut self) {
        self.atlas.trim();
    }
}
