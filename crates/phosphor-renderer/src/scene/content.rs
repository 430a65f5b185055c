use std::time::Instant;

use phosphor_common::{Color, Rect};
use phosphor_config::{colors::color_or, PhosphorConfig};
use phosphor_terminal::{seconds_remaining, wrap_text, Phase, TerminalState, TextMeasure};
use rand::Rng;

use super::debug::debug_grid;
use crate::layout::LayoutSnapshot;
use crate::quad::QuadInstance;
use crate::text::{Glow, TextAlign, TextItem};

/// Content surface fill.
pub const BACKGROUND: Color = Color::from_rgba(0x1c, 0x1c, 0x1c, 255);
/// Command prompt prefix.
pub const PROMPT: &str = "C:\\GIAD> ";

const STRIPE_HEIGHT: f32 = 4.0;
const STRIPE_ALPHA: f32 = 0.1;
const BOOT_LOGO_MIN: f64 = 175.0;
const ANIMATED_LOGO_WIDTH: f64 = 130.0;
const COUNTDOWN_GAP: f64 = 25.0;
const BUTTON_COUNTDOWN_GAP: f64 = 30.0;
const RESPONSE_TOP_RATIO: f64 = 0.65;
const RESPONSE_TOP_GAP: f64 = 20.0;
const MORE_MARKER: &str = "↓ more";
/// Height of an all-caps line relative to its font size.
const CAP_HEIGHT_RATIO: f64 = 0.75;
const ALERT_HEIGHT: f32 = 40.0;
const ALERT_FILL: Color = Color::from_rgba(120, 16, 16, 220);

/// Resolved text styling for the current layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    pub glow: Option<Glow>,
    pub font_size: f32,
    pub line_height: f32,
}

impl TextStyle {
    pub fn from_config(config: &PhosphorConfig, layout: &LayoutSnapshot) -> Self {
        let text = &config.text;
        let glow = (text.glow_intensity > 0.0).then(|| Glow {
            color: color_or(&text.glow_color, Color::from_rgba(0xfd, 0x50, 0x1f, 255)),
            blur: text.glow_intensity as f32,
        });
        Self {
            color: color_or(&text.color, Color::WHITE),
            glow,
            font_size: text.font_size.for_layout(layout.is_portrait) as f32,
            line_height: text.line_height as f32,
        }
    }

    fn item(&self, text: impl Into<String>, x: f64, baseline: f64, align: TextAlign) -> TextItem {
        TextItem {
            text: text.into(),
            x: x as f32,
            baseline: baseline as f32,
            align,
            font_size: self.font_size,
            line_height: self.line_height,
            color: self.color,
            glow: self.glow,
        }
    }
}

/// Random stroke parameters of this frame's glitch line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlitchStroke {
    pub thickness: f32,
    pub alpha: f32,
}

impl GlitchStroke {
    /// Thickness in `[0.1, 0.3)` px, alpha in `[0.2, 0.5)`.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            thickness: 0.1 + rng.gen::<f32>() * 0.2,
            alpha: 0.2 + rng.gen::<f32>() * 0.3,
        }
    }
}

/// Which logo image a placement refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoImage {
    /// The still logo shown during boot.
    Still,
    /// One frame of the post-boot animation.
    Frame(usize),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImagePlacement {
    pub image: LogoImage,
    pub rect: Rect,
}

/// Everything `build_content` reads for one frame.
pub struct ContentFrame<'a> {
    pub state: &'a TerminalState,
    pub config: &'a PhosphorConfig,
    pub layout: &'a LayoutSnapshot,
    pub now: Instant,
    pub measure: &'a dyn TextMeasure,
    /// Pixel size of the still logo, when it loaded.
    pub still_logo: Option<(u32, u32)>,
    /// Pixel size of the current animation frame, when it loaded.
    pub current_frame: Option<(u32, u32)>,
    pub alert: Option<&'a str>,
    pub glitch: GlitchStroke,
}

/// Draw list for the content surface, in paint order per layer.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ContentScene {
    /// Quads painted before images and text.
    pub under: Vec<QuadInstance>,
    pub images: Vec<ImagePlacement>,
    pub texts: Vec<TextItem>,
    /// Quads painted over the text: the glitch line and the alert banner.
    pub over: Vec<QuadInstance>,
    /// Largest useful scroll offset for the response, when one is shown.
    pub scroll_limit: Option<usize>,
}

/// Canvas-space rectangle of the access button hit area.
pub fn access_button_rect(config: &PhosphorConfig, canvas_width: f64, canvas_height: f64) -> Rect {
    let button = &config.ui.access_button;
    Rect::centered_on(
        canvas_width * button.position.x,
        canvas_height * button.position.y,
        button.size.width,
        button.size.height,
    )
}

/// Whether a window-space click lands on the access button.
pub fn hit_access_button(layout: &LayoutSnapshot, config: &PhosphorConfig, x: f64, y: f64) -> bool {
    layout
        .window_to_content(x, y)
        .is_some_and(|(cx, cy)| {
            access_button_rect(config, layout.viewport_width, layout.viewport_height)
                .contains(cx, cy)
        })
}

/// Build the content surface for one frame.
pub fn build_content(frame: &ContentFrame<'_>) -> ContentScene {
    let width = frame.layout.viewport_width;
    let height = frame.layout.viewport_height;
    let style = TextStyle::from_config(frame.config, frame.layout);
    let padding = frame.layout.base_padding(frame.config.ui.border_margin);

    let mut scene = ContentScene::default();
    push_background(&mut scene.under, width as f32, height as f32);

    if frame.config.debugging.show_grid {
        let (quads, labels) = debug_grid(width as f32, height as f32);
        scene.under.extend(quads);
        scene.texts.extend(labels);
    }

    match frame.state.phase() {
        Phase::Boot => build_boot(frame, &style, padding, &mut scene),
        Phase::PostBoot => build_post_boot(frame, &style, padding, &mut scene),
    }

    scene.over.push(QuadInstance::new(
        0.0,
        frame.state.glitch_y() as f32,
        width as f32,
        frame.glitch.thickness,
        Color::WHITE.with_alpha(frame.glitch.alpha),
    ));

    if let Some(message) = frame.alert {
        scene.over.push(QuadInstance::new(0.0, 0.0, width as f32, ALERT_HEIGHT, ALERT_FILL));
        scene.texts.push(TextItem {
            glow: None,
            ..style.item(message, width / 2.0, ALERT_HEIGHT as f64 * 0.65, TextAlign::Center)
        });
    }

    scene
}

fn push_background(quads: &mut Vec<QuadInstance>, width: f32, height: f32) {
    quads.push(QuadInstance::new(0.0, 0.0, width, height, BACKGROUND));
    let mut y = 0.0;
    while y < height {
        quads.push(
            QuadInstance::new(0.0, y, width, STRIPE_HEIGHT, Color::BLACK).faded(STRIPE_ALPHA),
        );
        y += STRIPE_HEIGHT * 2.0;
    }
}

fn build_boot(frame: &ContentFrame<'_>, style: &TextStyle, padding: f64, scene: &mut ContentScene) {
    let width = frame.layout.viewport_width;
    let height = frame.layout.viewport_height;
    let line_height = style.line_height as f64;

    if frame.still_logo.is_some() {
        let size = BOOT_LOGO_MIN.max(width * 0.2);
        scene.images.push(ImagePlacement {
            image: LogoImage::Still,
            rect: Rect::new(width - size - padding, padding, size, size),
        });
    }

    let max_visible = ((height - 100.0) / line_height).floor().max(0.0) as usize;
    let lines = frame.state.boot_lines();
    let skip = lines.len().saturating_sub(max_visible);
    let mut shown = 0;
    for (i, line) in lines.skip(skip).enumerate() {
        scene.texts.push(style.item(
            line,
            padding,
            padding + i as f64 * line_height,
            TextAlign::Left,
        ));
        shown += 1;
    }

    if let Some(end) = frame.state.boot_end() {
        let remaining = seconds_remaining(end, frame.now);
        scene.texts.push(style.item(
            format!("AUTO LOADING IN [ {remaining} ]"),
            width / 2.0,
            padding + shown as f64 * line_height + COUNTDOWN_GAP,
            TextAlign::Center,
        ));
    }
}

fn build_post_boot(
    frame: &ContentFrame<'_>,
    style: &TextStyle,
    padding: f64,
    scene: &mut ContentScene,
) {
    let width = frame.layout.viewport_width;
    let height = frame.layout.viewport_height;
    let line_height = style.line_height as f64;
    let button = &frame.config.ui.access_button;

    if let Some((frame_w, frame_h)) = frame.current_frame.filter(|(w, _)| *w > 0) {
        let logo_h = frame_h as f64 * (ANIMATED_LOGO_WIDTH / frame_w as f64);
        scene.images.push(ImagePlacement {
            image: LogoImage::Frame(frame.state.frame_index() as usize),
            rect: Rect::new(
                width / 2.0 - ANIMATED_LOGO_WIDTH / 2.0,
                height / 2.0 - logo_h,
                ANIMATED_LOGO_WIDTH,
                logo_h,
            ),
        });
    }

    // Access button label with underline.
    let button_x = width * button.position.x;
    let button_y = height * button.position.y;
    let text_height = style.font_size as f64 * CAP_HEIGHT_RATIO;
    scene
        .texts
        .push(style.item(button.text.as_str(), button_x, button_y, TextAlign::Center));
    let text_width = frame.measure.measure(&button.text);
    scene.under.push(QuadInstance::new(
        (button_x - text_width as f64 / 2.0) as f32,
        (button_y + text_height) as f32,
        text_width,
        1.0,
        style.color,
    ));

    if let Some(end) = frame.state.post_boot_end() {
        let remaining = seconds_remaining(end, frame.now);
        scene.texts.push(style.item(
            format!("LOADING IN [ {remaining} ]"),
            button_x,
            button_y + text_height + BUTTON_COUNTDOWN_GAP,
            TextAlign::Center,
        ));
    }

    let prompt_y = if frame.layout.is_portrait {
        height - 80.0
    } else {
        height - 100.0
    };
    let response_top = height * RESPONSE_TOP_RATIO + RESPONSE_TOP_GAP;
    let available_lines = ((prompt_y - response_top) / line_height).floor().max(0.0) as usize;

    let response = frame.state.response();
    if response.is_empty() {
        scene.scroll_limit = Some(0);
    } else {
        let max_width = (width - padding * 2.0) as f32;
        let lines = wrap_text(response, max_width, frame.measure);
        let max_scroll = lines.len().saturating_sub(available_lines);
        let offset = frame.state.scroll_offset().min(max_scroll);
        scene.scroll_limit = Some(max_scroll);

        for (i, line) in lines.iter().skip(offset).take(available_lines).enumerate() {
            scene.texts.push(style.item(
                line.as_str(),
                padding,
                response_top + i as f64 * line_height,
                TextAlign::Left,
            ));
        }

        if offset < max_scroll {
            scene.texts.push(style.item(
                MORE_MARKER,
                width - padding,
                prompt_y - 10.0,
                TextAlign::Right,
            ));
        }
    }

    let cursor = if frame.state.cursor_visible() { "_" } else { "" };
    scene.texts.push(style.item(
        format!("{PROMPT}{}{cursor}", frame.state.command_input()),
        padding,
        prompt_y,
        TextAlign::Left,
    ));
}

#[cfg(test)]
mod tests;
