//! Viewport layout: content rectangle, form factor and distortion.
//!
//! Everything here is pure and works in logical pixels. The compositor
//! turns a [`LayoutSnapshot`] into mesh placement and uniform values.

use phosphor_common::Rect;

/// Below either dimension the layout counts as mobile.
pub const MOBILE_MAX_WIDTH: f64 = 768.0;
pub const MOBILE_MAX_HEIGHT: f64 = 600.0;

const MOBILE_CURVE: f64 = 0.05;
const DESKTOP_PORTRAIT_H_CURVE: f64 = 0.1;
const DESKTOP_LANDSCAPE_H_CURVE: f64 = 0.3;
const DESKTOP_V_CURVE: f64 = 0.2;
const HORIZONTAL_WEIGHT: f64 = 0.7;
const VERTICAL_WEIGHT: f64 = 0.3;

/// Immutable result of [`compute_layout`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutSnapshot {
    pub viewport_width: f64,
    pub viewport_height: f64,
    /// Content rectangle in viewport coordinates.
    pub content: Rect,
    pub is_mobile: bool,
    pub is_portrait: bool,
    pub horizontal_curve: f64,
    pub vertical_curve: f64,
    /// Weighted curvature pushed into both materials.
    pub distortion: f64,
}

/// Layout where the content aspect equals the window aspect.
pub fn compute_layout(viewport_width: f64, viewport_height: f64) -> LayoutSnapshot {
    let width = viewport_width.max(1.0);
    let height = viewport_height.max(1.0);
    compute_layout_for_aspect(width, height, width / height)
}

/// Layout for an explicit content aspect ratio, letterboxed and centered.
pub fn compute_layout_for_aspect(
    viewport_width: f64,
    viewport_height: f64,
    content_aspect: f64,
) -> LayoutSnapshot {
    let vw = viewport_width.max(1.0);
    let vh = viewport_height.max(1.0);
    let window_aspect = vw / vh;
    let content_aspect = if content_aspect.is_finite() && content_aspect > 0.0 {
        content_aspect
    } else {
        window_aspect
    };

    let (width, height) = if window_aspect > content_aspect {
        // Wider than the content: height bound.
        (vh * content_aspect, vh)
    } else {
        // Taller than (or equal to) the content: width bound.
        (vw, vw / content_aspect)
    };
    let content = Rect::new((vw - width) / 2.0, (vh - height) / 2.0, width, height);

    let is_mobile = vw < MOBILE_MAX_WIDTH || vh < MOBILE_MAX_HEIGHT;
    let is_portrait = window_aspect < 1.0;
    let horizontal_curve = if is_mobile {
        MOBILE_CURVE
    } else if is_portrait {
        DESKTOP_PORTRAIT_H_CURVE
    } else {
        DESKTOP_LANDSCAPE_H_CURVE
    };
    let vertical_curve = if is_mobile {
        MOBILE_CURVE
    } else {
        DESKTOP_V_CURVE
    };

    LayoutSnapshot {
        viewport_width: vw,
        viewport_height: vh,
        content,
        is_mobile,
        is_portrait,
        horizontal_curve,
        vertical_curve,
        distortion: horizontal_curve * HORIZONTAL_WEIGHT + vertical_curve * VERTICAL_WEIGHT,
    }
}

impl LayoutSnapshot {
    /// Left padding for terminal text: 5% of the width, but never inside
    /// the bezel.
    pub fn base_padding(&self, border_margin: f64) -> f64 {
        (self.viewport_width * 0.05).max(border_margin + 60.0)
    }

    /// Placement of both meshes in scene coordinates.
    pub fn placement(&self) -> ScenePlacement {
        let (cx, cy) = self.content.center();
        // Scene origin is the viewport center, y up.
        let center = [
            cx - self.viewport_width / 2.0,
            -cy + self.viewport_height / 2.0,
        ];
        ScenePlacement {
            center,
            content_size: [self.content.width, self.content.height],
            border_size: [self.viewport_width, self.viewport_height],
            viewport: [self.viewport_width, self.viewport_height],
        }
    }

    /// Map a window point to content-canvas coordinates, or `None` when it
    /// falls outside the content rectangle.
    pub fn window_to_content(&self, x: f64, y: f64) -> Option<(f64, f64)> {
        if !self.content.contains(x, y) || self.content.width <= 0.0 || self.content.height <= 0.0 {
            return None;
        }
        let rel_x = (x - self.content.x) / self.content.width;
        let rel_y = (y - self.content.y) / self.content.height;
        Some((rel_x * self.viewport_width, rel_y * self.viewport_height))
    }
}

/// Mesh centers and sizes relative to a viewport-centered, y-up scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenePlacement {
    pub center: [f64; 2],
    pub content_size: [f64; 2],
    pub border_size: [f64; 2],
    pub viewport: [f64; 2],
}

impl ScenePlacement {
    /// `[left, bottom, width, height]` in normalized device coordinates for
    /// a mesh of `size` centered at [`center`](Self::center).
    pub fn ndc_rect(&self, size: [f64; 2]) -> [f32; 4] {
        let half_w = self.viewport[0] / 2.0;
        let half_h = self.viewport[1] / 2.0;
        let left = (self.center[0] - size[0] / 2.0) / half_w;
        let bottom = (self.center[1] - size[1] / 2.0) / half_h;
        [
            left as f32,
            bottom as f32,
            (size[0] / half_w) as f32,
            (size[1] / half_h) as f32,
        ]
    }

    pub fn content_ndc(&self) -> [f32; 4] {
        self.ndc_rect(self.content_size)
    }

    pub fn border_ndc(&self) -> [f32; 4] {
        self.ndc_rect(self.border_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn content_fills_viewport() {
        for (w, h) in [(1920.0, 1080.0), (375.0, 667.0), (800.0, 800.0), (1.0, 3000.0)] {
            let layout = compute_layout(w, h);
            let c = layout.content;
            assert!(c.x >= -EPS && c.y >= -EPS, "{w}x{h}");
            assert!(c.x + c.width <= w + EPS && c.y + c.height <= h + EPS, "{w}x{h}");
            assert!((c.aspect() - w / h).abs() < 1e-9, "{w}x{h}");
        }
    }

    #[test]
    fn fixed_aspect_is_letterboxed() {
        // 4:3 content in a 16:9 window is height bound and centered.
        let layout = compute_layout_for_aspect(1600.0, 900.0, 4.0 / 3.0);
        assert!((layout.content.height - 900.0).abs() < EPS);
        assert!((layout.content.width - 1200.0).abs() < EPS);
        assert!((layout.content.x - 200.0).abs() < EPS);
        assert!(layout.content.y.abs() < EPS);

        // 4:3 content in a portrait window is width bound.
        let layout = compute_layout_for_aspect(600.0, 1000.0, 4.0 / 3.0);
        assert!((layout.content.width - 600.0).abs() < EPS);
        assert!((layout.content.height - 450.0).abs() < EPS);
        assert!((layout.content.y - 275.0).abs() < EPS);
    }

    #[test]
    fn desktop_landscape_distortion() {
        let layout = compute_layout(1920.0, 1080.0);
        assert!(!layout.is_mobile);
        assert!(!layout.is_portrait);
        assert!((layout.distortion - (0.3 * 0.7 + 0.2 * 0.3)).abs() < EPS);
    }

    #[test]
    fn desktop_portrait_gets_intermediate_curve() {
        let layout = compute_layout(900.0, 1400.0);
        assert!(!layout.is_mobile);
        assert!(layout.is_portrait);
        assert!((layout.horizontal_curve - 0.1).abs() < EPS);
    }

    #[test]
    fn resize_to_phone_reduces_distortion() {
        let desktop = compute_layout(1920.0, 1080.0);
        let phone = compute_layout(375.0, 667.0);
        assert!(phone.is_mobile);
        assert!(phone.distortion < desktop.distortion);
        assert!((phone.distortion - 0.05).abs() < EPS);
    }

    #[test]
    fn short_window_counts_as_mobile() {
        assert!(compute_layout(1400.0, 599.0).is_mobile);
        assert!(!compute_layout(768.0, 600.0).is_mobile);
    }

    #[test]
    fn zero_size_is_guarded() {
        let layout = compute_layout(0.0, 0.0);
        assert!(layout.content.width >= 1.0);
        assert!(layout.distortion.is_finite());
    }

    #[test]
    fn base_padding_respects_bezel() {
        let layout = compute_layout(800.0, 600.0);
        assert!((layout.base_padding(25.0) - 85.0).abs() < EPS);
        let layout = compute_layout(3000.0, 1200.0);
        assert!((layout.base_padding(25.0) - 150.0).abs() < EPS);
    }

    #[test]
    fn full_viewport_content_is_centered_in_scene() {
        let placement = compute_layout(1280.0, 800.0).placement();
        assert!(placement.center[0].abs() < EPS);
        assert!(placement.center[1].abs() < EPS);
        assert_eq!(placement.content_ndc(), [-1.0, -1.0, 2.0, 2.0]);
        assert_eq!(placement.border_ndc(), [-1.0, -1.0, 2.0, 2.0]);
    }

    #[test]
    fn letterboxed_content_ndc() {
        let placement = compute_layout_for_aspect(1600.0, 900.0, 4.0 / 3.0).placement();
        let [left, bottom, w, h] = placement.content_ndc();
        assert!((left + 0.75).abs() < 1e-6);
        assert!((bottom + 1.0).abs() < 1e-6);
        assert!((w - 1.5).abs() < 1e-6);
        assert!((h - 2.0).abs() < 1e-6);
    }

    #[test]
    fn window_to_content_maps_and_rejects() {
        let layout = compute_layout(1000.0, 500.0);
        assert_eq!(layout.window_to_content(500.0, 250.0), Some((500.0, 250.0)));
        assert_eq!(layout.window_to_content(-1.0, 10.0), None);

        let boxed = compute_layout_for_aspect(1600.0, 900.0, 4.0 / 3.0);
        assert_eq!(boxed.window_to_content(100.0, 450.0), None);
        let (x, _) = boxed.window_to_content(800.0, 450.0).unwrap();
        assert!((x - 800.0).abs() < EPS);
    }
}
