use phosphor_common::Color;

use crate::quad::QuadInstance;
use crate::text::{TextAlign, TextItem};

const GRID_STEP: f32 = 100.0;
const GRID_RED: Color = Color::from_rgba(255, 0, 0, 255);
const LABEL_SIZE: f32 = 16.0;

fn label(text: String, x: f32, baseline: f32) -> TextItem {
    TextItem {
        text,
        x,
        baseline,
        align: TextAlign::Left,
        font_size: LABEL_SIZE,
        line_height: LABEL_SIZE,
        color: GRID_RED,
        glow: None,
    }
}

/// Red alignment grid with coordinate labels for the content surface.
pub fn debug_grid(width: f32, height: f32) -> (Vec<QuadInstance>, Vec<TextItem>) {
    let mut quads = vec![
        QuadInstance::new(width / 2.0 - 1.0, 0.0, 2.0, height, GRID_RED).faded(0.5),
        QuadInstance::new(0.0, height / 2.0 - 1.0, width, 2.0, GRID_RED).faded(0.5),
    ];

    let mut x = 0.0;
    while x <= width {
        quads.push(QuadInstance::new(x, 0.0, 1.0, height, GRID_RED).faded(0.3));
        x += GRID_STEP;
    }
    let mut y = 0.0;
    while y <= height {
        quads.push(QuadInstance::new(0.0, y, width, 1.0, GRID_RED).faded(0.3));
        y += GRID_STEP;
    }

    let (w, h) = (width.round() as i64, height.round() as i64);
    let labels = vec![
        label("(0,0)".into(), 5.0, 15.0),
        label(format!("({w},0)"), width - 80.0, 15.0),
        label(format!("(0,{h})"), 5.0, height - 5.0),
        label(format!("({w},{h})"), width - 80.0, height - 5.0),
        label(
            format!("({},{})", width / 2.0, height / 2.0),
            width / 2.0 - 40.0,
            height / 2.0 - 10.0,
        ),
        label(format!("Canvas: {w}x{h}"), width / 2.0 - 100.0, 30.0),
    ];

    (quads, labels)
}
