// Quiz dialog button geometry, used for pointer hit-testing

use glam::Vec2;

use crate::core::Aabb;

/// Option buttons span this share of the screen width
const OPTION_WIDTH_RATIO: f32 = 0.7;
const OPTION_HEIGHT: f32 = 60.0;
const OPTION_SPACING: f32 = 20.0;
const OPTION_START_Y: f32 = 250.0;

const BACK_WIDTH: f32 = 100.0;
const BACK_HEIGHT: f32 = 40.0;
/// Back button inset from the right and bottom screen edges
const BACK_MARGIN_RIGHT: f32 = 120.0;
const BACK_MARGIN_BOTTOM: f32 = 60.0;

/// A clickable element of the quiz dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialogButton {
    /// Answer option by index
    Option(usize),
    Back,
}

/// Screen rectangles of the dialog's buttons
#[derive(Debug, Clone, PartialEq)]
pub struct DialogLayout {
    options: Vec<Aabb>,
    back: Aabb,
}

impl DialogLayout {
    /// Lay out `option_count` stacked option buttons for the given screen
    pub fn new(screen_width: f32, screen_height: f32, option_count: usize) -> Self {
        let width = screen_width * OPTION_WIDTH_RATIO;
        let x = (screen_width - width) / 2.0;
        let options = (0..option_count)
            .map(|i| {
                let y = OPTION_START_Y + i as f32 * (OPTION_HEIGHT + OPTION_SPACING);
                Aabb::new(x, y, width, OPTION_HEIGHT)
            })
            .collect();
        let back = Aabb::new(
            screen_width - BACK_MARGIN_RIGHT,
            screen_height - BACK_MARGIN_BOTTOM,
            BACK_WIDTH,
            BACK_HEIGHT,
        );
        Self { options, back }
    }

    /// Button under `point`; Back takes priority over options
    pub fn hit(&self, point: Vec2) -> Option<DialogButton> {
        if self.back.contains_point(point) {
            return Some(DialogButton::Back);
        }
        self.options
            .iter()
            .position(|rect| rect.contains_point(point))
            .map(DialogButton::Option)
    }

    pub fn option_rects(&self) -> &[Aabb] {
        &self.options
    }

    pub fn back_rect(&self) -> Aabb {
        self.back
    }
}
