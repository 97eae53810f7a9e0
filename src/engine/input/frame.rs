// Per-tick input snapshot handed to the simulation

use glam::Vec2;

/// Stick values inside this magnitude on x count as no input
pub const HORIZONTAL_DEAD_ZONE: f32 = 0.2;

/// Discrete horizontal intent fed to the player controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HorizontalInput {
    Left,
    Right,
    #[default]
    None,
}

impl HorizontalInput {
    /// Map an analog axis value to a direction, honoring the dead zone
    pub fn from_axis(value: f32) -> Self {
        if value < -HORIZONTAL_DEAD_ZONE {
            Self::Left
        } else if value > HORIZONTAL_DEAD_ZONE {
            Self::Right
        } else {
            Self::None
        }
    }
}

/// Unified movement input: one vector in [-1, 1] per axis
///
/// Keyboard and the virtual joystick both produce this, so the controller
/// sees the same thing whatever the source.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputVector(Vec2);

impl InputVector {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y).clamp(Vec2::NEG_ONE, Vec2::ONE))
    }

    pub fn x(&self) -> f32 {
        self.0.x
    }

    pub fn y(&self) -> f32 {
        self.0.y
    }

    pub fn horizontal(&self) -> HorizontalInput {
        HorizontalInput::from_axis(self.x())
    }

    /// Combine two sources; the one pushed further wins on each axis
    pub fn merge(self, other: InputVector) -> Self {
        let pick = |a: f32, b: f32| if b.abs() > a.abs() { b } else { a };
        Self::new(pick(self.x(), other.x()), pick(self.y(), other.y()))
    }
}

/// Everything the simulation needs to know about input for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    pub movement: InputVector,
    pub jump_pressed: bool,
    pub interact_pressed: bool,
    pub back_pressed: bool,
    /// Latest pointer position in screen pixels
    pub pointer: Option<Vec2>,
    /// Pointer position of a click that no touch control consumed
    pub click: Option<Vec2>,
}
