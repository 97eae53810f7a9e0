// On-screen touch controls: a virtual joystick plus jump/action buttons

use glam::Vec2;

use super::frame::InputVector;
use crate::core::Aabb;

/// Joystick base radius in pixels
pub const JOYSTICK_RADIUS: f32 = 50.0;

/// Virtual joystick anchored in the bottom-left corner
#[derive(Debug, Clone)]
pub struct VirtualJoystick {
    center: Vec2,
    radius: f32,
    touch: Option<Vec2>,
}

impl VirtualJoystick {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self {
            center,
            radius,
            touch: None,
        }
    }

    /// Is `point` on the joystick base (edge inclusive)
    pub fn hit(&self, point: Vec2) -> bool {
        point.distance(self.center) <= self.radius
    }

    /// Grab the stick; returns false when the press is outside the base
    pub fn press(&mut self, point: Vec2) -> bool {
        if self.hit(point) {
            self.touch = Some(point);
            true
        } else {
            false
        }
    }

    /// Follow the pointer while held
    pub fn drag(&mut self, point: Vec2) {
        if self.touch.is_some() {
            self.touch = Some(point);
        }
    }

    pub fn release(&mut self) {
        self.touch = None;
    }

    /// Knob position, constrained to the base circle
    pub fn knob(&self) -> Vec2 {
        let Some(touch) = self.touch else {
            return self.center;
        };
        let offset = touch - self.center;
        if offset.length() <= self.radius {
            touch
        } else {
            self.center + offset.normalize() * self.radius
        }
    }

    /// Knob offset normalized to [-1, 1] per axis
    pub fn value(&self) -> InputVector {
        if self.touch.is_none() {
            return InputVector::default();
        }
        let offset = (self.knob() - self.center) / self.radius;
        InputVector::new(offset.x, offset.y)
    }
}

/// Which touch control consumed a press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchHit {
    Joystick,
    Jump,
    Action,
}

/// The full set of on-screen controls
#[derive(Debug, Clone)]
pub struct TouchControls {
    pub joystick: VirtualJoystick,
    pub jump_button: Aabb,
    pub action_button: Aabb,
    pressed: Option<TouchHit>,
}

impl TouchControls {
    /// Lay the controls out for a screen of the given size
    pub fn new(screen_width: f32, screen_height: f32) -> Self {
        Self {
            joystick: VirtualJoystick::new(
                Vec2::new(100.0, screen_height - 100.0),
                JOYSTICK_RADIUS,
            ),
            jump_button: Aabb::new(screen_width - 150.0, screen_height - 150.0, 100.0, 100.0),
            action_button: Aabb::new(screen_width - 150.0, screen_height - 270.0, 100.0, 100.0),
            pressed: None,
        }
    }

    /// Route a pointer press; `None` means the press belongs to the game
    pub fn press(&mut self, point: Vec2) -> Option<TouchHit> {
        let hit = if self.joystick.press(point) {
            Some(TouchHit::Joystick)
        } else if self.jump_button.contains_point(point) {
            Some(TouchHit::Jump)
        } else if self.action_button.contains_point(point) {
            Some(TouchHit::Action)
        } else {
            None
        };
        self.pressed = hit;
        hit
    }

    pub fn drag(&mut self, point: Vec2) {
        self.joystick.drag(point);
    }

    /// Any pointer release lets go of every control
    pub fn release(&mut self) {
        self.joystick.release();
        self.pressed = None;
    }

    /// Control currently held down, for highlighting
    pub fn pressed(&self) -> Option<TouchHit> {
        self.pressed
    }
}
