// Input manager - turns window events into per-tick FrameInput

use super::action::{Action, InputSource};
use super::config::InputConfig;
use super::frame::{FrameInput, InputVector};
use super::state::ActionState;
use super::touch::{TouchControls, TouchHit};
use glam::Vec2;
use winit::event::{ElementState, KeyEvent, MouseButton};
use winit::keyboard::PhysicalKey;

/// Collects keyboard, mouse and touch-control input between ticks
pub struct InputManager {
    config: InputConfig,
    actions: ActionState,
    touch: TouchControls,

    /// Last known pointer position
    pointer: Option<Vec2>,
    /// Click that no touch control consumed, waiting for the next tick
    pending_click: Option<Vec2>,
}

impl InputManager {
    /// Create an input manager for a screen of the given size
    pub fn new(screen_width: f32, screen_height: f32) -> Self {
        Self {
            config: InputConfig::with_defaults(),
            actions: ActionState::new(),
            touch: TouchControls::new(screen_width, screen_height),
            pointer: None,
            pending_click: None,
        }
    }

    /// Process a keyboard event from winit
    ///
    /// Returns the bound action when this event newly pressed it.
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) -> Option<Action> {
        let PhysicalKey::Code(key_code) = event.physical_key else {
            return None;
        };
        let action = self.config.action_for(InputSource::key(key_code))?;
        match event.state {
            ElementState::Pressed if !event.repeat => {
                self.press_action(action);
                Some(action)
            }
            ElementState::Pressed => None,
            ElementState::Released => {
                self.release_action(action);
                None
            }
        }
    }

    /// Process a mouse button event from winit (left button acts as touch)
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if let Some(action) = self.config.action_for(InputSource::mouse(button)) {
            match state {
                ElementState::Pressed => self.press_action(action),
                ElementState::Released => self.release_action(action),
            }
        }

        if button != MouseButton::Left {
            return;
        }
        match state {
            ElementState::Pressed => {
                if let Some(point) = self.pointer {
                    self.pointer_pressed(point);
                }
            }
            ElementState::Released => self.pointer_released(),
        }
    }

    /// Process a cursor move (screen pixels)
    pub fn process_cursor_moved(&mut self, x: f64, y: f64) {
        self.pointer_moved(Vec2::new(x as f32, y as f32));
    }

    pub fn press_action(&mut self, action: Action) {
        self.actions.press(action);
    }

    pub fn release_action(&mut self, action: Action) {
        self.actions.release(action);
    }

    /// Pointer went down at `point`
    pub fn pointer_pressed(&mut self, point: Vec2) {
        self.pointer = Some(point);
        match self.touch.press(point) {
            Some(TouchHit::Jump) => self.actions.press(Action::Jump),
            Some(TouchHit::Action) => self.actions.press(Action::Interact),
            Some(TouchHit::Joystick) => {}
            None => self.pending_click = Some(point),
        }
    }

    /// Pointer went up anywhere
    pub fn pointer_released(&mut self) {
        match self.touch.pressed() {
            Some(TouchHit::Jump) => self.actions.release(Action::Jump),
            Some(TouchHit::Action) => self.actions.release(Action::Interact),
            _ => {}
        }
        self.touch.release();
    }

    pub fn pointer_moved(&mut self, point: Vec2) {
        self.pointer = Some(point);
        self.touch.drag(point);
    }

    /// Input for the next simulation tick
    pub fn frame_input(&self) -> FrameInput {
        let keys = InputVector::new(self.actions.horizontal_axis(), 0.0);
        FrameInput {
            movement: keys.merge(self.touch.joystick.value()),
            jump_pressed: self.actions.pressed(Action::Jump),
            interact_pressed: self.actions.pressed(Action::Interact),
            back_pressed: self.actions.pressed(Action::Back),
            pointer: self.pointer,
            click: self.pending_click,
        }
    }

    /// Call once after each simulation tick consumed `frame_input`
    pub fn update(&mut self) {
        self.actions.end_tick();
        self.pending_click = None;
    }

    /// Bindings, for remapping keys at runtime
    #[allow(dead_code)]
    pub fn config_mut(&mut self) -> &mut InputConfig {
        &mut self.config
    }

    /// Drop all held keys and touches (e.g. on focus loss)
    pub fn reset(&mut self) {
        self.actions.clear();
        self.touch.release();
        self.pending_click = None;
    }
}
