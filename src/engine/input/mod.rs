// Input handling system
//
// Window events are translated into a single `FrameInput` per simulation
// tick. Keyboard keys and the on-screen joystick feed the same normalized
// movement vector, so the player controller never cares where input came from.
//
// ## Architecture
//
// - `action`: Game actions and default key bindings
// - `config`: Remappable key bindings
// - `state`: Held actions and the edges since the last tick
// - `touch`: Virtual joystick and on-screen buttons
// - `frame`: The per-tick input snapshot
// - `manager`: Glue between winit events and everything above
//
// ## Usage Example
//
// ```rust
// let mut input = InputManager::new(1200.0, 800.0);
//
// // In the event loop
// input.process_keyboard_event(&key_event);
//
// // Once per fixed tick
// world.update(&input.frame_input(), tick);
// input.update();
// ```

pub mod action;
pub mod config;
pub mod frame;
pub mod manager;
pub mod state;
pub mod touch;

// Re-export commonly used types
pub use action::Action;
pub use frame::{FrameInput, HorizontalInput};
pub use manager::InputManager;
