// Key and button bindings

use super::action::{default_bindings, Action, InputSource};
use std::collections::HashMap;

/// Which action each key or mouse button triggers
///
/// A source triggers at most one action; an action may have several sources
/// (arrows and WASD both move).
#[derive(Debug, Clone)]
pub struct InputConfig {
    bindings: HashMap<InputSource, Action>,
}

impl InputConfig {
    pub fn from_bindings(bindings: impl IntoIterator<Item = (InputSource, Action)>) -> Self {
        Self {
            bindings: bindings.into_iter().collect(),
        }
    }

    pub fn with_defaults() -> Self {
        Self::from_bindings(default_bindings())
    }

    pub fn action_for(&self, source: InputSource) -> Option<Action> {
        self.bindings.get(&source).copied()
    }

    /// Point `source` at `action`, returning what it triggered before
    #[allow(dead_code)]
    pub fn bind(&mut self, source: InputSource, action: Action) -> Option<Action> {
        self.bindings.insert(source, action)
    }

    #[allow(dead_code)]
    pub fn is_bound(&self, action: Action) -> bool {
        self.bindings.values().any(|bound| *bound == action)
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::event::MouseButton;
    use winit::keyboard::KeyCode;

    #[test]
    fn test_defaults() {
        let config = InputConfig::default();
        assert_eq!(
            config.action_for(InputSource::key(KeyCode::Space)),
            Some(Action::Jump)
        );
        assert_eq!(
            config.action_for(InputSource::key(KeyCode::Escape)),
            Some(Action::Back)
        );
        // Arrows and WASD both move
        assert_eq!(
            config.action_for(InputSource::key(KeyCode::KeyD)),
            Some(Action::MoveRight)
        );
        assert_eq!(
            config.action_for(InputSource::key(KeyCode::ArrowRight)),
            Some(Action::MoveRight)
        );
        assert_eq!(config.action_for(InputSource::mouse(MouseButton::Left)), None);
    }

    #[test]
    fn test_rebind_replaces_previous_action() {
        let mut config = InputConfig::from_bindings(Vec::new());
        let key = InputSource::key(KeyCode::KeyW);
        assert_eq!(config.bind(key, Action::Interact), None);
        assert_eq!(config.bind(key, Action::Jump), Some(Action::Interact));
        assert_eq!(config.action_for(key), Some(Action::Jump));
        assert!(!config.is_bound(Action::Interact));
    }

    #[test]
    fn test_mouse_binding() {
        let mut config = InputConfig::from_bindings(Vec::new());
        config.bind(InputSource::mouse(MouseButton::Right), Action::Interact);
        assert_eq!(
            config.action_for(InputSource::mouse(MouseButton::Right)),
            Some(Action::Interact)
        );
        assert!(config.is_bound(Action::Interact));
    }
}
