//! Input mapping from raw key events to semantic actions
//!
//! Maps keyboard input to high-level actions like ToggleFullscreen and
//! ResetView. Mouse buttons, cursor movement, and the wheel are NOT mapped
//! here - they go directly to the ViewController.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Actions triggered by special keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Exit the application (Escape when windowed)
    Exit,
    /// Leave fullscreen (Escape when fullscreen)
    LeaveFullscreen,
    /// Toggle fullscreen mode (F11)
    ToggleFullscreen,
    /// Reset pan, zoom, and rotation deltas (Backspace)
    ResetView,
}

/// Maps raw key events to semantic actions
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Returns `Some(action)` for handled keys on press, `None` otherwise
    pub fn map_keyboard(
        key: KeyCode,
        state: ElementState,
        is_fullscreen: bool,
    ) -> Option<InputAction> {
        // Only handle key presses, not releases
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Escape => {
                if is_fullscreen {
                    Some(InputAction::LeaveFullscreen)
                } else {
                    Some(InputAction::Exit)
                }
            }
            KeyCode::F11 => Some(InputAction::ToggleFullscreen),
            KeyCode::Backspace => Some(InputAction::ResetView),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_when_fullscreen_leaves_fullscreen() {
        let action = InputMapper::map_keyboard(
            KeyCode::Escape,
            ElementState::Pressed,
            true, // fullscreen
        );
        assert_eq!(action, Some(InputAction::LeaveFullscreen));
    }

    #[test]
    fn test_escape_when_windowed_exits() {
        let action = InputMapper::map_keyboard(
            KeyCode::Escape,
            ElementState::Pressed,
            false, // windowed
        );
        assert_eq!(action, Some(InputAction::Exit));
    }

    #[test]
    fn test_f11_toggles_fullscreen() {
        for is_fullscreen in [false, true] {
            let action =
                InputMapper::map_keyboard(KeyCode::F11, ElementState::Pressed, is_fullscreen);
            assert_eq!(action, Some(InputAction::ToggleFullscreen));
        }
    }

    #[test]
    fn test_backspace_resets_view() {
        let action =
            InputMapper::map_keyboard(KeyCode::Backspace, ElementState::Pressed, false);
        assert_eq!(action, Some(InputAction::ResetView));
    }

    #[test]
    fn test_other_keys_not_mapped() {
        for key in [KeyCode::KeyW, KeyCode::Space, KeyCode::Enter] {
            let action = InputMapper::map_keyboard(key, ElementState::Pressed, false);
            assert_eq!(action, None, "Key {:?} should not be mapped", key);
        }
    }

    #[test]
    fn test_key_release_ignored() {
        let action = InputMapper::map_keyboard(KeyCode::Escape, ElementState::Released, false);
        assert_eq!(action, None);
    }
}
