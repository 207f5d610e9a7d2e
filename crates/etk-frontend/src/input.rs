//! egui input sampling for the gizmo layer

use egui::{InputState, Key, PointerButton, PointerState};
use etk_core::{ButtonState, InputSnapshot};
use glam::{Vec2, Vec3};

fn button_state(pointer: &PointerState, button: PointerButton) -> ButtonState {
    ButtonState {
        down: pointer.button_down(button),
        pressed: pointer.button_pressed(button),
        released: pointer.button_released(button),
    }
}

/// Primary = left button, secondary (cancel) = right button, snapping while
/// Ctrl (Cmd on macOS) is held.
pub fn sample_input(input: &InputState) -> InputSnapshot {
    InputSnapshot {
        primary: button_state(&input.pointer, PointerButton::Primary),
        secondary: button_state(&input.pointer, PointerButton::Secondary),
        snap_modifier: input.modifiers.command,
    }
}

/// Latest pointer position in screen coordinates
pub fn pointer_position(input: &InputState) -> Option<Vec2> {
    input.pointer.latest_pos().map(|p| Vec2::new(p.x, p.y))
}

/// Fly direction as (right, up, forward) from WASD/QE.
pub fn fly_direction(key_down: impl Fn(Key) -> bool) -> Vec3 {
    let axis = |positive: Key, negative: Key| {
        (key_down(positive) as i32 - key_down(negative) as i32) as f32
    };

    Vec3::new(
        axis(Key::D, Key::A),
        axis(Key::E, Key::Q),
        axis(Key::W, Key::S),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fly_direction() {
        let direction = fly_direction(|key| matches!(key, Key::W | Key::A | Key::E));
        assert_eq!(direction, Vec3::new(-1.0, 1.0, 1.0));
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let direction = fly_direction(|key| matches!(key, Key::W | Key::S | Key::Q));
        assert_eq!(direction, Vec3::new(0.0, -1.0, 0.0));
    }

    #[test]
    fn test_idle_input() {
        let input = InputState::default();
        assert_eq!(sample_input(&input), InputSnapshot::default());
        assert_eq!(pointer_position(&input), None);
    }
}
