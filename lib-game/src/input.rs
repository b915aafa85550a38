use macroquad::prelude::*;

/// Everything the game cares about from one frame of input.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputModel {
    /// Where the left mouse button got pressed, in screen coordinates.
    pub click: Option<Vec2>,
    pub up_pressed: bool,
    pub down_pressed: bool,
    pub confirmation_detected: bool,
    pub exit_requested: bool,
    pub debug_toggle_requested: bool,
    pub quit_requested: bool,
}

impl InputModel {
    pub fn capture() -> Self {
        let click = is_mouse_button_pressed(MouseButton::Left).then(|| {
            let (mx, my) = mouse_position();
            vec2(mx, my)
        });
        let up_pressed = is_key_pressed(KeyCode::Up) || is_key_pressed(KeyCode::W);
        let down_pressed = is_key_pressed(KeyCode::Down) || is_key_pressed(KeyCode::S);
        let confirmation_detected =
            is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::KpEnter);
        let exit_requested = is_key_pressed(KeyCode::Escape);
        let debug_toggle_requested = is_key_pressed(KeyCode::GraveAccent);
        let quit_requested = is_quit_requested();

        Self {
            click,
            up_pressed,
            down_pressed,
            confirmation_detected,
            exit_requested,
            debug_toggle_requested,
            quit_requested,
        }
    }

    pub fn clicked_at(pos: Vec2) -> Self {
        Self {
            click: Some(pos),
            ..Default::default()
        }
    }

    pub fn exit() -> Self {
        Self {
            exit_requested: true,
            ..Default::default()
        }
    }
}
