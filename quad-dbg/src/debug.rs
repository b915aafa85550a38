use macroquad::prelude::*;

use crate::log_sink::LOG_RING;
use crate::screendump::SCREEN_DUMP;

const DBG_FONT_SIZE: u16 = 16;

/// Draws the recent log messages and the `dump!` lines on top
/// of everything else.
pub struct Debug {
    enabled: bool,
    text_cursor_x: f32,
    text_cursor_y: f32,
}

impl Debug {
    pub fn new() -> Self {
        Self {
            enabled: false,
            text_cursor_x: 0.0,
            text_cursor_y: DBG_FONT_SIZE as f32,
        }
    }

    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }

    pub fn new_frame(&mut self) {
        self.text_cursor_x = 0.0;
        self.text_cursor_y = DBG_FONT_SIZE as f32;

        set_default_camera();
    }

    pub fn new_dbg_line(&mut self) {
        self.text_cursor_x = 0.0;
        self.text_cursor_y += DBG_FONT_SIZE as f32;
    }

    pub fn put_debug_text(&mut self, text: &str, color: Color) {
        draw_text(
            text,
            self.text_cursor_x,
            self.text_cursor_y,
            DBG_FONT_SIZE as f32,
            color,
        );

        self.text_cursor_x += measure_text(text, None, DBG_FONT_SIZE, 1.0).width;
    }

    /// Draws the overlay if it is enabled. The dump lines are consumed
    /// either way, so they never pile up across frames.
    pub fn draw(&mut self) {
        self.new_frame();

        let Ok(mut dump) = SCREEN_DUMP.lock() else {
            return;
        };
        if !self.enabled {
            dump.clear();
            return;
        }

        for line in dump.lines() {
            self.put_debug_text(line, WHITE);
            self.new_dbg_line();
        }
        dump.clear();
        drop(dump);

        let Ok(ring) = LOG_RING.lock() else {
            return;
        };
        let now = get_time() as f32;
        for msg in ring.live(now) {
            self.put_debug_text(&msg.line, msg.color);
            self.new_dbg_line();
        }
    }
}
