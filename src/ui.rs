use anyhow::Context;
use lib_game::Round;
use macroquad::prelude::*;

const FONT_PATH: &str = "assets/DejaVuSans.ttf";
const FONT_SCALE: f32 = 1.0;
const HUD_FONT_SIZE: u16 = 20;
const MODE_FONT_SIZE: u16 = 18;
const HINT_FONT_SIZE: u16 = 16;
const BANNER_FONT_SIZE: u16 = 48;
const SCORE_FONT_SIZE: u16 = 28;
const TEXT_MARGIN: f32 = 8.0;

static INSTRUCTIONS_TEXT: &str = "Left click shapes. ESC to quit to menu.";

pub struct Ui {
    font: Font,
}

impl Ui {
    pub async fn new() -> anyhow::Result<Self> {
        let font = load_ttf_font(FONT_PATH)
            .await
            .with_context(|| format!("loading font {FONT_PATH:?}"))?;

        Ok(Self { font })
    }

    pub fn measure(&self, text: &str, font_size: u16) -> TextDimensions {
        measure_text(text, Some(&self.font), font_size, FONT_SCALE)
    }

    /// Draws `text` with its top-left corner at `(x, y)`.
    pub fn draw_text_at(&self, text: &str, x: f32, y: f32, font_size: u16, color: Color) {
        let dims = self.measure(text, font_size);
        draw_text_ex(
            text,
            x,
            y + dims.offset_y,
            TextParams {
                font: Some(&self.font),
                font_size,
                font_scale: FONT_SCALE,
                color,
                ..Default::default()
            },
        );
    }

    pub fn draw_centered(&self, text: &str, y: f32, font_size: u16, color: Color) {
        let center = get_text_center(text, Some(&self.font), font_size, FONT_SCALE, 0.0);
        draw_text_ex(
            text,
            screen_width() / 2.0 - center.x,
            y - center.y,
            TextParams {
                font: Some(&self.font),
                font_size,
                font_scale: FONT_SCALE,
                color,
                ..Default::default()
            },
        );
    }

    pub fn draw_round(&self, round: &Round) {
        self.draw_text_at(&round.hud_text(), TEXT_MARGIN, TEXT_MARGIN, HUD_FONT_SIZE, WHITE);
        self.draw_text_at(
            &format!("Mode: {}", round.mode().name()),
            TEXT_MARGIN,
            TEXT_MARGIN + 28.0,
            MODE_FONT_SIZE,
            WHITE,
        );
        self.draw_text_at(
            INSTRUCTIONS_TEXT,
            TEXT_MARGIN,
            screen_height() - TEXT_MARGIN - HINT_FONT_SIZE as f32 - 6.0,
            HINT_FONT_SIZE,
            WHITE,
        );

        if let Some(banner) = round.state().banner() {
            self.draw_announcement_text(banner, &round.final_score_text());
        }
    }

    fn draw_announcement_text(&self, text: &str, hint: &str) {
        draw_rectangle(
            0.0,
            0.0,
            screen_width(),
            screen_height(),
            Color::from_rgba(0, 0, 0, 160),
        );

        let mid = screen_height() / 2.0;
        self.draw_centered(text, mid - 40.0, BANNER_FONT_SIZE, WHITE);
        self.draw_centered(hint, mid + 30.0, SCORE_FONT_SIZE, WHITE);
    }
}
