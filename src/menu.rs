use lib_game::{GameMode, InputModel};
use macroquad::prelude::*;

use crate::ui::Ui;

const TITLE_TEXT: &str = "Shape Wars";
const HINT_TEXT: &str = "Use Up/Down + Enter, or click";
const ITEM_FONT_SIZE: u16 = 28;
const ITEM_X: f32 = 300.0;
const ITEM_Y: f32 = 180.0;
const ITEM_STEP: f32 = 50.0;
const BACKGROUND: Color = Color::from_rgba(20, 20, 30, 255);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Play(GameMode),
    Exit,
}

const ITEMS: [(&str, MenuChoice); 5] = [
    ("Start - Normal", MenuChoice::Play(GameMode::Normal)),
    ("Start - Timed (60s)", MenuChoice::Play(GameMode::Timed)),
    ("Start - Endless", MenuChoice::Play(GameMode::Endless)),
    ("Start - Hardcore", MenuChoice::Play(GameMode::Hardcore)),
    ("Exit", MenuChoice::Exit),
];

/// Mode selection screen.
pub struct Menu {
    selected: usize,
}

impl Menu {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    pub fn update(&mut self, input: &InputModel, ui: &Ui) -> Option<MenuChoice> {
        if let Some(click) = input.click {
            let hit = (0..ITEMS.len()).find(|&idx| Self::item_rect(ui, idx).contains(click));
            if let Some(idx) = hit {
                return Some(ITEMS[idx].1);
            }
        }

        self.navigate(input)
    }

    /// Keyboard part of the menu logic.
    fn navigate(&mut self, input: &InputModel) -> Option<MenuChoice> {
        if input.down_pressed {
            self.selected = (self.selected + 1) % ITEMS.len();
        }
        if input.up_pressed {
            self.selected = (self.selected + ITEMS.len() - 1) % ITEMS.len();
        }
        if input.confirmation_detected {
            return Some(ITEMS[self.selected].1);
        }

        None
    }

    pub fn draw(&self, ui: &Ui) {
        clear_background(BACKGROUND);

        ui.draw_text_at(TITLE_TEXT, 260.0, 80.0, 48, WHITE);
        for (idx, (label, _)) in ITEMS.iter().enumerate() {
            let (text, color) = if idx == self.selected {
                (format!("> {label}"), YELLOW)
            } else {
                (format!("  {label}"), WHITE)
            };
            ui.draw_text_at(&text, ITEM_X, Self::item_y(idx), ITEM_FONT_SIZE, color);
        }
        ui.draw_text_at(HINT_TEXT, 200.0, 520.0, 18, WHITE);
    }

    fn item_y(idx: usize) -> f32 {
        ITEM_Y + idx as f32 * ITEM_STEP
    }

    fn item_rect(ui: &Ui, idx: usize) -> Rect {
        let dims = ui.measure(ITEMS[idx].0, ITEM_FONT_SIZE);
        Rect::new(ITEM_X, Self::item_y(idx), dims.width, dims.height)
    }
}
