use anyhow::Context;
use lib_game::{GAME_CFG_PATH, GameCfg, InputModel, Round, RoundOutcome};
use log::{LevelFilter, error, info};
use macroquad::prelude::*;
use menu::{Menu, MenuChoice};
use quad_dbg::{Debug, dump, init_on_screen_log};
use render::Render;
use sound_director::SoundDirector;
use ui::Ui;

mod menu;
mod render;
mod sound_director;
mod ui;

enum AppState {
    Menu,
    Active(Round),
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Shape Wars".to_owned(),
        window_width: 900,
        window_height: 600,
        window_resizable: false,
        fullscreen: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    if let Err(e) = init_on_screen_log(LevelFilter::Debug) {
        eprintln!("Failed to install the logger: {e}");
    }

    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        error!("Game panicked:\n{info}");
        hook(info);
    }));

    if let Err(e) = run().await {
        error!("Game exited with error: {e:?}");
        std::process::exit(1);
    }
}

fn round_seed() -> u64 {
    (macroquad::miniquad::date::now() * 1000.0) as u64
}

fn play_bounds() -> Rect {
    Rect::new(0.0, 0.0, screen_width(), screen_height())
}

async fn run() -> anyhow::Result<()> {
    let ui = Ui::new().await.context("loading the UI")?;
    let sounder = SoundDirector::new().await;
    let cfg = GameCfg::load_or_default(GAME_CFG_PATH);
    let mut render = Render::new();
    let mut menu = Menu::new();
    let mut debug = Debug::new();

    info!("Project version: {}", env!("CARGO_PKG_VERSION"));
    info!("Done loading");

    prevent_quit();

    let mut state = AppState::Menu;
    loop {
        let dt = get_frame_time();
        let input = InputModel::capture();

        if input.quit_requested {
            info!("Window closed");
            break;
        }
        if input.debug_toggle_requested {
            debug.toggle();
        }

        let next_state = match &mut state {
            AppState::Menu => match menu.update(&input, &ui) {
                Some(MenuChoice::Play(mode)) => {
                    render.reset();
                    Some(AppState::Active(Round::new(mode, cfg, play_bounds(), round_seed())))
                }
                Some(MenuChoice::Exit) => break,
                None => None,
            },
            AppState::Active(round) => match round.update(dt, &input) {
                RoundOutcome::Exit => {
                    info!("Back to mode selection");
                    Some(AppState::Menu)
                }
                RoundOutcome::Continue => None,
            },
        };
        if let Some(next_state) = next_state {
            state = next_state;
        }

        match &state {
            AppState::Menu => menu.draw(&ui),
            AppState::Active(round) => {
                sounder.direct_sounds(round.events());
                render.draw(round, dt);
                ui.draw_round(round);

                dump!("state: {:?}", round.state());
                dump!("shapes: {}", round.shapes.len());
                dump!("powerups: {}", round.powerups.len());
                dump!("elapsed: {:.1}", round.clock.elapsed);
            }
        }

        dump!("FPS: {}", get_fps());
        debug.draw();

        next_frame().await
    }

    Ok(())
}
