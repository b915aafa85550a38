use core::fmt;
use std::fmt::Write;
use std::sync::{LazyLock, Mutex};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use macroquad::prelude::*;

pub(crate) const LOG_MSG_LIFE: f32 = 3.0;
pub(crate) const LOG_MSG_CAP: usize = 30;
const LOG_MSG_CHARS: usize = 255;

#[derive(Clone)]
pub(crate) struct LogMsg {
    pub(crate) color: Color,
    pub(crate) line: String,
    pub(crate) spawn_time: f32,
}

/// A ring of the most recent log messages.
pub(crate) struct LogRing {
    cur: usize,
    pub(crate) msgs: [LogMsg; LOG_MSG_CAP],
}

impl LogRing {
    fn new() -> Self {
        Self {
            cur: 0,
            msgs: std::array::from_fn(|_| LogMsg {
                line: String::with_capacity(LOG_MSG_CHARS),
                spawn_time: -1.0,
                color: WHITE,
            }),
        }
    }

    fn put(&mut self, msg: &fmt::Arguments, color: Color, time: f32) {
        let cell = &mut self.msgs[self.cur];

        cell.line.clear();
        let _ = write!(&mut cell.line, "{}", msg);
        if cell.line.len() > LOG_MSG_CHARS {
            let mut cut = LOG_MSG_CHARS;
            while !cell.line.is_char_boundary(cut) {
                cut -= 1;
            }
            cell.line.truncate(cut);
        }
        cell.spawn_time = time;
        cell.color = color;

        self.cur = (self.cur + 1) % LOG_MSG_CAP;
    }

    pub(crate) fn live(&self, now: f32) -> impl Iterator<Item = &LogMsg> {
        // Oldest first
        self.msgs[self.cur..]
            .iter()
            .chain(self.msgs[..self.cur].iter())
            .filter(move |msg| msg.spawn_time >= 0.0 && msg.spawn_time + LOG_MSG_LIFE >= now)
    }
}

pub(crate) static LOG_RING: LazyLock<Mutex<LogRing>> = LazyLock::new(|| Mutex::new(LogRing::new()));

fn level_color(level: Level) -> Color {
    match level {
        Level::Error => RED,
        Level::Warn => YELLOW,
        Level::Info => GREEN,
        Level::Debug => WHITE,
        Level::Trace => GRAY,
    }
}

#[derive(Clone, Copy, Debug)]
struct OnScreenLog;

static ON_SCREEN_LOG: OnScreenLog = OnScreenLog;

impl Log for OnScreenLog {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        #[cfg(not(target_family = "wasm"))]
        eprintln!("[{}] {}: {}", record.level(), record.target(), record.args());

        let Ok(mut ring) = LOG_RING.lock() else {
            return;
        };
        ring.put(record.args(), level_color(record.level()), get_time() as f32);
    }

    fn flush(&self) { /* NOOP */ }
}

/// Installs the on-screen logger. Messages are also echoed to stderr
/// on desktop.
pub fn init_on_screen_log(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&ON_SCREEN_LOG)?;
    log::set_max_level(level);

    Ok(())
}
