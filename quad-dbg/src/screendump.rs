use std::fmt::{self, Write};
use std::sync::{LazyLock, Mutex};

const DUMP_LINES: usize = 32;

/// Lines collected with [dump!] during the current frame.
pub(crate) struct ScreenDump {
    lines: Vec<String>,
}

impl ScreenDump {
    fn new() -> Self {
        Self {
            lines: Vec::with_capacity(DUMP_LINES),
        }
    }

    fn put(&mut self, args: fmt::Arguments) {
        if self.lines.len() >= DUMP_LINES {
            return;
        }

        let mut line = String::new();
        let _ = line.write_fmt(args);
        self.lines.push(line);
    }

    pub(crate) fn lines(&self) -> &[String] {
        &self.lines
    }

    pub(crate) fn clear(&mut self) {
        self.lines.clear();
    }
}

pub(crate) static SCREEN_DUMP: LazyLock<Mutex<ScreenDump>> =
    LazyLock::new(|| Mutex::new(ScreenDump::new()));

#[doc(hidden)]
pub fn put_dump_line(args: fmt::Arguments) {
    if let Ok(mut dump) = SCREEN_DUMP.lock() {
        dump.put(args);
    }
}

/// Puts a line of diagnostics on the debug overlay for this frame only.
#[macro_export]
macro_rules! dump {
    ($($arg:tt)*) => {
        $crate::put_dump_line(format_args!($($arg)*))
    };
}
