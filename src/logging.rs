use std::io::Write;

use chrono::Utc;
use colored::{Color, Colorize as _};
use env_logger::{Builder, Env, Target};
use log::Level;

/// Installs the global logger.
///
/// Logs go to stderr so that `--dry-run` output on stdout stays clean.
/// `RUST_LOG` overrides the default filter.
pub fn init() {
    let mut builder = Builder::new();

    builder.parse_env(get_env());
    builder.target(Target::Stderr);

    builder.format(|f, record| {
        let time = Utc::now().format("%Y-%m-%d %H:%M:%S").to_string().dimmed();
        let color = color_by_level(record.level());
        let level = level_to_str(record.level()).color(color);
        let target = record.target().dimmed();
        let message = record.args().to_string().color(color);

        writeln!(f, "{time} [{level}@{target}] {message}")
    });

    builder.init();
}

/// HTTP internals stay at `warn` unless asked for.
fn get_env() -> Env<'static> {
    let default_filter = if cfg!(debug_assertions) {
        "warn,discordmsg=debug"
    } else {
        "warn,discordmsg=info"
    };
    Env::default().default_filter_or(default_filter)
}

const fn color_by_level(level: Level) -> Color {
    match level {
        Level::Trace => Color::Magenta,
        Level::Debug => Color::Blue,
        Level::Info => Color::Green,
        Level::Warn => Color::Yellow,
        Level::Error => Color::Red,
    }
}

const fn level_to_str(level: Level) -> &'static str {
    match level {
        Level::Trace => "T",
        Level::Debug => "D",
        Level::Info => "I",
        Level::Warn => "W",
        Level::Error => "E",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_single_letters() {
        let letters: Vec<&str> = [
            Level::Trace,
            Level::Debug,
            Level::Info,
            Level::Warn,
            Level::Error,
        ]
        .into_iter()
        .map(level_to_str)
        .collect();
        assert_eq!(letters, ["T", "D", "I", "W", "E"]);
    }
}
