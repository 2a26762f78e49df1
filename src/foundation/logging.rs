use env_logger::{fmt::Color, Builder, Env};
use log::{Level, LevelFilter};
use std::io::Write;

pub const LOG_ENV: &str = "LIVECHRON_LOG";
pub const LOG_STYLE_ENV: &str = "LIVECHRON_LOG_STYLE";

/// Installs the global logger. Level defaults to `info` and follows `LIVECHRON_LOG`.
pub fn init_logger() {
    let env = Env::default()
        .filter_or(LOG_ENV, "info")
        .write_style(LOG_STYLE_ENV);

    Builder::from_env(env)
        .filter(Some("reqwest"), LevelFilter::Warn)
        .filter(Some("hyper"), LevelFilter::Warn)
        .format(|buf, record| {
            let mut style = buf.style();
            let level = match record.level() {
                Level::Warn => style.set_color(Color::Yellow).value("   warn"),
                Level::Info => style.set_color(Color::Green).value("   info"),
                Level::Error => style.set_color(Color::Red).value("  error"),
                Level::Debug => style.set_color(Color::Blue).value("  debug"),
                Level::Trace => style
                    .set_color(Color::Blue)
                    .set_bold(true)
                    .value("  trace"),
            };

            writeln!(buf, "{} {}", level, record.args())
        })
        .init();
}
