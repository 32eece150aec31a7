use anyhow::{Context, Result};
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

/// Sends diagnostics to stderr so stdout only carries matches.
pub fn setup(debug: bool) -> Result<()> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{l} {f}:{L} {m}{n}")))
        .build();

    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))
        .context("invalid logging configuration")?;

    log4rs::init_config(config).context("logger already initialized")?;
    Ok(())
}
