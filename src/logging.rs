//! Console logging through log4rs, reference
//! https://docs.rs/log4rs

use crate::error::Error;
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};

/// Install the global logger, writing to stderr at `level` and above.
pub fn init_log(level: LevelFilter) -> Result<(), Error> {
    let console = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {h({l})} {t} {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(level)))
                .build("console", Box::new(console)),
        )
        .build(Root::builder().appender("console").build(level))
        .map_err(|e| Error::Logging(e.to_string()))?;
    log4rs::init_config(config).map_err(|e| Error::Logging(e.to_string()))?;
    Ok(())
}

/// Parse a level name like `info` or `DEBUG`.
pub fn parse_level(s: &str) -> Result<LevelFilter, Error> {
    s.parse::<LevelFilter>()
        .map_err(|_| Error::Config(format!("unknown log level `{s}`")))
}
