//! Logger construction from a [`Config`].

use super::Logger;
use crate::config::Config;

impl Logger {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let mut logger = Self::new();
        logger
            .set_level(config.level)
            .set_indent(config.indent);
        if !config.newline {
            logger.set_out_print();
        }
        logger
    }
}
