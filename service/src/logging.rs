use crate::config::Config;
use log::{LevelFilter, SetLoggerError};
use simplelog::{self, ConfigBuilder};

/// Verbose dependencies hidden from console output unless the level is Trace.
const FILTERED_MODULES: &[&str] = &[
    "sqlx",
    "sea_orm",
    "tower",
    "tower_sessions",
    "hyper",
    "axum",
];

pub struct Logger {}

impl Logger {
    /// Installs the global terminal logger at the configured level.
    pub fn init_logger(config: &Config) -> Result<(), SetLoggerError> {
        let log_config = Self::build_log_config(config.log_level_filter);

        simplelog::TermLogger::init(
            config.log_level_filter,
            log_config,
            simplelog::TerminalMode::Mixed,
            simplelog::ColorChoice::Auto,
        )
    }

    fn filters_dependencies(level: LevelFilter) -> bool {
        level != LevelFilter::Trace
    }

    fn build_log_config(level: LevelFilter) -> simplelog::Config {
        let mut builder = ConfigBuilder::new();
        builder.set_time_format_rfc3339();

        if Self::filters_dependencies(level) {
            for module in FILTERED_MODULES {
                builder.add_filter_ignore_str(module);
            }
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_level_shows_dependency_logs() {
        assert!(!Logger::filters_dependencies(LevelFilter::Trace));
    }

    #[test]
    fn every_other_level_hides_dependency_logs() {
        for level in [
            LevelFilter::Off,
            LevelFilter::Error,
            LevelFilter::Warn,
            LevelFilter::Info,
            LevelFilter::Debug,
        ] {
            assert!(Logger::filters_dependencies(level), "{level} should filter");
        }
    }

    #[test]
    fn filtered_modules_cover_the_database_and_http_stacks() {
        for module in ["sqlx", "sea_orm", "axum", "tower_sessions"] {
            assert!(FILTERED_MODULES.contains(&module), "{module} missing");
        }
    }

    #[test]
    fn build_log_config_succeeds_for_both_modes() {
        let _filtered = Logger::build_log_config(LevelFilter::Info);
        let _unfiltered = Logger::build_log_config(LevelFilter::Trace);
    }
}
