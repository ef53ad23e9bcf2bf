use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Pick the log filter: `RUST_LOG` wins, then the CLI flag, then the config value
pub fn build_filter(
    rust_log: Option<&str>,
    cli_level: Option<LevelFilter>,
    config_level: &str,
) -> EnvFilter {
    if let Some(filter) = rust_log.and_then(|directives| EnvFilter::try_new(directives).ok()) {
        return filter;
    }

    let level = cli_level
        .or_else(|| config_level.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::INFO);

    EnvFilter::new(format!(
        "quill={level},quill_cli={level},quill_web={level},quill_surrealdb={level},\
         quill_core={level},tower_http={level}"
    ))
}

pub fn init(filter: EnvFilter) {
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rust_log_takes_priority() {
        let filter = build_filter(Some("warn"), Some(LevelFilter::TRACE), "debug");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_cli_beats_config() {
        let filter = build_filter(None, Some(LevelFilter::ERROR), "debug");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::ERROR));
    }

    #[test]
    fn test_config_level_used_when_nothing_else() {
        let filter = build_filter(None, None, "debug");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_garbage_config_level_falls_back_to_info() {
        let filter = build_filter(None, None, "loud");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }
}
