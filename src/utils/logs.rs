use std::str::FromStr;
use tracing::Level;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};

pub fn parse_level(level: &str) -> LibraryResult<Level> {
    Level::from_str(level).map_err(|err| LibraryError::validation(
        format!("invalid log level {} due to {}", level, err).as_str(), None))
}

// stdout belongs to the menu, so diagnostics always go to stderr
pub fn setup_tracing(config: &Configuration) -> LibraryResult<()> {
    let level = parse_level(config.log_level.as_str())?;
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        // disable printing the name of the module in every log line.
        .with_target(false);
    let res = if config.log_json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    res.map_err(|err| LibraryError::runtime(format!("failed to install tracing {}", err).as_str(), None))
}

#[cfg(test)]
mod tests {
    use tracing::Level;
    use crate::utils::logs::parse_level;

    #[tokio::test]
    async fn test_should_parse_levels() {
        assert_eq!(Level::WARN, parse_level("warn").expect("should parse warn"));
        assert_eq!(Level::DEBUG, parse_level("DEBUG").expect("should parse debug"));
        assert!(parse_level("loud").is_err());
    }
}
