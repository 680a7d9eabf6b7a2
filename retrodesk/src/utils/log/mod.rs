use tracing::{metadata::LevelFilter, Subscriber};
use tracing_subscriber::{filter::ParseError, layer::SubscriberExt, EnvFilter};

#[cfg(feature = "file-log")]
pub mod file;

/// Build the subscriber for `level_regex`, e.g. `info` or
/// `retrodesk_core=debug`. An unparsable filter falls back to `info` and the
/// error is handed back so it can be reported once logging works.
#[must_use]
pub fn parse_log_level(level_regex: &str) -> (impl Subscriber, Option<ParseError>) {
    let mut parse_err = None;
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse(level_regex)
        .unwrap_or_else(|err| {
            parse_err = Some(err);
            EnvFilter::new("info")
        });
    (get_subscribers(filter), parse_err)
}

#[allow(clippy::let_and_return)]
pub fn get_subscribers(filter: EnvFilter) -> impl Subscriber {
    // stdout carries the state stream, so logs go to stderr.
    let stderr = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    let subscriber = tracing_subscriber::registry().with(filter).with(stderr);

    #[cfg(feature = "file-log")]
    let subscriber = file::add_layer(subscriber);

    subscriber
}

/// Install the global subscriber. `RUST_LOG` wins over `level_regex`.
pub fn setup_logging(level_regex: &str) {
    let level = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_else(|_| level_regex.to_owned());
    let (subscriber, parse_err) = parse_log_level(&level);
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Couldn't setup global subscriber (logger): {err}");
        return;
    }
    if let Some(err) = parse_err {
        tracing::warn!("Invalid log level {:?}, using info: {}", level, err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_levels_parse_cleanly() {
        let (_, err) = parse_log_level("retrodesk_core=debug,info");
        assert!(err.is_none());
    }

    #[test]
    fn invalid_levels_fall_back() {
        let (_, err) = parse_log_level("retrodesk_core=loud");
        assert!(err.is_some());
    }
}
