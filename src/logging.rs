//! Tracing setup for the command line.

use tracing_subscriber::EnvFilter;

/// Packages whose events are shown. Targets use underscores.
const PACKAGES: &[&str] = &[
    env!("CARGO_PKG_NAME"),
    "almanac-arith",
    "almanac-calendar",
    "almanac-iso",
];

/// Most verbose level shown for a `-v` count.
fn level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// One `target=level` directive per package.
fn default_filter(verbosity: u8) -> String {
    let level = level(verbosity);
    PACKAGES
        .iter()
        .map(|package| format!("{}={level}", package.replace('-', "_")))
        .collect::<Vec<_>>()
        .join(",")
}

/// Installs the global subscriber, writing to stderr so reports on stdout
/// stay parseable. `RUST_LOG` overrides `-v` when set.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use tracing_subscriber::filter::LevelFilter;

    use super::*;

    #[test]
    fn quiet_by_default() {
        assert_eq!(
            default_filter(0),
            "almanac=warn,almanac_arith=warn,almanac_calendar=warn,almanac_iso=warn"
        );
    }

    #[test]
    fn each_flag_raises_the_level() {
        let hints: Vec<_> = (0..5)
            .map(|v| EnvFilter::new(default_filter(v)).max_level_hint())
            .collect();
        assert_eq!(
            hints,
            vec![
                Some(LevelFilter::WARN),
                Some(LevelFilter::INFO),
                Some(LevelFilter::DEBUG),
                Some(LevelFilter::TRACE),
                Some(LevelFilter::TRACE),
            ]
        );
    }
}
