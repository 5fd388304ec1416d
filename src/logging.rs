use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    Debug,
    Trace,
}

impl Verbosity {
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    fn to_level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    fn shows_location(self) -> bool {
        self >= Self::Debug
    }

    fn shows_time(self) -> bool {
        self >= Self::Verbose
    }

    /// Filter covering both the library and the `dig` binary targets.
    fn to_filter(self) -> String {
        let level = self.to_level();
        format!("nested_dig={level},dig={level}")
    }
}

/// Installs the global subscriber on stderr, leaving stdout to lookup results.
///
/// `RUST_LOG` wins over the flag-derived filter. Quiet still reports errors.
pub fn init(verbosity: Verbosity) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.to_filter()));

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(verbosity.shows_location())
        .with_line_number(verbosity.shows_location())
        .compact();

    if verbosity.shows_time() {
        subscriber.init();
    } else {
        subscriber.without_time().init();
    }
}
