use tracing::{level_filters::LevelFilter, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initializes the global tracing subscriber, printing events at `level` and
/// above to stdout.
pub fn init_tracing_subscriber(level: Level) {
	tracing_subscriber::registry()
		.with(LevelFilter::from_level(level))
		.with(
			tracing_subscriber::fmt::layer()
				.with_ansi(true)
				.with_target(cfg!(debug_assertions)),
		)
		.init();
}
