use lambda_runtime::Error;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

use crate::config::LogFormat;

/// Installs the global subscriber writing to stdout. Call once per cold start.
pub fn init_tracing(format: LogFormat) -> Result<(), Error> {
    init_tracing_with_writer(format, std::io::stdout)
}

/// Same as [`init_tracing`] with a caller-supplied sink.
///
/// Fails if a global subscriber is already installed.
pub fn init_tracing_with_writer<W>(format: LogFormat, writer: W) -> Result<(), Error>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let builder = tracing_subscriber::fmt()
        .with_env_filter(default_filter())
        .with_writer(writer)
        // CloudWatch already records ingestion time.
        .without_time()
        .with_target(false);

    match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    }
    .map_err(|error| Error::from(format!("failed to install tracing subscriber: {error}")))
}

fn default_filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy()
}
