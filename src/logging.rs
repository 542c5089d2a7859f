//! Tracing subscriber setup shared by the server and the admin CLI.

use anyhow::Result;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

use crate::config::Config;

/// Installs the global subscriber: `RUST_LOG` filter, text or JSON lines
/// written to `writer`.
///
/// # Errors
///
/// Returns an error if `config.log_level` is not a valid filter directive.
pub fn init_tracing<W>(config: &Config, writer: W) -> Result<()>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_new(&config.log_level)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }

    Ok(())
}
