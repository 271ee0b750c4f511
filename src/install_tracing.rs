use miette::IntoDiagnostic;
use tracing_human_layer::HumanLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;

/// Log human-readable messages to stderr, filtered by the given directives.
pub fn install_tracing(filter_directives: &str) -> miette::Result<()> {
    let env_filter = EnvFilter::try_new(filter_directives).into_diagnostic()?;

    let human_layer = HumanLayer::default()
        .with_output_writer(std::io::stderr())
        .with_filter(env_filter);

    tracing_subscriber::registry().with(human_layer).init();

    Ok(())
}
