use serde::Deserialize;
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

#[derive(Clone, Deserialize)]
pub struct Log {
    pub level: String,
}

/// setup log from an optional environment filter and the config file
///
/// if the environment filter is present, then the config is not used
pub fn setup(
    env_filter: Result<EnvFilter, tracing_subscriber::filter::FromEnvError>,
    config: &Option<Log>,
) {
    let env_filter = env_filter.unwrap_or_else(|_| {
        let level = config
            .as_ref()
            .map(|log| log.level.clone())
            .unwrap_or_else(|| "info".to_string());
        EnvFilter::new(level)
    });

    let sbuilder = Subscriber::builder()
        .with_timer(tracing_subscriber::fmt::time::ChronoUtc::rfc_3339())
        .with_level(true)
        .with_env_filter(env_filter);
    let ss = sbuilder.with_ansi(true).finish();
    tracing::subscriber::set_global_default(ss).expect("setting tracing default subscriber failed");
}
