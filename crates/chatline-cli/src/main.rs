//! chatline: terminal front end for a remote chat service.
//!
//! Probes the service once, then forwards each line typed on stdin as a
//! chat message and prints the conversation as it grows.

mod commands;
mod render;
mod repl;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use chatline_client::{HttpBackend, HttpConfig, ReplyPacing, Session};
use chatline_common::{ChatlineError, SessionStatus};
use chatline_config::validation::validate_base_url;
use chatline_config::{load_config, ChatlineConfig, LogLevel};

#[derive(Parser, Debug)]
#[command(name = "chatline", version, about = "Terminal client for a remote chat service")]
struct Args {
    /// Config file path override.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Chat service base URL (overrides `api.base_url`).
    #[arg(long)]
    base_url: Option<String>,

    /// Log filter directive override (e.g. `chatline=debug`).
    #[arg(long)]
    log_level: Option<String>,

    /// Show replies as soon as they arrive.
    #[arg(long)]
    no_pacing: bool,
}

fn init_tracing(override_directive: Option<&str>, level: LogLevel) {
    let filter = match override_directive {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(level.directive())),
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn build_backend(args: &Args, config: &ChatlineConfig) -> Result<HttpBackend, ChatlineError> {
    let base_url = match args.base_url.as_deref() {
        Some(url) => {
            validate_base_url("--base-url", url)?;
            url
        }
        None => config.api.base_url.as_str(),
    };

    let mut http = HttpConfig::new(base_url)
        .with_connect_timeout(Duration::from_secs(config.api.connect_timeout_secs.into()))
        .with_request_timeout(Duration::from_secs(config.api.request_timeout_secs.into()));
    if let Some(prompt) = &config.chat.system_prompt {
        http = http.with_system_prompt(prompt.clone());
    }
    if let Some(temperature) = config.chat.temperature {
        http = http.with_temperature(temperature);
    }
    if let Some(max_tokens) = config.chat.max_tokens {
        http = http.with_max_tokens(max_tokens);
    }

    HttpBackend::new(http).map_err(|e| ChatlineError::Network(e.to_string()))
}

fn pacing(args: &Args, config: &ChatlineConfig) -> ReplyPacing {
    if args.no_pacing || !config.pacing.enabled {
        ReplyPacing::none()
    } else {
        ReplyPacing::between(
            config.pacing.min_delay_ms.into(),
            config.pacing.max_delay_ms.into(),
        )
    }
}

async fn run(args: Args, config: ChatlineConfig) -> Result<(), ChatlineError> {
    let backend = Arc::new(build_backend(&args, &config)?);
    let session = Session::new(backend.clone()).with_pacing(pacing(&args, &config));

    tracing::info!(session = %session.id().short(), base_url = %backend.config().base_url, "starting");

    let renderer = tokio::spawn(render::render_events(session.subscribe()));

    if session.initialize().await == SessionStatus::Connected {
        match backend.info().await {
            Ok(info) => render::print_banner(&info),
            Err(e) => tracing::debug!(error = %e, "no service info"),
        }
    }

    let result = repl::run(&session, &backend).await;

    // Closing the bus lets the renderer flush what is left and stop.
    drop(session);
    let _ = renderer.await;
    result
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let config = match load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("chatline: {e}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(args.log_level.as_deref(), config.logging.level);

    match run(args, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "chatline failed");
            eprintln!("chatline: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatline_common::ConfigError;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["chatline"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn base_url_flag_overrides_config() {
        let config = ChatlineConfig::default();
        let backend = build_backend(&args(&["--base-url", "http://10.1.2.3:9000/"]), &config).unwrap();
        assert_eq!(backend.config().base_url, "http://10.1.2.3:9000");
    }

    #[test]
    fn base_url_flag_must_be_http() {
        let config = ChatlineConfig::default();
        let err = build_backend(&args(&["--base-url", "127.0.0.1:9000"]), &config).unwrap_err();
        assert!(matches!(err, ChatlineError::Config(ConfigError::ValidationError(_))));
        assert!(err.to_string().contains("--base-url"));
    }

    #[test]
    fn backend_picks_up_chat_options() {
        let mut config = ChatlineConfig::default();
        config.chat.temperature = Some(0.4);
        config.api.request_timeout_secs = 30;

        let backend = build_backend(&args(&[]), &config).unwrap();
        assert_eq!(backend.config().base_url, "http://127.0.0.1:8000");
        assert_eq!(backend.config().temperature, Some(0.4));
        assert_eq!(backend.config().request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn pacing_follows_config_and_flag() {
        let mut config = ChatlineConfig::default();
        assert_eq!(pacing(&args(&[]), &config), ReplyPacing::between(1000, 2000));
        assert_eq!(pacing(&args(&["--no-pacing"]), &config), ReplyPacing::none());

        config.pacing.enabled = false;
        assert_eq!(pacing(&args(&[]), &config), ReplyPacing::none());
    }
}
