use anyhow::{Context, Result};
use chatcmd::console::Console;
use chatcmd::core::config::Config;
use chatcmd::core::dispatcher::Dispatcher;
use chatcmd::core::startup::build_state;
use chatcmd::core::tracing_init::init_tracing;
use chatcmd::transport::log_line::parse_log_line;
use chatcmd::utils::time::current_timestamp;
use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Stdout};
use tokio::signal;
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info, warn};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let config_path = if args.len() > 1 {
        PathBuf::from(&args[1])
    } else {
        PathBuf::from("config.toml")
    };

    // Load and validate configuration
    let config = Config::from_file(&config_path)
        .context(format!(
            "Failed to load configuration from '{}'. If this is your first run, \
            copy config.example.toml to config.toml and adjust the values.",
            config_path.display()
        ))?;

    init_tracing(&config.logging);

    // Commands are handled one at a time, a single thread is enough
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to build Tokio runtime")?;

    runtime.block_on(async_main(config, config_path))
}

async fn async_main(config: Config, config_path: PathBuf) -> Result<()> {
    info!(
        config_path = %config_path.display(),
        command_prefix = %config.server.command_prefix,
        properties_file = %config.server.properties_file.display(),
        log_level = %config.logging.level,
        log_format = %config.logging.format,
        "Chat command processor starting"
    );

    let state = build_state(config, current_timestamp())?;
    let dispatcher = Dispatcher::new(Arc::new(state));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    let mut ticker = tokio::time::interval(Duration::from_secs(1));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    info!("Reading server log from stdin");

    loop {
        tokio::select! {
            line = lines.next_line() => {
                match line {
                    Ok(Some(line)) => {
                        let Some(event) = parse_log_line(&line) else {
                            continue;
                        };
                        debug!(event = ?event, "Server event");
                        let out = dispatcher.handle_event(&event, current_timestamp());
                        write_console(&mut stdout, &out).await?;
                    }
                    Ok(None) => {
                        info!("Server log closed");
                        break;
                    }
                    Err(e) => {
                        error!(error = %e, "Failed to read server log");
                        break;
                    }
                }
            }
            _ = ticker.tick() => {
                let out = dispatcher.fire_timers(current_timestamp());
                write_console(&mut stdout, &out).await?;
            }
            _ = &mut shutdown => break,
        }
    }

    let snapshot = dispatcher.state().metrics.get_snapshot(current_timestamp());
    info!(
        commands_handled = snapshot.commands_handled,
        commands_failed = snapshot.commands_failed,
        failure_rate = snapshot.failure_rate,
        console_lines = snapshot.console_lines,
        timer_grants = snapshot.timer_grants,
        uptime_seconds = snapshot.uptime_seconds,
        online = dispatcher.state().roster.len(),
        active_timers = dispatcher.state().timers.total(),
        players_logged = dispatcher.state().uptime_log.len(),
        "Shutting down gracefully"
    );

    Ok(())
}

/// Write console statements to stdout, one command per line
async fn write_console(stdout: &mut Stdout, out: &Console) -> Result<()> {
    if out.is_empty() {
        return Ok(());
    }

    let mut buf = String::new();
    for line in out.lines() {
        buf.push_str(&line);
        buf.push('\n');
    }

    stdout.write_all(buf.as_bytes()).await.context("Failed to write console output")?;
    stdout.flush().await.context("Failed to flush console output")?;
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }

    info!("Shutdown signal received, starting graceful shutdown");
}
