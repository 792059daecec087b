//! Terminal front end for the to-do screen.
//!
//! Reads one command per line from stdin, sends the matching action to the
//! store and redraws the screen. Type `help` for the command list.

use anyhow::Context;
use std::io::Write;
use todoer::shell::{Command, HELP, redraw_on_expiry};
use todoer::{ScreenView, TodoEnvironment, TodoReducer, TodoState, TodoerConfig, seed_todos};
use todoer_runtime::Store;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn redraw(screen: &ScreenView) {
    let mut out = std::io::stdout().lock();
    let _ = writeln!(out, "\n{screen}");
    let _ = write!(out, "> ");
    let _ = out.flush();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let config = TodoerConfig::from_env().context("loading configuration")?;

    // Logs go to stderr so they do not interleave with the screen
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    todoer_runtime::metrics::register_metrics();

    let env = TodoEnvironment::production(config.toast_duration());
    let state = TodoState::new(seed_todos(config.seed_count, env.ids.as_ref()));
    let store = Store::with_config(state, TodoReducer::new(), env, config.store_config());
    tracing::info!(seed_count = config.seed_count, "Todoer started");

    // Redraw when a toast expires on its own
    let watcher = {
        let store = store.clone();
        tokio::spawn(redraw_on_expiry(store.subscribe_actions(), move || {
            let store = store.clone();
            async move { redraw(&store.state(ScreenView::from_state).await) }
        }))
    };

    println!("{HELP}");
    redraw(&store.state(ScreenView::from_state).await);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("reading stdin")? {
        match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => println!("{HELP}"),
            Ok(Command::Json) => {
                let json = store
                    .state(serde_json::to_string_pretty)
                    .await
                    .context("serializing state")?;
                println!("{json}");
            },
            Ok(command) => match store.state(|state| command.to_action(state)).await {
                Ok(Some(action)) => store.send(action).await?,
                Ok(None) => {},
                Err(error) => eprintln!("{error}"),
            },
            Err(error) => eprintln!("{error}"),
        }
        redraw(&store.state(ScreenView::from_state).await);
    }

    watcher.abort();
    if let Err(error) = store.shutdown(store.config().default_shutdown_timeout).await {
        tracing::warn!(%error, "Exiting with timers still pending");
    }
    Ok(())
}
