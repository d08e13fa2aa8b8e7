//! Console front end for the todo list.
//!
//! Reads one command per line from stdin and prints the list after every
//! change. See `help` for the command set.

use anyhow::Context;
use todo_store_runtime::Store;
use todos::console::{Console, Reply};
use todos::{TodoConfig, TodoEnvironment, TodoReducer, TodoState};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with the rendered list
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todos=info,todo_store_runtime=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = TodoConfig::from_env().context("loading configuration")?;
    let seed = config.load_seed().context("loading seed todos")?;
    tracing::info!(
        todos = seed.len(),
        max_name_len = config.max_name_len,
        "Starting todo console"
    );

    let store = Store::new(
        TodoState::with_todos(seed),
        TodoReducer::new(),
        TodoEnvironment::from_config(&config),
    );
    let mut console = Console::new(store);

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    stdout
        .write_all(format!("{}\n\nType `help` for commands.\n", console.render()).as_bytes())
        .await?;

    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match console.handle_line(&line) {
            Reply::Output(text) if text.is_empty() => {},
            Reply::Output(text) => {
                stdout.write_all(format!("{text}\n").as_bytes()).await?;
            },
            Reply::Quit => break,
        }
    }

    let (done, total) = console
        .store()
        .state(|s| (s.completed_count(), s.count()));
    tracing::info!(done, total, "Exiting");
    Ok(())
}
