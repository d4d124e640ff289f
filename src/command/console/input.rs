use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::{command::console::ConsoleCommandManager, error::AppError};

/// Reads console commands from stdin until it closes.
///
/// Closing stdin (e.g. when running under a service manager) only ends the console, the
/// bot keeps running.
pub async fn run_console(manager: Arc<ConsoleCommandManager>) {
    let reader = BufReader::new(tokio::io::stdin());
    if let Err(e) = read_commands(reader, &manager).await {
        tracing::error!("Failed to read console input: {}", e);
    }
    tracing::debug!("Console input closed");
}

/// Dispatches every line of `reader` to `manager`.
///
/// # Returns
/// - `Ok(())` - The reader reached end of input
/// - `Err(AppError::IoErr)` - Reading a line failed
pub async fn read_commands<R>(reader: R, manager: &ConsoleCommandManager) -> Result<(), AppError>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        manager.dispatch_line(&line).await;
    }
    Ok(())
}
