pub mod init;
pub mod search;
pub mod show;

use anyhow::{Context, Result};
use std::future::Future;

/// Drive a single catalog request to completion on a fresh tokio runtime
pub fn block_on<F: Future>(future: F) -> Result<F::Output> {
    let rt = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;
    Ok(rt.block_on(future))
}
