//! Ctrl-C during an interactive session belongs to the child.
//!
//! The terminal delivers SIGINT to the whole foreground process group, so
//! without a handler the parent dies alongside the monitor with status 130.
use std::sync::{Mutex, PoisonError};

use tracing::debug;

use crate::error::Result;

static INSTALLED: Mutex<bool> = Mutex::new(false);

/// Keep this process alive on Ctrl-C from now on; the child still receives it.
///
/// Idempotent. Interactive sessions are the last step of every verb, so the
/// handler is never removed.
pub fn leave_to_child() -> Result<()> {
    let mut installed = INSTALLED.lock().unwrap_or_else(PoisonError::into_inner);
    if !*installed {
        ctrlc::set_handler(|| debug!("interrupt left to the child session"))?;
        *installed = true;
    }
    Ok(())
}
