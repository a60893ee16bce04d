//! Tui command - Run the interactive wizard

use crate::backend::SimulatedBackend;
use crate::config::load_config;
use crate::errors::Result;
use crate::fs::resolve_cwd;
use crate::tui::{TuiOptions, TuiRunner};
use crate::wizard::{Wizard, WizardRuntime};
use std::path::Path;
use std::sync::Arc;

/// Run the wizard in the terminal until the user quits
pub async fn run(cwd: Option<&Path>) -> Result<()> {
    let root = resolve_cwd(cwd);
    let config = load_config(&root)?;
    let backend = Arc::new(SimulatedBackend::from_config(&config));

    let runtime = WizardRuntime::start(Wizard::new(config), backend);
    let mut runner = TuiRunner::new(runtime, TuiOptions::default());
    runner.run().await
}
