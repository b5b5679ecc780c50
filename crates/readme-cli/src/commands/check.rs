//! The check command: verify sentinel pairs are present.

use crate::config::Config;
use crate::error::{CliError, Result};
use crate::io;
use colored::Colorize;
use readme_blocks::has_region;
use std::path::Path;

/// Report, per enabled source, whether its sentinel pair exists in the
/// README. Exits non-zero when any is missing, since `sync` would
/// silently skip that region.
pub fn run_check(config: &Config, readme_path: &Path) -> Result<()> {
    let document = io::read_text(readme_path)?;

    let mut missing = 0;
    for marker in config.enabled_markers() {
        if has_region(&document, marker) {
            println!("{} {}", "ok".green().bold(), marker);
        } else {
            println!("{} {} (sentinel pair not found)", "missing".red().bold(), marker);
            missing += 1;
        }
    }

    if missing > 0 {
        return Err(CliError::user(format!(
            "{missing} region(s) missing from {}",
            readme_path.display()
        )));
    }
    Ok(())
}
