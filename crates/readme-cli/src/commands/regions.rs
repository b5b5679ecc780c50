//! The regions command: list every region in the README.

use crate::error::Result;
use crate::io;
use colored::Colorize;
use readme_blocks::parse_regions;
use std::path::Path;

/// List every well-formed region found in the README with its line span.
pub fn run_regions(readme_path: &Path) -> Result<()> {
    let document = io::read_text(readme_path)?;
    let regions = parse_regions(&document);

    if regions.is_empty() {
        println!("No regions found in {}", readme_path.display());
        return Ok(());
    }

    for region in regions {
        println!(
            "{} lines {}-{}",
            region.name.cyan().bold(),
            region.start_line,
            region.end_line
        );
    }
    Ok(())
}
