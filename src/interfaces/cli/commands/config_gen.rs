//! Config generate command

use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use crate::config::StaticConfig;
use crate::interfaces::cli::CliError;

const DEFAULT_OUTPUT_PATH: &str = "config.example.toml";

/// Generate a sample configuration file
pub fn config_generate(output_path: Option<String>, force: bool) -> Result<(), CliError> {
    let path = output_path.unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string());

    // 检查文件是否存在，非 --force 模式下交互确认
    if !force && Path::new(&path).exists() {
        print!(
            "{} {} {}",
            "File already exists:".yellow(),
            path.blue(),
            "Overwrite? [y/N] ".yellow()
        );
        io::stdout()
            .flush()
            .map_err(|e| CliError::CommandError(e.to_string()))?;

        let mut input = String::new();
        io::stdin()
            .lock()
            .read_line(&mut input)
            .map_err(|e| CliError::CommandError(e.to_string()))?;
        if !input.trim().eq_ignore_ascii_case("y") {
            println!("{}", "Aborted.".red());
            return Ok(());
        }
    }

    println!(
        "{} {}",
        "Generating configuration file...".yellow(),
        path.blue()
    );
    write_sample_config(&path, true)?;
    println!(
        "  {} {}",
        "Configuration file generated successfully".green(),
        path.blue()
    );
    println!(
        "  {}",
        "Environment variables (BM__API__BASE_URL, API_URL, ...) override file values".dimmed()
    );
    Ok(())
}

/// Write the default configuration to `path`.
///
/// Refuses to replace an existing file unless `overwrite` is set.
pub fn write_sample_config(path: &str, overwrite: bool) -> Result<(), CliError> {
    if !overwrite && Path::new(path).exists() {
        return Err(CliError::ConfigError(format!("{} already exists", path)));
    }
    StaticConfig::default().save_to_file(path)?;
    Ok(())
}
