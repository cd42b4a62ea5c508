use anyhow::{Context, Result};
use std::path::Path;

use crate::config::{self, Config};

/// Print the configuration file (if any) and the environment it would fall back to
pub fn handle_show_config(config: Option<&Config>) {
    println!("Current configuration:");

    if let Some(cfg) = config {
        println!("\n  Configuration file loaded:");
        match &cfg.client.hostname {
            Some(hostname) => println!("    Hostname: {}", hostname),
            None => println!("    Hostname: not set (falls back to environment)"),
        }
        println!("    Transport: {}", cfg.client.transport);
        println!("    Listen address: {}", cfg.server.address);
        println!("    Listen port: {}", cfg.server.port);
    } else {
        println!("\n  No configuration file loaded");
        println!("  Create one with: debtsimpl --init-config .debtsimplrc.toml");
    }

    println!("\n  Environment variables:");
    if let Some(hostname) = config::env_hostname() {
        println!("    {}: {}", config::ENV_DEBTSIMPL_HOSTNAME, hostname);
    } else {
        println!(
            "    {}: not set (default: {})",
            config::ENV_DEBTSIMPL_HOSTNAME,
            config::default_hostname()
        );
    }

    println!(
        "\n  Effective hostname: {}",
        Config::resolve_hostname(config, None)
    );

    print_precedence();
}

/// Write the default configuration to `path`
pub fn handle_init_config(path: &Path) -> Result<()> {
    let toml_content = Config::default().to_toml();
    std::fs::write(path, toml_content)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Configuration file created: {}", path.display());
    println!("\nYou can now edit the file to customize your settings.");
    print_precedence();
    Ok(())
}

fn print_precedence() {
    println!("\nConfiguration precedence:");
    println!("  1. Command-line arguments (highest)");
    println!("  2. Configuration file");
    println!("  3. Environment variables");
    println!("  4. Built-in defaults (lowest)");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_config_writes_loadable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("debtsimpl.toml");

        handle_init_config(&path).unwrap();

        let loaded = Config::load_from_file(&path).expect("written config should parse");
        assert_eq!(loaded.server.port, crate::grpc::RPC_PORT);
    }
}
