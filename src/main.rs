//! Entry point for the **tilerc** checker.
//!
//! Loads a configuration, resolves it, and reports on it.  The host runtime
//! links the library directly; this binary is for checking a file before
//! reloading, inspecting the resolved tables, and running the autostart step
//! by hand.
//!
//! ```text
//! tilerc [--config <path>] [check|dump|keys|autostart]
//! ```

use log::{error, info, warn};
use std::path::PathBuf;
use tilerc::autostart::{run_autostart, ShellSpawner};
use tilerc::config::{Config, ConfigError, Document};

/// `$XDG_CONFIG_HOME/tilerc/config.json`, with `~/.config` standing in for
/// an unset or empty `XDG_CONFIG_HOME`.
fn default_config_path() -> PathBuf {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
        .unwrap_or_else(|| PathBuf::from("/etc/xdg"));
    base.join("tilerc").join("config.json")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Check,
    Dump,
    Keys,
    Autostart,
}

struct Args {
    config: Option<PathBuf>,
    mode: Mode,
}

fn parse_args() -> Result<Args, String> {
    let mut config = None;
    let mut mode = Mode::Check;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let path = args.next().ok_or("--config needs a path")?;
                config = Some(PathBuf::from(path));
            }
            "check" => mode = Mode::Check,
            "dump" => mode = Mode::Dump,
            "keys" => mode = Mode::Keys,
            "autostart" => mode = Mode::Autostart,
            other => return Err(format!("unknown argument: {}", other)),
        }
    }
    Ok(Args { config, mode })
}

/// Load the config at `explicit`, or from `$XDG_CONFIG_HOME/tilerc/config.json`.
/// Only a missing default file falls back to the compiled-in defaults.
fn load_config(explicit: Option<PathBuf>) -> Result<Config, ConfigError> {
    let cfg = match explicit {
        Some(path) => {
            let cfg = Config::load(&path)?;
            info!("loaded config from {}", path.display());
            cfg
        }
        None => Config::load_or_default(&default_config_path())?,
    };
    Ok(cfg)
}

fn main() {
    env_logger::init();

    let args = match parse_args() {
        Ok(a) => a,
        Err(e) => {
            error!("{}", e);
            eprintln!("usage: tilerc [--config <path>] [check|dump|keys|autostart]");
            std::process::exit(2);
        }
    };

    let document = match load_config(args.config).and_then(|cfg| cfg.resolve()) {
        Ok(d) => d,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    match args.mode {
        Mode::Check => print_summary(&document),
        Mode::Dump => match serde_json::to_string_pretty(&document) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("failed to serialize document: {}", e);
                std::process::exit(1);
            }
        },
        Mode::Keys => {
            for key in &document.keys {
                println!("{}", key);
            }
        }
        Mode::Autostart => {
            let report = run_autostart(&ShellSpawner::default(), &document.autostart);
            if report.failures() > 0 {
                warn!("{} of {} autostart commands failed", report.failures(), report.entries.len());
            }
        }
    }
}

fn print_summary(doc: &Document) {
    println!("ok");
    println!("  keys:        {}", doc.keys.len());
    println!("  groups:      {}", doc.groups.len());
    println!("  colors:      {}", doc.colors.len());
    let cycle: Vec<String> = doc.layouts.iter().map(|l| l.kind.to_string()).collect();
    println!("  layouts:     {} ({})", doc.layouts.len(), cycle.join(" -> "));
    println!("  screens:     {}", doc.screens.len());
    println!("  mouse:       {}", doc.mouse.len());
    println!("  float rules: {}", doc.float_rules.len());
    println!("  autostart:   {}", doc.autostart.len());
}
