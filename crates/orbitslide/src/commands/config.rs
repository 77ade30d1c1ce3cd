use anyhow::Result;
use colored::Colorize;

use crate::cli::ConfigCommands;
use crate::config::{Config, mask_key};

pub fn run(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => show(),
        ConfigCommands::Set { key, value } => {
            let mut config = Config::load_or_default();
            config.set(&key, &value)?;
            let path = config.save()?;
            println!("{} {key} = {value}", "Set".green().bold());
            println!("  {}", format!("saved to {}", path.display()).dimmed());
            Ok(())
        }
    }
}

fn show() -> Result<()> {
    let path = Config::path()?;
    let config = Config::load_or_default();
    let settings = config.settings();

    println!("{} {}", "Config file:".bold(), path.display());
    if !path.exists() {
        println!("  {}", "(not created yet, showing defaults)".dimmed());
    }
    println!();
    println!("{}", "defaults:".bold());
    println!("  theme:            {}", settings.theme);
    println!(
        "  autoplay_seconds: {}",
        settings.slide_duration.as_secs()
    );
    println!("  animation:        {}", settings.animation);
    let speed = if settings.animation_speed.is_empty() {
        "(normal)"
    } else {
        settings.animation_speed.as_str()
    };
    println!("  animation_speed:  {speed}");
    println!();
    println!("{}", "ai:".bold());
    println!("  model:            {}", config.model());
    match config.resolve_api_key() {
        Some((key, source)) => println!("  api_key:          {} ({source})", mask_key(&key)),
        None => println!("  api_key:          {}", "not set".yellow()),
    }

    if !config.themes.is_empty() {
        println!();
        println!("{}", "themes:".bold());
        for def in &config.themes {
            println!("  {} ({})", def.id, def.name);
        }
    }
    Ok(())
}
