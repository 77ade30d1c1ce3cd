use anyhow::Result;
use colored::Colorize;
use inquire::{Confirm, Password, PasswordDisplayMode, Text};

use crate::ai::gemini::DEFAULT_MODEL;
use crate::cli::AiCommands;
use crate::config::{API_KEY_ENV_VARS, AiConfig, Config, KeySource, mask_key};

pub fn run(command: AiCommands) -> Result<()> {
    match command {
        AiCommands::Init => init(),
        AiCommands::Status => status(),
        AiCommands::Remove => remove(),
    }
}

fn init() -> Result<()> {
    let mut config = Config::load_or_default();

    let env_key = config
        .resolve_api_key()
        .filter(|(_, source)| matches!(source, KeySource::Env(_)));
    let api_key = match env_key {
        Some((_, source)) => {
            println!("Using the API key from {}.", source.to_string().cyan());
            let store = Confirm::new("Also store it in the config file?")
                .with_default(false)
                .prompt()?;
            store
                .then(|| config.resolve_api_key().map(|(key, _)| key))
                .flatten()
        }
        None => {
            let key = Password::new("Gemini API key:")
                .without_confirmation()
                .with_display_mode(PasswordDisplayMode::Masked)
                .with_help_message("Create one at https://aistudio.google.com/apikey")
                .prompt()?;
            let key = key.trim().to_string();
            if key.is_empty() {
                anyhow::bail!("No API key entered.");
            }
            Some(key)
        }
    };

    let current_model = config.model().to_string();
    let model = Text::new("Model:")
        .with_default(&current_model)
        .prompt()?;
    let model = model.trim();

    let ai = config.ai.get_or_insert_with(AiConfig::default);
    if api_key.is_some() {
        ai.api_key = api_key;
    }
    ai.model = (!model.is_empty() && model != DEFAULT_MODEL).then(|| model.to_string());

    let path = config.save()?;
    println!(
        "{} AI configured with model {}",
        "Done.".green().bold(),
        config.model().cyan()
    );
    println!("  {}", format!("saved to {}", path.display()).dimmed());
    Ok(())
}

fn status() -> Result<()> {
    let config = Config::load_or_default();
    println!("{} {}", "Model:".bold(), config.model());
    match config.resolve_api_key() {
        Some((key, source)) => {
            println!("{} {} ({source})", "API key:".bold(), mask_key(&key));
        }
        None => {
            println!("{} {}", "API key:".bold(), "not set".yellow());
            println!(
                "  Run `orbitslide ai init` or set {}.",
                API_KEY_ENV_VARS.join(" / ")
            );
        }
    }
    Ok(())
}

fn remove() -> Result<()> {
    let mut config = Config::load_or_default();
    if config.ai.take().is_none() {
        println!("{}", "No AI configuration to remove.".yellow());
        return Ok(());
    }
    let path = config.save()?;
    println!("{} AI configuration removed.", "Done.".green().bold());
    println!("  {}", format!("saved to {}", path.display()).dimmed());
    Ok(())
}
