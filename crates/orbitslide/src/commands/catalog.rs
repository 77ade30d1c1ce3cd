use anyhow::Result;
use colored::Colorize;

use crate::catalog::animations;
use crate::config::Config;

pub fn themes() -> Result<()> {
    let config = Config::load_or_default();
    let default_theme = config.settings().theme;
    let catalog = config.theme_catalog();

    for category in catalog.categories() {
        println!("{}", category.name.bold());
        for theme in &category.themes {
            let marker = if theme.id == default_theme { "*" } else { " " };
            println!(
                " {} {:<14} {}  {}",
                marker.green(),
                theme.id.cyan(),
                theme.name,
                theme.font_family.dimmed()
            );
        }
        println!();
    }
    println!("{}", "* default theme".dimmed());
    Ok(())
}

pub fn animations() {
    for category in animations::CATEGORIES {
        println!("{}", category.name.bold());
        for animation in category.items {
            println!("  {:<28} {}", animation.id.cyan(), animation.label);
        }
        println!();
    }

    println!("{}", "Speeds".bold());
    for speed in animations::SPEEDS {
        let id = if speed.id.is_empty() { "(none)" } else { speed.id };
        println!("  {:<28} {}", id.cyan(), speed.label);
    }
}
