use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use crate::ai::DeckGenerator;
use crate::config::Config;
use crate::export;
use crate::model::Slide;
use crate::templates;

/// Produce a deck for `topic` and write it to `output`.
pub fn run(topic: &str, output: &Path, template: bool, quiet: bool) -> Result<()> {
    let topic = topic.trim();
    if topic.is_empty() {
        anyhow::bail!("Topic must not be empty.");
    }

    let slides = if template {
        let (category, slides) = templates::template_for(topic);
        if !quiet {
            println!(
                "Using the {} template for {}",
                category.name().cyan(),
                topic.bold()
            );
        }
        slides
    } else {
        let client = Config::load_or_default().gemini_client();
        if !quiet {
            println!(
                "Generating a presentation about {} with {}...",
                topic.bold(),
                client.model().cyan()
            );
        }
        generate_with(&client, topic)?
    };

    export::write_json(output, &slides)?;
    if !quiet {
        print_outline(&slides);
        println!(
            "{} {} slides saved to {}",
            "Done.".green().bold(),
            slides.len(),
            output.display()
        );
    }
    Ok(())
}

fn generate_with(generator: &dyn DeckGenerator, topic: &str) -> Result<Vec<Slide>> {
    Ok(generator.generate(topic)?)
}

fn print_outline(slides: &[Slide]) {
    for (i, slide) in slides.iter().enumerate() {
        println!(
            "  {:>2}. {:<14} {}",
            i + 1,
            slide.layout.tag().dimmed(),
            crate::model::clean_text(&slide.title)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{EditError, GenerationError};

    struct Failing;

    impl DeckGenerator for Failing {
        fn generate(&self, _topic: &str) -> Result<Vec<Slide>, GenerationError> {
            Err(GenerationError::Parse("trailing characters".into()))
        }

        fn revise(&self, _deck: &[Slide], _instruction: &str) -> Result<Vec<Slide>, EditError> {
            Err(EditError::EmptyResponse)
        }
    }

    #[test]
    fn test_template_deck_is_written() {
        let path = std::env::temp_dir().join(format!("orbitslide-gen-{}.json", std::process::id()));
        run("Yoga basics", &path, true, true).unwrap();
        let slides = export::load_deck(&path).unwrap();
        assert_eq!(slides.len(), 6);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_generation_error_surfaces() {
        let err = generate_with(&Failing, "x").unwrap_err();
        assert!(err.to_string().contains("trailing characters"));
        assert!(run("  ", Path::new("unused.json"), true, true).is_err());
    }
}
