use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "orbitslide")]
#[command(author, version, about)]
#[command(long_about = "An AI slide-deck generator and editor.\n\n\
    Describe a topic, get a structured deck from Gemini (or a built-in template),\n\
    then edit themes, text and entrance animations before presenting or exporting.\n\n\
    Examples:\n  \
    orbitslide                         Open the editor home screen\n  \
    orbitslide deck.json               Edit a saved deck\n  \
    orbitslide present deck.json       Present fullscreen\n  \
    orbitslide generate \"Mars\" -o mars.json\n  \
    orbitslide export deck.json --pdf  Export the first slide as PDF")]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Deck JSON file to open in the editor
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Present a deck
    Present {
        /// Deck JSON file
        file: PathBuf,

        /// Start on a specific slide (1-indexed)
        #[arg(long)]
        slide: Option<usize>,

        /// Present in a window instead of fullscreen
        #[arg(long)]
        windowed: bool,
    },

    /// Generate a deck for a topic and save it as JSON
    Generate {
        /// Presentation topic
        topic: String,

        /// Output file
        #[arg(short, long, default_value = "presentation.json")]
        output: PathBuf,

        /// Use the built-in keyword template instead of the AI
        #[arg(long)]
        template: bool,
    },

    /// Export slides as PNG images, or one slide as PDF
    Export {
        /// Deck JSON file
        file: PathBuf,

        /// Output directory
        #[arg(short, long, default_value = "export")]
        output_dir: PathBuf,

        /// Export width in pixels
        #[arg(long, default_value = "1280")]
        width: u32,

        /// Export height in pixels
        #[arg(long, default_value = "720")]
        height: u32,

        /// Write a single-slide PDF instead of PNG files
        #[arg(long)]
        pdf: bool,

        /// Slide to export as PDF (1-indexed)
        #[arg(long, default_value = "1", requires = "pdf")]
        slide: usize,
    },

    /// List available themes
    Themes,

    /// List available entrance animations and speeds
    Animations,

    /// Configure the Gemini API key and model
    Ai {
        #[command(subcommand)]
        command: AiCommands,
    },

    /// View and modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand)]
pub enum AiCommands {
    /// Store a Gemini API key and model
    Init,

    /// Show current AI configuration
    Status,

    /// Remove AI configuration
    Remove,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g. defaults.theme, defaults.autoplay_seconds, ai.model)
        key: String,

        /// Value to set
        value: String,
    },
}

#[derive(Clone, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Commands::Present {
                file,
                slide,
                windowed,
            }) => {
                if !file.exists() {
                    anyhow::bail!("File not found: {}", file.display());
                }
                crate::app::run(crate::app::Launch::Present {
                    file,
                    slide,
                    windowed,
                })
            }
            Some(Commands::Generate {
                topic,
                output,
                template,
            }) => crate::commands::generate::run(&topic, &output, template, self.quiet),
            Some(Commands::Export {
                file,
                output_dir,
                width,
                height,
                pdf,
                slide,
            }) => {
                if !file.exists() {
                    anyhow::bail!("File not found: {}", file.display());
                }
                let target = if pdf {
                    crate::commands::export::Target::Pdf { slide }
                } else {
                    crate::commands::export::Target::Png
                };
                crate::commands::export::run(file, output_dir, width, height, target)
            }
            Some(Commands::Themes) => crate::commands::catalog::themes(),
            Some(Commands::Animations) => {
                crate::commands::catalog::animations();
                Ok(())
            }
            Some(Commands::Ai { command }) => crate::commands::ai::run(command),
            Some(Commands::Config { command }) => crate::commands::config::run(command),
            Some(Commands::Completion { shell }) => {
                crate::commands::completion::run(shell);
                Ok(())
            }
            Some(Commands::Version) => {
                crate::banner::print_banner_with_version();
                Ok(())
            }
            None => {
                if let Some(file) = &self.file {
                    if !file.exists() {
                        anyhow::bail!("File not found: {}", file.display());
                    }
                }
                crate::app::run(crate::app::Launch::Editor { file: self.file })
            }
        }
    }
}
