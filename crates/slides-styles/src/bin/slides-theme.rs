//! Inspect how a theme identifier resolves, and preview the slide chrome.
//!
//! ```text
//! slides-theme resolve tokyo-night
//! slides-theme check ./themes/custom.json
//! SLIDES_LOG=debug slides-theme resolve https://example.com/theme.json
//! slides-theme chrome --author "Ada" --date 2024-05-01 --page "Slide 3 / 12"
//! slides-theme --background desktop resolve
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use console::Term;
use slides_styles::{
    desktop_color_mode, join_horizontal, select_theme, set_theme_detector, style::ChromeStyles,
    ColorMode,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "slides-theme", version, about = "Resolve and preview slide themes")]
struct Cli {
    /// Log filter, e.g. `debug` or `slides_styles=debug`
    #[arg(long, env = "SLIDES_LOG", default_value = "warn", global = true)]
    log: String,

    /// Where the default theme's light/dark decision comes from
    #[arg(
        long,
        env = "SLIDES_BACKGROUND",
        value_enum,
        default_value_t = Background::Auto,
        global = true
    )]
    background: Background,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Background {
    /// Ask the terminal, then `COLORFGBG`; unknown counts as dark
    Auto,
    Dark,
    Light,
    /// Follow the OS desktop preference
    Desktop,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the renderer options a theme identifier resolves to, as JSON
    Resolve {
        /// Preset name, URL, or path to a JSON style
        #[arg(env = "SLIDES_THEME", default_value = "")]
        theme: String,
    },
    /// Resolve a theme and load its JSON style document
    Check {
        #[arg(env = "SLIDES_THEME", default_value = "")]
        theme: String,
    },
    /// Render the status bar chrome
    Chrome {
        /// Total width in columns (defaults to the terminal width)
        #[arg(long)]
        width: Option<usize>,
        #[arg(long, default_value = "")]
        author: String,
        #[arg(long, default_value = "")]
        date: String,
        #[arg(long, default_value = "Slide 1 / 1")]
        page: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log)?;

    match cli.background {
        Background::Auto => {}
        Background::Dark => set_theme_detector(|| ColorMode::Dark),
        Background::Light => set_theme_detector(|| ColorMode::Light),
        Background::Desktop => set_theme_detector(desktop_color_mode),
    }

    match cli.command {
        Command::Resolve { theme } => {
            let options = select_theme(&theme);
            let json = serde_json::to_string_pretty(&options)?;
            println!("{}", json);
        }
        Command::Check { theme } => {
            let options = select_theme(&theme);
            match options
                .load_style_json()
                .with_context(|| format!("theme '{}' did not load", theme))?
            {
                Some(doc) => {
                    let sections = doc.as_object().map_or(0, |o| o.len());
                    println!("ok: JSON style with {} sections", sections);
                }
                None => println!("ok: built-in style {:?}", options.style()),
            }
        }
        Command::Chrome {
            width,
            author,
            date,
            page,
        } => {
            let chrome = ChromeStyles::global();
            let width = width.unwrap_or_else(|| Term::stdout().size().1 as usize);
            let left = format!("{}{}", chrome.author.render(&author), chrome.date.render(&date));
            let right = chrome.page.render(&page);
            // Status padding adds a column on each side.
            let bar = join_horizontal(&left, &right, width.saturating_sub(2));
            println!("{}", chrome.status.render(&bar));
        }
    }

    Ok(())
}

fn init_logging(filter: &str) -> Result<()> {
    let filter =
        EnvFilter::try_new(filter).with_context(|| format!("invalid log filter '{}'", filter))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
