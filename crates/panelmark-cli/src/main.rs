//! panelmark - render markdown panels to HTML fragments

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use panelmark_config::{Config, expand_path};
use panelmark_engine::{RenderOptions, Renderer, io, wrap_in_container};

#[derive(Parser, Debug)]
#[command(name = "panelmark")]
#[command(version, about = "Render markdown to an HTML fragment", long_about = None)]
#[command(after_help = "EXAMPLES:
    panelmark notes.md                  Print HTML for notes.md
    panelmark -o panel.html notes.md    Write HTML to panel.html
    cat notes.md | panelmark            Read markdown from stdin")]
struct Cli {
    /// Markdown file to render (stdin when omitted or `-`)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Write HTML to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Config file (defaults to ~/.config/panelmark/config.toml)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Wrap output in <div class="CLASS">; an empty value disables wrapping
    #[arg(long, value_name = "CLASS")]
    container_class: Option<String>,

    /// Do not add target="_blank" to links
    #[arg(long)]
    no_new_tab: bool,
}

impl Cli {
    fn input_path(&self) -> Option<PathBuf> {
        self.input
            .as_deref()
            .filter(|p| *p != Path::new("-"))
            .map(expand_path)
    }

    fn output_path(&self) -> Option<PathBuf> {
        self.output.as_deref().map(expand_path)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let renderer = Renderer::new(render_options(&config, cli));

    let input = cli.input_path();
    let markdown = io::read_source(input.as_deref()).with_context(|| match &input {
        Some(path) => format!("Failed to read markdown from {}", path.display()),
        None => "Failed to read markdown from stdin".to_string(),
    })?;

    let mut html = renderer.render(&markdown);
    if let Some(class) = container_class(&config, cli) {
        html = wrap_in_container(&html, class);
    }

    let output = cli.output_path();
    io::write_html(output.as_deref(), &html).with_context(|| match &output {
        Some(path) => format!("Failed to write HTML to {}", path.display()),
        None => "Failed to write HTML to stdout".to_string(),
    })?;

    log::info!("rendered {} bytes of markdown", markdown.len());
    Ok(())
}

/// Loads the config named on the command line, or the default one.
///
/// An explicitly named file must exist; a missing default file means defaults.
fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => {
            let path = expand_path(path);
            Config::load_from_path(&path)?
                .with_context(|| format!("Config file not found: {}", path.display()))
        }
        None => match Config::load()? {
            Some(config) => Ok(config),
            None => {
                log::debug!(
                    "no config at {}, using defaults",
                    Config::config_path().display()
                );
                Ok(Config::default())
            }
        },
    }
}

fn render_options(config: &Config, cli: &Cli) -> RenderOptions {
    RenderOptions::default()
        .with_table_class(config.table_class().map(str::to_string))
        .with_links_in_new_tab(config.open_links_in_new_tab && !cli.no_new_tab)
}

fn container_class<'a>(config: &'a Config, cli: &'a Cli) -> Option<&'a str> {
    match cli.container_class.as_deref() {
        Some(class) => Some(class.trim()).filter(|c| !c.is_empty()),
        None => config.container_class(),
    }
}
