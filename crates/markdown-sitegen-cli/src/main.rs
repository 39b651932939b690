use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use markdown_sitegen_config::Config;
use markdown_sitegen_engine::{SiteOptions, build_site, extract_title, io, markdown_to_html_node};
use std::path::{Path, PathBuf};
use std::process;

/// markdown-sitegen - build a static site from markdown content.
#[derive(Parser)]
#[command(name = "markdown-sitegen", version, about)]
struct Cli {
    /// Config file to read (defaults to ./sitegen.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log every copied file and rendered page
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Copy static files and render every markdown page.
    Build(BuildArgs),
    /// Render a single markdown file to stdout.
    Render(RenderArgs),
}

#[derive(Args, Default)]
struct BuildArgs {
    /// Directory of markdown content
    #[arg(long)]
    content: Option<PathBuf>,

    /// Directory of static assets copied verbatim
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// HTML template with {{ Title }} and {{ Content }} placeholders
    #[arg(long)]
    template: Option<PathBuf>,

    /// Output directory (replaced on every build)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Prefix for root-relative links, e.g. /my-repo/
    #[arg(long)]
    base_path: Option<String>,
}

#[derive(Args)]
struct RenderArgs {
    /// Markdown file to render
    file: PathBuf,

    /// Print the extracted title instead of the HTML
    #[arg(long)]
    title: bool,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG wins over the default level
    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Build(args) => {
            let config = load_config(cli.config.as_deref())?;
            let options = site_options(config, args);
            let report = build_site(&options).context("Site build failed")?;
            log::info!(
                "Wrote {} pages and {} static files to {}",
                report.pages.len(),
                report.copied.len(),
                options.output_dir.display()
            );
            Ok(())
        }
        Commands::Render(args) => {
            println!("{}", render_file(&args)?);
            Ok(())
        }
    }
}

/// Loads the config file, or the default layout if there is none.
///
/// An explicitly requested config file must exist.
fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let config_path = match explicit {
        Some(path) => path.to_path_buf(),
        None => Config::config_path(),
    };

    match Config::load_from_path(&config_path)? {
        Some(config) => {
            log::info!("Using config file {}", config_path.display());
            let dir = config_path.parent().unwrap_or_else(|| Path::new(""));
            Ok(config.resolve_relative_to(dir))
        }
        None if explicit.is_some() => {
            bail!("Config file '{}' not found", config_path.display())
        }
        None => Ok(Config::default()),
    }
}

/// Command line flags override config values.
fn site_options(config: Config, args: BuildArgs) -> SiteOptions {
    SiteOptions {
        content_dir: args.content.unwrap_or(config.content_dir),
        static_dir: args.static_dir.unwrap_or(config.static_dir),
        template_path: args.template.unwrap_or(config.template_path),
        output_dir: args.output.unwrap_or(config.output_dir),
        base_path: args.base_path.unwrap_or(config.base_path),
    }
}

fn render_file(args: &RenderArgs) -> Result<String> {
    let markdown = io::read_path(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;

    let output = if args.title {
        extract_title(&markdown)?
    } else {
        markdown_to_html_node(&markdown)?.to_html()?
    };
    Ok(output)
}
