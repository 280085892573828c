use clap::{Parser, Subcommand};
use std::path::PathBuf;
use stillfolio::{config, content, generate, output};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup; the string lives for the process.
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "stillfolio")]
#[command(about = "Static site generator for CMS-backed photo portfolios")]
#[command(long_about = "\
Static site generator for CMS-backed photo portfolios

Your headless CMS is the data source. Dump its API responses to a JSON
content export and stillfolio renders a complete static site from it.

Content export shape (top-level keys, all optional):

  {
    \"heroImage\": \"/uploads/hero.jpg\",
    \"posts\":     [ { id, title, slug, category, location, year,
                     updatedAt, description: [blocks], images: [...] } ],
    \"projects\":  [ { id, title, slug, tags, url, description, images } ],
    \"tutorials\": [ { id, Title, Excerpt, ReadTime, Difficulty,
                     CoverImage, Content: [blocks], slug } ]
  }

Rich-text fields use the CMS blocks format (paragraph, heading, list,
quote, code; text and link inline nodes). Unknown block types are skipped,
so a newer CMS never breaks an older stillfolio.

Image URLs are resolved against [site].media_base_url from config.toml.
Run 'stillfolio gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content export JSON file
    #[arg(long, default_value = "export.json", global = true)]
    content: PathBuf,

    /// Site config file
    #[arg(long, default_value = "config.toml", global = true)]
    config: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the static site from the content export
    Build,
    /// Load and validate the content export without building
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            let site = config::load_config(&cli.config)?;
            let export = content::load_export(&cli.content)?;
            println!("==> Building {} → {}", cli.content.display(), cli.output.display());
            let summary = generate::generate(&export, &site, &cli.output)?;
            output::print_generate_output(&summary);
            println!("==> Site generated at {}", cli.output.display());
        }
        Command::Check => {
            // Config participates in check: a bad config should fail here,
            // not at build time.
            config::load_config(&cli.config)?;
            println!("==> Checking {}", cli.content.display());
            let export = content::load_export(&cli.content)?;
            output::print_check_output(&export);
            println!("==> Content export is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
