use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use storefront::{config, generate, output, scan};

#[derive(Parser)]
#[command(name = "storefront")]
#[command(about = "Static site generator for AI agent marketplaces")]
#[command(long_about = "\
Static site generator for AI agent marketplaces

Offerings and navigation live in plain TOML files. Every file is optional:
an empty content directory builds the sample storefront.

Content structure:

  content/
  ├── config.toml          # Branding, currency, colors (optional)
  ├── catalog.toml         # [[offerings]]: id, name, category, price, description, media
  ├── navigation.toml      # [[links]], [[categories]], [[sections]], [[user_menu]], [[social]]
  ├── assets/              # Copied to the output root
  └── pages/               # Markdown pages → /{slug}/
      └── about.md

Output:

  dist/index.html                    # Header, gallery, footer
  dist/agent/{id}/index.html         # One per offering
  dist/category/{path}/index.html    # One per category filter

Run 'storefront gen-config' to print a documented config.toml.")]
#[command(version = env!("STOREFRONT_VERSION"))]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Directory for the intermediate manifest
    #[arg(long, default_value = ".storefront-temp", global = true)]
    temp_dir: PathBuf,

    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load the content directory into a manifest
    Scan,
    /// Produce the HTML site from the manifest
    Generate,
    /// Run the full pipeline: scan → generate
    Build,
    /// Validate the content directory without building
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match cli.command {
        Command::Scan => {
            let manifest = scan::scan(&cli.source)?;
            write_manifest(&manifest, &cli.temp_dir)?;
            output::print_scan_output(&manifest, &cli.source);
        }
        Command::Generate => {
            let manifest =
                generate::generate(&manifest_path(&cli.temp_dir), &cli.output, &cli.source)?;
            output::print_generate_output(&manifest);
        }
        Command::Build => {
            println!("==> Stage 1: Scanning {}", cli.source.display());
            let manifest = scan::scan(&cli.source)?;
            let manifest_path = write_manifest(&manifest, &cli.temp_dir)?;
            output::print_scan_output(&manifest, &cli.source);

            println!("==> Stage 2: Generating HTML → {}", cli.output.display());
            let manifest = generate::generate(&manifest_path, &cli.output, &cli.source)?;
            output::print_generate_output(&manifest);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let manifest = scan::scan(&cli.source)?;
            output::print_scan_output(&manifest, &cli.source);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

fn manifest_path(temp_dir: &Path) -> PathBuf {
    temp_dir.join("manifest.json")
}

/// Serialize the manifest into the temp directory and return its path.
fn write_manifest(manifest: &scan::Manifest, temp_dir: &Path) -> std::io::Result<PathBuf> {
    std::fs::create_dir_all(temp_dir)?;
    let path = manifest_path(temp_dir);
    let json = serde_json::to_string_pretty(manifest)?;
    std::fs::write(&path, json)?;
    Ok(path)
}
