use clap::{Parser, Subcommand};
use spruce::{blog, catalog, config, generate, output, surfaces};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "spruce")]
#[command(about = "Static site generator for local service-business sites")]
#[command(long_about = "\
Static site generator for local service-business sites

Your content directory is the data source. TOML catalogs describe the
services you offer and the areas you cover; the site is their cross
product, plus markdown pages and a blog fetched from a content API.

Content structure:

  content/
  ├── config.toml        # Site config (optional, overrides stock defaults)
  ├── services.toml      # Service catalog ([[service]] entries)
  ├── locations.toml     # Coverage catalog ([[location]] entries)
  ├── reviews.toml       # Customer reviews (optional)
  ├── faqs.toml          # FAQ entries, optionally per-service (optional)
  ├── jobs.toml          # Open positions for /careers (optional)
  └── pages/             # Markdown pages (about.md → /about/)
      ├── about.md
      └── contact.md

Every service × location pair gets its own landing page with canonical
URL, breadcrumbs, and Service structured data. The blog is fetched at
build time; an unreachable API degrades the blog to empty rather than
failing the build.

Run 'spruce gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the full page inventory without building
    Plan,
    /// Build the complete site: pages, sitemap, feed, robots.txt
    Build,
    /// Validate the content directory without building
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Plan => {
            let site_config = config::load_config(&cli.source)?;
            let content = catalog::load_catalog(&cli.source)?;
            catalog::validate(&content)?;
            let plan = surfaces::enumerate_surfaces(
                &content.services,
                &content.locations,
                surfaces::STATIC_ROUTES,
                chrono::Utc::now().date_naive(),
            );
            println!("==> Site plan for {}", site_config.site.base_url);
            output::print_plan_output(&content, &plan);
        }
        Command::Build => {
            let site_config = config::load_config(&cli.source)?;
            let content = catalog::load_catalog(&cli.source)?;
            catalog::validate(&content)?;

            println!("==> Fetching blog from {}", site_config.blog.api_url);
            let client = blog::BlogClient::new(&site_config.blog.api_url);
            let blog_content = blog::collect_content(&client, site_config.blog.page_size);
            println!("    {} posts", blog_content.post_count());

            println!("==> Generating HTML \u{2192} {}", cli.output.display());
            let summary = generate::generate(&site_config, &content, &blog_content, &cli.output)?;
            output::print_build_summary(&summary);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let site_config = config::load_config(&cli.source)?;
            let content = catalog::load_catalog(&cli.source)?;
            catalog::validate(&content)?;
            output::print_check_output(&site_config, &content);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
