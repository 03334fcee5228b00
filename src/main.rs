use clap::{Parser, Subcommand};
use std::path::PathBuf;
use supap_site::mailto::{ContactMessage, MailtoLink};
use supap_site::{config, content, generate, output};

#[derive(Parser)]
#[command(name = "supap-site")]
#[command(about = "Static site generator for the SUPAP website")]
#[command(long_about = "\
Static site generator for the SUPAP website

Every page is driven by one TOML file in the content directory. The build
renders eight pages, a fingerprinted stylesheet and script, and copies the
public directory verbatim.

Content structure:

  content/
  ├── config.toml       # Presentation settings (optional)
  ├── site.toml         # Organization, navigation, footer, shared labels
  ├── home.toml         # /
  ├── about.toml        # /nosotros/
  ├── team.toml         # /equipo/
  ├── services.toml     # /servicios/
  ├── events.toml       # /eventos/
  ├── contact.toml      # /contacto/
  ├── country.toml      # /accionpais/
  └── portal.toml       # /aulavirtual/

  public/               # Images, robots.txt → copied to the output root

Run 'supap-site gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Static files copied verbatim into the output root
    #[arg(long, default_value = "public", global = true)]
    public: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render every page into the output directory
    Build,
    /// Validate content and config without writing anything
    Check,
    /// Print the loaded content as JSON
    Inspect,
    /// Print a stock config.toml with all options documented
    GenConfig,
    /// Print the mailto: link the contact form opens for these values
    Mailto(MailtoArgs),
}

#[derive(clap::Args)]
struct MailtoArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    subject: String,
    #[arg(long)]
    message: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            println!("==> Loading {}", cli.source.display());
            let site_config = config::load_config(&cli.source)?;
            let site_content = content::load(&cli.source)?;

            println!("==> Generating HTML → {}", cli.output.display());
            let report = generate::generate(&site_content, &site_config, &cli.public, &cli.output)?;
            output::print_generate_output(&report);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            config::load_config(&cli.source)?;
            let site_content = content::load(&cli.source)?;
            let config_path = cli.source.join("config.toml");
            let config_path = config_path.is_file().then_some(config_path);
            output::print_check_output(&site_content, config_path.as_deref());
            println!("==> Content is valid");
        }
        Command::Inspect => {
            let site_content = content::load(&cli.source)?;
            println!("{}", serde_json::to_string_pretty(&site_content)?);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::Mailto(args) => {
            let site_content = content::load(&cli.source)?;
            let message = ContactMessage {
                name: args.name,
                email: args.email,
                subject: args.subject,
                message: args.message,
            };
            let link = MailtoLink::from_message(&site_content.contact.form.recipient, &message);
            println!("{}", link);
        }
    }

    Ok(())
}
