use std::path::PathBuf;
use clap::{Parser, Subcommand, Args};

#[derive(Parser)]
#[command(name = "shopify-seo", version, about = "Shopify theme SEO checker")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Serve(ServeArgs),
    /// Run the SEO rules over local theme files
    Analyze(AnalyzeArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
    /// List installed shops or forget one
    Shops(ShopsArgs),
}

#[derive(Args, Clone)]
pub struct ServeArgs {
    /// Listen port
    #[arg(long, default_value = "8000")]
    pub port: u16,

    /// Listen address
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// YAML configuration file (environment variables take precedence)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Args, Clone)]
pub struct AnalyzeArgs {
    /// Theme files to analyze
    #[arg(required_unless_present = "theme_dir")]
    pub files: Vec<PathBuf>,

    /// Analyze a theme checked out locally, selecting files the way a shop scan does
    #[arg(long, conflicts_with = "files")]
    pub theme_dir: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// Config file to validate
    pub config: PathBuf,
}

#[derive(Args, Clone)]
pub struct ShopsArgs {
    /// Remove the stored access token for this shop
    #[arg(long, value_name = "SHOP")]
    pub forget: Option<String>,

    /// YAML configuration file (environment variables take precedence)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
