use crate::config::toml_config::SiteConfig;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "butterfly-site")]
#[command(about = "Renders the Butterfly site and runs its interactive pieces")]
pub struct CliConfig {
    /// Path to a TOML content file; the built-in content is used when omitted
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Render every route to static HTML
    Build {
        /// Override site.output_path
        #[arg(short, long)]
        output: Option<String>,

        /// Also pack the rendered pages into site.zip
        #[arg(long)]
        archive: bool,

        /// Journey stage (1-based) to pre-select in the explorer panel
        #[arg(long, default_value = "1", value_parser = clap::value_parser!(u64).range(1..))]
        stage: u64,
    },
    /// Step through the lifecycle stages in the terminal
    Explore,
    /// Send a message through the configured contact service
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        message: String,
    },
    /// List the site's routes
    Routes,
}

impl CliConfig {
    pub fn load_site_config(&self) -> Result<SiteConfig> {
        match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading content from: {}", path);
                SiteConfig::from_file(path)
            }
            None => {
                tracing::debug!("Using built-in content");
                SiteConfig::builtin()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_build_command() {
        let cli = CliConfig::parse_from([
            "butterfly-site",
            "build",
            "--output",
            "./public-site",
            "--archive",
            "-v",
        ]);
        assert!(cli.verbose);
        match cli.command {
            Command::Build {
                output,
                archive,
                stage,
            } => {
                assert_eq!(output.as_deref(), Some("./public-site"));
                assert!(archive);
                assert_eq!(stage, 1);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_stage_zero_is_rejected() {
        let parsed = CliConfig::try_parse_from(["butterfly-site", "build", "--stage", "0"]);
        assert!(parsed.is_err());

        let cli = CliConfig::parse_from(["butterfly-site", "build", "--stage", "3"]);
        match cli.command {
            Command::Build { stage, .. } => assert_eq!(stage, 3),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_contact_requires_all_fields() {
        let parsed = CliConfig::try_parse_from(["butterfly-site", "contact", "--name", "A"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_builtin_content_without_config_flag() {
        let cli = CliConfig::parse_from(["butterfly-site", "routes"]);
        assert!(cli.load_site_config().is_ok());
    }
}
