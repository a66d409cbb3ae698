// ABOUTME: Command line argument definitions and parsing using Clap
// ABOUTME: Defines the main CLI structure and subcommands for urlhelpers

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "urlhelpers")]
#[command(about = "Render Handlebars templates with URL helpers")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Path to configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a template
    Render {
        #[arg(help = "Template file, '-' for stdin, or the template itself with --inline")]
        template: String,

        #[arg(long, help = "Treat the template argument as template text")]
        inline: bool,

        #[arg(
            short = 'V',
            long = "var",
            help = "Template variables (key=value)"
        )]
        vars: Vec<String>,

        #[arg(short, long, help = "JSON file with template data")]
        data: Option<PathBuf>,

        #[arg(short, long, help = "Write output to a file instead of stdout")]
        output: Option<PathBuf>,
    },

    /// Check template syntax without rendering
    Validate {
        #[arg(help = "Path to template file")]
        template: PathBuf,
    },

    /// List the available helpers
    Helpers,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parse variables from key=value format
    pub fn parse_variables(
        vars: &[String],
    ) -> anyhow::Result<std::collections::HashMap<String, String>> {
        let mut variables = std::collections::HashMap::new();

        for var in vars {
            if let Some((key, value)) = var.split_once('=') {
                variables.insert(key.to_string(), value.to_string());
            } else {
                return Err(anyhow::anyhow!(
                    "Invalid variable format '{}'. Expected 'key=value'",
                    var
                ));
            }
        }

        Ok(variables)
    }
}
