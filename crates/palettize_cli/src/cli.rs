//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Base16 palettes in, editor themes out
#[derive(Parser, Debug)]
#[command(name = "palettize", about, version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format: text (human-readable) or json (machine-readable)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal output for humans
    #[default]
    Text,
    /// Structured JSON for scripts and machine consumption
    Json,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Report how a theme's colors map onto a palette
    Analyze {
        /// Theme JSON (default: <data_dir>/<scheme>.json)
        #[arg(short, long)]
        theme: Option<PathBuf>,
        /// Palette YAML (default: <data_dir>/<scheme>.yml)
        #[arg(short, long)]
        palette: Option<PathBuf>,
    },
    /// Turn a theme into a template with {{ baseNN }} placeholders
    Template {
        /// Theme JSON (default: <data_dir>/<scheme>.json)
        #[arg(short, long)]
        theme: Option<PathBuf>,
        /// Palette YAML (default: <data_dir>/<scheme>.yml)
        #[arg(short, long)]
        palette: Option<PathBuf>,
        /// Template output path (default: <out_dir>/generated-theme.json.j2)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Also replace colors within this Delta E of a slot (e.g. 5.0)
        #[arg(long)]
        threshold: Option<f64>,
    },
    /// Render a theme from a palette and a template
    Build {
        /// Palette YAML (default: <data_dir>/<scheme>.yml)
        #[arg(short, long)]
        palette: Option<PathBuf>,
        /// Template file (default: templates/vscode-theme.json.j2)
        #[arg(short, long)]
        template: Option<PathBuf>,
        /// Output directory (default: out)
        #[arg(long)]
        out_dir: Option<PathBuf>,
        /// Output file name (default: <palette-slug>.json)
        #[arg(long)]
        output_name: Option<String>,
    },
    /// Download base16 schemes from GitHub
    Fetch {
        /// Output directory; files land in <dir>/<commit>/themes (default: out)
        #[arg(long)]
        out_dir: Option<PathBuf>,
        /// Only download the first N files
        #[arg(short, long)]
        limit: Option<usize>,
        /// Maximum concurrent downloads (default: 10)
        #[arg(short, long)]
        concurrency: Option<usize>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_template_with_globals() {
        let cli = Cli::try_parse_from([
            "palettize", "template", "-t", "theme.json", "--threshold", "5", "-o", "json", "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.output, OutputFormat::Json);
        assert_eq!(
            cli.command,
            Command::Template {
                theme: Some(PathBuf::from("theme.json")),
                palette: None,
                out: None,
                threshold: Some(5.0),
            }
        );
    }

    #[test]
    fn test_parse_build() {
        let cli = Cli::try_parse_from([
            "palettize", "build", "-p", "nord.yml", "--out-dir", "themes", "--output-name", "nord",
        ])
        .unwrap();
        assert_eq!(cli.output, OutputFormat::Text);
        match cli.command {
            Command::Build {
                palette,
                template,
                out_dir,
                output_name,
            } => {
                assert_eq!(palette, Some(PathBuf::from("nord.yml")));
                assert_eq!(template, None);
                assert_eq!(out_dir, Some(PathBuf::from("themes")));
                assert_eq!(output_name.as_deref(), Some("nord"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_fetch() {
        let cli = Cli::try_parse_from(["palettize", "fetch", "--limit", "3", "-c", "4"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Fetch {
                out_dir: None,
                limit: Some(3),
                concurrency: Some(4),
            }
        );
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(Cli::try_parse_from(["palettize"]).is_err());
        assert!(Cli::try_parse_from(["palettize", "template", "--threshold", "close"]).is_err());
        assert!(Cli::try_parse_from(["palettize", "analyze", "-o", "yaml"]).is_err());
    }
}
