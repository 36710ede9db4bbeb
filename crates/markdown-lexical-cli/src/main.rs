use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use markdown_lexical_config::Config;
use markdown_lexical_engine::{ConvertOptions, LinkPolicy, generate_slug};
use serde::Serialize;
use std::io::{Write, stdout};
use std::path::PathBuf;

mod migrate;
mod record;
mod source;

use record::PostRecord;

#[derive(Parser)]
#[command(name = "markdown-lexical")]
#[command(about = "Convert legacy markdown posts into structured content records")]
struct Cli {
    /// Config file (defaults to ~/.config/markdown-lexical/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert one markdown file and print its post record
    Convert {
        input: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Convert every markdown file in a directory
    Migrate {
        /// Source directory (defaults to `source_path` from the config)
        dir: Option<PathBuf>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Print the slug for a title
    Slug { title: String },
    /// Write a config file holding the default settings
    Init {
        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args)]
struct OutputArgs {
    /// How inline links are stored
    #[arg(long, value_enum)]
    links: Option<LinkArg>,

    /// Maximum description length in characters
    #[arg(long)]
    description_length: Option<usize>,

    /// Emit single-line JSON
    #[arg(long)]
    compact: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum LinkArg {
    AnchorText,
    Preserve,
}

impl From<LinkArg> for LinkPolicy {
    fn from(arg: LinkArg) -> Self {
        match arg {
            LinkArg::AnchorText => LinkPolicy::AnchorText,
            LinkArg::Preserve => LinkPolicy::Preserve,
        }
    }
}

impl OutputArgs {
    /// Command-line flags win over the config file.
    fn apply(&self, mut opts: ConvertOptions) -> ConvertOptions {
        if let Some(links) = self.links {
            opts.links = links.into();
        }
        if let Some(len) = self.description_length {
            opts.description_max_length = len;
        }
        opts
    }
}

fn print_json<T: Serialize>(value: &T, compact: bool) -> Result<()> {
    let mut out = stdout().lock();
    if compact {
        serde_json::to_writer(&mut out, value)?;
    } else {
        serde_json::to_writer_pretty(&mut out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = Config::load_or_default(cli.config.as_deref())
        .context("Failed to load config file")?;

    match cli.command {
        Command::Convert { input, output } => {
            let opts = output.apply(config.convert);
            let record = PostRecord::from_path(&input, &opts)
                .with_context(|| format!("Failed to read {}", input.display()))?;
            log::info!("Converted {} as {:?}", input.display(), record.meta.slug);
            print_json(&record, output.compact)?;
        }
        Command::Migrate { dir, output } => {
            let opts = output.apply(config.convert);
            let Some(dir) = dir.or(config.source_path) else {
                bail!(
                    "No source directory given and no source_path in {}",
                    cli.config.unwrap_or_else(Config::config_path).display()
                );
            };
            let report = migrate::migrate_dir(&dir, &opts)
                .with_context(|| format!("Failed to migrate {}", dir.display()))?;
            print_json(&report.records, output.compact)?;
        }
        Command::Slug { title } => {
            println!("{}", generate_slug(&title));
        }
        Command::Init { force } => {
            let path = cli.config.unwrap_or_else(Config::config_path);
            if path.exists() && !force {
                bail!("{} already exists, pass --force to replace it", path.display());
            }
            Config::default().save_to_path(&path)?;
            log::info!("Wrote {}", path.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::try_parse_from([
            "markdown-lexical",
            "convert",
            "post.md",
            "--links",
            "preserve",
            "--description-length",
            "40",
        ])
        .unwrap();

        let Command::Convert { output, .. } = cli.command else {
            panic!("expected convert");
        };
        let opts = output.apply(ConvertOptions::default());

        assert_eq!(opts.links, LinkPolicy::Preserve);
        assert_eq!(opts.description_max_length, 40);
        assert_eq!(opts.title_fallback, "Untitled");
    }

    #[test]
    fn config_flag_is_global() {
        let cli = Cli::try_parse_from(["markdown-lexical", "slug", "Hi There", "--config", "x.toml"])
            .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
    }

    #[test]
    fn init_takes_force_flag() {
        let cli = Cli::try_parse_from(["markdown-lexical", "init", "--force"]).unwrap();

        assert!(matches!(cli.command, Command::Init { force: true }));
    }

    #[test]
    fn unknown_link_policy_is_rejected() {
        let result = Cli::try_parse_from(["markdown-lexical", "migrate", "--links", "inline"]);
        assert!(result.is_err());
    }
}
