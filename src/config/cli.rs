use crate::domain::model::OutputFormat;
use crate::domain::ports::ConfigProvider;
use crate::utils::validation::split_name_list;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "secret-friend")]
#[command(about = "Draw names for a secret friend gift exchange")]
pub struct CliConfig {
    /// Participant name; repeat the flag for each person
    #[arg(short = 'n', long = "name")]
    pub names: Vec<String>,

    /// Comma-separated participant list, e.g. "Ana, Bia, Caio"
    #[arg(long = "names")]
    pub name_list: Option<String>,

    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub min_participants: Option<usize>,

    /// Seed for a reproducible draw
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write the draw result to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Start an interactive session even when names were given
    #[arg(short, long)]
    pub interactive: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl ConfigProvider for CliConfig {
    fn min_participants(&self) -> Option<usize> {
        self.min_participants
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn participants(&self) -> Vec<String> {
        let mut names: Vec<String> = self.names.clone();
        if let Some(list) = &self.name_list {
            names.extend(split_name_list(list));
        }
        names
    }

    fn output_format(&self) -> Option<OutputFormat> {
        self.format
    }

    fn output_path(&self) -> Option<&str> {
        self.output.as_deref()
    }

    fn json_logs(&self) -> Option<bool> {
        self.json_logs.then_some(true)
    }
}
