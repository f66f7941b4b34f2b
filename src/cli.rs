use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "autorec",
    version,
    about = "Rank vehicle catalogs against buyer preferences"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score, sort and deduplicate a catalog
    Rank(RankCommand),
    /// Print the profile inferred from a preference file
    Classify(ClassifyCommand),
    /// Print the catalog records that pass the hard constraints
    Filter(FilterCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ProfileArg {
    Family,
    Commuter,
    Luxury,
    Eco,
    Sporty,
    General,
}

impl From<ProfileArg> for autorec::profile::Profile {
    fn from(arg: ProfileArg) -> Self {
        use autorec::profile::Profile;
        match arg {
            ProfileArg::Family => Profile::Family,
            ProfileArg::Commuter => Profile::Commuter,
            ProfileArg::Luxury => Profile::Luxury,
            ProfileArg::Eco => Profile::Eco,
            ProfileArg::Sporty => Profile::Sporty,
            ProfileArg::General => Profile::General,
        }
    }
}

#[derive(Args)]
pub struct PreferenceArgs {
    /// Preference payload (.json or .toml)
    #[arg(short, long)]
    pub preferences: Option<PathBuf>,

    /// Directory holding autorec.toml
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}

#[derive(Args)]
pub struct RankCommand {
    /// JSON file or directory of JSON files
    pub catalog: PathBuf,
    #[command(flatten)]
    pub prefs: PreferenceArgs,
    /// Override the inferred profile
    #[arg(long, value_enum)]
    pub profile: Option<ProfileArg>,
    #[arg(long)]
    pub top: Option<usize>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    #[arg(long)]
    pub no_dedupe: bool,
}

#[derive(Args)]
pub struct ClassifyCommand {
    #[command(flatten)]
    pub prefs: PreferenceArgs,
}

#[derive(Args)]
pub struct FilterCommand {
    pub catalog: PathBuf,
    #[command(flatten)]
    pub prefs: PreferenceArgs,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
