use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Parser)]
#[command(name = "userdeck")]
#[command(about = "Browse random user profiles from the terminal", version)]
#[command(after_help = "EXAMPLES:
    userdeck                       Open the interactive browser
    userdeck browse --fresh        Browse, ignoring the cached list
    userdeck list --pages 3        Fetch three pages and print a table
    userdeck list --json           Print as JSON for scripting
    userdeck cache show            Show the locally cached users
    userdeck cache clear           Delete the local cache")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format (table, json)
    #[arg(long, short = 'o', global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Output as JSON (alias for --format json)
    #[arg(long, global = true, hide = true)]
    pub json: bool,

    /// Suppress informational messages
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive user browser (default)
    #[command(after_help = "EXAMPLES:
    userdeck browse
    userdeck browse --page-size 16 --seed userdeck
    userdeck browse --fresh")]
    Browse(BrowseArgs),
    /// Fetch pages of users and print the accumulated list
    #[command(after_help = "EXAMPLES:
    userdeck list
    userdeck list --pages 3 --page-size 16
    userdeck list --no-store --json")]
    List(ListArgs),
    /// Inspect or delete the locally cached user list
    #[command(after_help = "EXAMPLES:
    userdeck cache show
    userdeck cache clear
    userdeck cache path")]
    Cache {
        #[command(subcommand)]
        action: CacheCommands,
    },
    /// Generate shell completions
    #[command(after_help = "EXAMPLES:
    userdeck completions bash > ~/.bash_completion.d/userdeck
    userdeck completions zsh > ~/.zfunc/_userdeck
    userdeck completions fish > ~/.config/fish/completions/userdeck.fish")]
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Args, Default)]
pub struct BrowseArgs {
    /// Users per page (default: 8, or page_size from config)
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Seed for reproducible results
    #[arg(long)]
    pub seed: Option<String>,

    /// Start with an empty list instead of the cached one
    #[arg(long)]
    pub fresh: bool,
}

#[derive(Args)]
pub struct ListArgs {
    /// Number of pages to fetch
    #[arg(long, short, default_value = "1")]
    pub pages: u32,

    /// Users per page (default: 8, or page_size from config)
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Seed for reproducible results
    #[arg(long)]
    pub seed: Option<String>,

    /// Do not write the fetched users to the local cache
    #[arg(long)]
    pub no_store: bool,
}

#[derive(Subcommand)]
pub enum CacheCommands {
    /// Print the cached user list
    Show,
    /// Delete the cached user list
    Clear,
    /// Print the cache file location
    Path,
}
