use std::path::PathBuf;

#[derive(clap::Parser, Debug, Clone)]
#[command(version, about = "Chat slash-command handlers")]
pub struct Cli {
    /// TOML file with endpoint and tuning settings.
    #[arg(long, env = "COMMANDER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory of secret files, used for any secret the invocation doesn't carry.
    #[arg(long, env = "COMMANDER_SECRETS_DIR")]
    pub secrets_dir: Option<PathBuf>,

    #[arg(long)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug, Clone)]
pub enum Command {
    /// Run a command with an invocation read from stdin or a file.
    Run(Run),

    /// List the available commands.
    List,
}

impl Command {
    pub fn run(&self) -> Option<&Run> {
        if let Self::Run(ref run) = self {
            Some(run)
        } else {
            None
        }
    }
}

#[derive(clap::Args, Debug, Clone)]
pub struct Run {
    pub name: String,

    /// Read the invocation from this file instead of stdin.
    #[arg(long)]
    pub input: Option<PathBuf>,
}

impl Run {
    pub fn read_invocation(&self) -> Result<crate::Invocation, crate::errors::InvocationError> {
        match self.input {
            Some(ref path) => crate::Invocation::from_reader(std::fs::File::open(path)?),
            None => crate::Invocation::from_reader(std::io::stdin().lock()),
        }
    }
}
