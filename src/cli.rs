use clap::Parser;

/// CLI arguments parser using `clap`
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Name of the repository the remotes point at
    pub repo_name: String,
    /// Use no-reply (privacy-preserving) author identity for both remotes
    #[arg(long)]
    pub private_user: bool,
}
