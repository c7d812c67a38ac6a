use anyhow::Result;
use clap::{Parser, Subcommand};
use nit::areas::repository::Repository;

#[derive(Parser)]
#[command(
    name = "nit",
    version = "0.1.0",
    about = "A tiny snapshot-based version control system",
    long_about = "nit is a minimal version control system that snapshots staged \
    files into content-addressed commits. It is a learning project, not a git \
    replacement: every commit stores full file contents and history is a single \
    parent chain.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command initializes a new repository in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<String>,
    },
    #[command(
        name = "add",
        about = "Stage a file for the next commit",
        long_about = "This command adds a file to the staging area. Staging the same file twice is a no-op."
    )]
    Add {
        #[arg(index = 1, help = "The file to stage")]
        file: String,
    },
    #[command(
        name = "rm",
        about = "Unstage a file",
        long_about = "This command removes a file from the staging area. The working copy is left untouched."
    )]
    Rm {
        #[arg(index = 1, help = "The file to unstage")]
        file: String,
    },
    #[command(
        name = "commit",
        about = "Create a new commit with the specified message",
        long_about = "This command snapshots the staged files into a new commit and advances HEAD to it."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(
        name = "log",
        about = "Show commit history",
        long_about = "This command walks the parent chain from HEAD and prints each commit, most recent first."
    )]
    Log,
    #[command(
        name = "diff",
        about = "Show changes of a file against the last commit",
        long_about = "This command prints a unified diff between the head commit's snapshot of a file and its current working content."
    )]
    Diff {
        #[arg(index = 1, help = "The file to diff")]
        file: String,
    },
    #[command(
        name = "branch",
        about = "Unsupported",
        long_about = "Branches are not supported: commits form a single parent chain and HEAD is the only pointer."
    )]
    Branch {
        #[arg(index = 1, help = "The branch name")]
        name: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Init { path } => {
            let mut repository = match path {
                Some(path) => Repository::new(path, Box::new(std::io::stdout()))?,
                None => {
                    let pwd = std::env::current_dir()?;
                    Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?
                }
            };

            repository.init()?
        }
        Commands::Add { file } => open_repository()?.add(file)?,
        Commands::Rm { file } => open_repository()?.rm(file)?,
        Commands::Commit { message } => open_repository()?.commit(message)?,
        Commands::Log => open_repository()?.log()?,
        Commands::Diff { file } => open_repository()?.diff(file)?,
        Commands::Branch { name } => {
            anyhow::bail!("the branch command is not supported (no branch named {name} was created)")
        }
    }

    Ok(())
}

fn open_repository() -> Result<Repository> {
    let pwd = std::env::current_dir()?;
    Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))
}
