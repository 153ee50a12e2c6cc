use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use shiplog::Result;
use std::io;

#[derive(Parser)]
#[command(name = "shiplog")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Compile changelog entries and bump version strings", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile pending entries into the changelog and bump versions
    Ship {
        /// The next version of the package
        version: String,

        /// Report what would happen without touching any file
        #[arg(long)]
        dry_run: bool,

        /// Print merged entries and the generated Markdown
        #[arg(long)]
        debug: bool,
    },

    /// Create a pending entry skeleton in the source directory
    Generate {
        /// Name for the entry file (e.g. a branch name)
        name: String,
    },

    /// Scaffold shiplog.toml and the entry source directory
    Init,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("\n {}  {}", "✘".red(), format!("{:#}", err).red());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ship {
            version,
            dry_run,
            debug,
        } => {
            shiplog::cli::ship::run(&version, dry_run, debug)?;
        }

        Commands::Generate { name } => {
            shiplog::cli::generate::run(&name)?;
        }

        Commands::Init => {
            println!("{}", "🚀 Initializing shiplog...".cyan());
            shiplog::cli::init::run()?;
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "shiplog", &mut io::stdout());
        }
    }

    Ok(())
}
