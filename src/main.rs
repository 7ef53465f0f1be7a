//! Tptags CLI application entry point
//!
//! Command-line front end for the tptags tag library manager. Each
//! invocation resolves a library root, runs one core operation against it,
//! and renders the result.
//!
//! # Usage
//!
//! ```bash
//! # Initialize the current directory as a library (optionally seeded)
//! tptags init
//! tptags init --seed
//!
//! # Create and list tags
//! tptags create jpg -a jpeg
//! tptags list
//!
//! # Delete a tag (prompts when groups reference it)
//! tptags delete 1842
//! tptags delete 1842 --force
//!
//! # Manage groups
//! tptags group create image -t 1842 -t 9271
//! tptags group list
//! tptags group delete 9001
//!
//! # Operate on a named library instead of the current directory
//! tptags lib add photos ~/Pictures
//! tptags -l photos list
//! ```
//!
//! # Configuration
//!
//! Named libraries and the default library live in the user's config
//! directory (`~/.config/tptags/config.toml` on Linux).

use colored::Colorize;

use tptags::{
    TptagsError,
    cli::{Cli, Commands},
    commands,
    config::TptagsConfig,
};

type Result<T> = std::result::Result<T, TptagsError>;

fn run(cli: &Cli) -> Result<()> {
    let config = TptagsConfig::load()?;
    let quiet = cli.quiet || config.quiet;

    // Registry management needs no library root.
    if let Commands::Lib { command } = &cli.command {
        return commands::lib(command, quiet);
    }

    let root = cli.resolve_root(&config)?;
    match &cli.command {
        Commands::Init { seed } => commands::init(&root, *seed, quiet),
        Commands::Create { name, aliases } => {
            commands::tag::create(&root, name, aliases.clone(), quiet)
        }
        Commands::List => commands::tag::list(&root, quiet),
        Commands::Delete { tag_id, force } => {
            commands::tag::delete(&root, tag_id, *force, quiet)
        }
        Commands::Group { command } => commands::group(&root, command, quiet),
        Commands::Lib { .. } => Ok(()),
    }
}

fn main() {
    let cli = Cli::parse_args();

    if let Err(err) = run(&cli) {
        eprintln!("{} {err}", "error:".red().bold());
        std::process::exit(1);
    }
}
