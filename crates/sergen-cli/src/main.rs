//! sergen CLI - Serialization header generator
//!
//! Commands:
//! - `sergen generate` - Generate a serialization header from a description file
//! - `sergen check` - Validate a description file and its template
//! - `sergen init-template` - Write the default `template_serialization.h`

use clap::{Parser, Subcommand};

mod check;
mod description;
mod generate;
mod init;
mod logging;

#[derive(Parser)]
#[command(name = "sergen")]
#[command(author, version, about = "Generates C++ serialization glue headers", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a serialization header
    Generate {
        /// Path to the class description file (TOML, or JSON with .json extension)
        #[arg(short, long, default_value = "sergen.toml")]
        description: String,

        /// Output path for the generated header (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Validate a description file and the template it uses
    Check {
        /// Path to the class description file
        #[arg(short, long, default_value = "sergen.toml")]
        description: String,
    },

    /// Write the default template_serialization.h
    InitTemplate {
        /// Target directory (default: current directory)
        #[arg(short, long)]
        dir: Option<String>,

        /// Overwrite an existing template
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.verbose);

    match cli.command {
        Commands::Generate {
            description,
            output,
        } => {
            generate::run(&description, output.as_deref())?;
        }
        Commands::Check { description } => {
            check::run(&description)?;
        }
        Commands::InitTemplate { dir, force } => {
            init::run(dir, force)?;
        }
    }

    Ok(())
}
