pub mod handlers;

use crate::presentation::cli::{Cli, Commands};
use ardu_core::Verb;
use ardu_core::error::Result;
use clap::Parser;
use handlers::JobOverrides;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let cwd = std::env::current_dir()?;
    let config = cli.config.as_deref();
    match cli.command {
        Commands::Build => handlers::handle_driver(&cwd, config, Verb::Build),
        Commands::Upload => handlers::handle_driver(&cwd, config, Verb::Upload),
        Commands::Monitor => handlers::handle_driver(&cwd, config, Verb::Monitor),
        Commands::Favicon {
            input,
            output,
            chunk_width,
        } => handlers::handle_favicon(
            &cwd,
            config,
            JobOverrides {
                input,
                output,
                chunk_width,
            },
        ),
        Commands::Html {
            input,
            output,
            chunk_width,
        } => handlers::handle_html(
            &cwd,
            config,
            JobOverrides {
                input,
                output,
                chunk_width,
            },
        ),
    }
}
