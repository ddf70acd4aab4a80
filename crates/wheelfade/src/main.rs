mod cli;
mod run;
mod script;
mod textures;

use anyhow::Result;
use cli::Command;

fn main() -> Result<()> {
    let cli = cli::parse();
    run::initialise_tracing();

    match cli.command {
        Some(Command::Check(args)) => run::check(args),
        Some(Command::Variants(args)) => run::variants(args),
        None => run::run(cli.run),
    }
}
