mod check_name;
mod keys;
mod normalize;
mod render;

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use cbf::messages::style::Styler;
use cbf::messages::{MessageCatalog, RenderOptions, ids};

#[derive(Parser, Debug)]
#[command(name = "cbf", about = "Inspect cbf script keys and messages")]
struct Cli {
    /// Log file path (mirrors log output to a file)
    #[arg(long)]
    log_file: Option<String>,

    /// Never colour output
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the submenu keys a selection such as `git:remote:push` resolves through
    Keys(keys::KeysArgs),
    /// Render a message template
    Render(render::RenderArgs),
    /// Turn free text into a key segment, or strip the documentation from a menu choice
    Normalize(normalize::NormalizeArgs),
    /// Check that a scripts file name has a supported extension
    CheckName(check_name::CheckNameArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let styler = if cli.plain {
        Styler::plain()
    } else {
        Styler::detect()
    };
    match run(cli, &styler) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            if let Ok(message) =
                MessageCatalog::builtin().render(ids::UNKNOWN_ERROR, &RenderOptions::new())
            {
                eprintln!("{}", styler.style_message(&message));
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, styler: &Styler) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let log_file = cli
        .log_file
        .as_ref()
        .map(std::fs::File::create)
        .transpose()?;
    cbf::logger::init(log_file);

    let catalog = MessageCatalog::builtin();
    match cli.command {
        Commands::Keys(ref args) => keys::run(args),
        Commands::Render(ref args) => render::run(args, &catalog, styler),
        Commands::Normalize(ref args) => Ok(normalize::run(args)),
        Commands::CheckName(ref args) => check_name::run(args, &catalog, styler),
    }
}
