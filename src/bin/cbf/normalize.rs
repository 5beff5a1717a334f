use std::process::ExitCode;

use clap::Args;

use cbf::keys::KEY_SEPARATOR;
use cbf::normalize::{replace_whitespace, undocumented_choice};

#[derive(Args, Debug)]
pub struct NormalizeArgs {
    text: String,

    /// Replacement for each run of whitespace
    #[arg(long, default_value_t = KEY_SEPARATOR.to_string())]
    separator: String,

    /// Strip a `→ description` suffix instead
    #[arg(long)]
    undocument: bool,
}

pub fn run(args: &NormalizeArgs) -> ExitCode {
    if args.undocument {
        println!("{}", undocumented_choice(&args.text));
    } else {
        println!("{}", replace_whitespace(&args.text, &args.separator));
    }
    ExitCode::SUCCESS
}
