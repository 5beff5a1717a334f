use std::process::ExitCode;

use clap::Args;

use cbf::keys::SelectionKey;

#[derive(Args, Debug)]
pub struct KeysArgs {
    /// Menu choices joined by `:`
    selection: String,
}

/// Print the submenu keys of a selection, root first, then its target.
///
/// # Errors
///
/// Returns an error if the selection has an empty choice.
pub fn run(args: &KeysArgs) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let selection = SelectionKey::parse(&args.selection)?;
    for key in selection.option_keys() {
        println!("{key}");
    }
    if let Some(target) = selection.target() {
        println!("target: {target}");
    }
    Ok(ExitCode::SUCCESS)
}
