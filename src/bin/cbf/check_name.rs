use std::process::ExitCode;

use clap::Args;
use log::debug;

use cbf::messages::style::Styler;
use cbf::messages::{MessageCatalog, RenderOptions, ids};
use cbf::predicates::{is_valid_json_file_name, is_valid_yaml_file_name};

#[derive(Args, Debug)]
pub struct CheckNameArgs {
    file: String,

    /// Expect a JSON file instead of YAML
    #[arg(long)]
    json: bool,
}

/// Check the extension of a scripts file name.
///
/// # Errors
///
/// Returns an error if the rejection message cannot be rendered.
pub fn run(
    args: &CheckNameArgs,
    catalog: &MessageCatalog,
    styler: &Styler,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let (valid, id, placeholder) = if args.json {
        (
            is_valid_json_file_name(&args.file),
            ids::INVALID_JSON_FILE_NAME,
            "jsonFileName",
        )
    } else {
        (
            is_valid_yaml_file_name(&args.file),
            ids::INVALID_YAML_FILE_NAME,
            "yamlFileName",
        )
    };
    debug!("File name '{}' valid: {valid}", args.file);
    if valid {
        return Ok(ExitCode::SUCCESS);
    }
    let options = RenderOptions::new().with(placeholder, args.file.as_str());
    eprintln!("{}", styler.style_message(&catalog.render(id, &options)?));
    Ok(ExitCode::FAILURE)
}
