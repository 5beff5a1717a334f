use std::process::ExitCode;

use clap::Args;

use cbf::messages::style::Styler;
use cbf::messages::{MessageCatalog, RenderOptions};

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Template id, e.g. `listScripts`
    id: String,

    /// Placeholder value as `name=value`
    #[arg(long = "set", value_parser = parse_pair)]
    values: Vec<(String, String)>,

    /// List placeholder as `name=a,b,c`
    #[arg(long = "list", value_parser = parse_pair)]
    lists: Vec<(String, String)>,
}

fn parse_pair(arg: &str) -> Result<(String, String), String> {
    arg.split_once('=')
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected name=value, got '{arg}'"))
}

/// Render a template to stdout.
///
/// # Errors
///
/// Returns an error if the template is unknown or a placeholder has no value.
pub fn run(
    args: &RenderArgs,
    catalog: &MessageCatalog,
    styler: &Styler,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let mut options = RenderOptions::new();
    for (name, value) in &args.values {
        options.set(name, value.as_str());
    }
    for (name, items) in &args.lists {
        for item in items.split(',').filter(|item| !item.is_empty()) {
            options.push(name, item);
        }
    }
    let message = catalog.render(&args.id, &options)?;
    println!("{}", styler.style_message(&message));
    Ok(ExitCode::SUCCESS)
}
