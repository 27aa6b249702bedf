use clap::Args;
use serde_json::Value;

use heloc_core::presets;

/// Arguments for listing presets
#[derive(Args)]
pub struct PresetsArgs {
    /// Show only the preset with this exact name
    #[arg(long)]
    pub name: Option<String>,
}

pub fn run_presets(args: PresetsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let catalog = presets::list_presets();
    match args.name {
        Some(name) => {
            let preset = catalog
                .into_iter()
                .find(|p| p.name == name)
                .ok_or_else(|| format!("Unknown preset '{}'", name))?;
            Ok(serde_json::to_value(preset)?)
        }
        None => Ok(serde_json::to_value(catalog)?),
    }
}
