use anyhow::Result;
use owo_colors::OwoColorize;

use trailhound_client::Backend;
use trailhound_types::NewDog;

use crate::args::OutputFormat;
use crate::output::color_enabled;

pub fn handle(backend: &Backend, dog: NewDog, format: OutputFormat) -> Result<()> {
    let created = backend.create_dog(&dog)?;

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&created)?);
        return Ok(());
    }

    let line = format!("Registered {} ({})", created.name, created.dog_code);
    if color_enabled() {
        println!("{}", line.green());
    } else {
        println!("{}", line);
    }
    Ok(())
}
