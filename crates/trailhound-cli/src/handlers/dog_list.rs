use anyhow::Result;
use owo_colors::OwoColorize;

use trailhound_client::Backend;
use trailhound_types::Dog;

use crate::args::OutputFormat;
use crate::output::color_enabled;

pub fn handle(backend: &Backend, format: OutputFormat) -> Result<()> {
    let dogs = backend.list_dogs()?;

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&dogs)?);
        return Ok(());
    }

    if dogs.is_empty() {
        println!("No dogs recorded");
        return Ok(());
    }

    print_dogs_table(&dogs, color_enabled());
    Ok(())
}

fn print_dogs_table(dogs: &[Dog], color: bool) {
    let code_width = dogs
        .iter()
        .map(|d| d.dog_code.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);
    let name_width = dogs
        .iter()
        .map(|d| d.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let header = format!(
        "{:<code_width$}  {:<name_width$}  {:<18}  {:<8}  REGISTERED",
        "CODE", "NAME", "BREED", "STATUS",
    );
    if color {
        println!("{}", header.bright_black());
    } else {
        println!("{}", header);
    }

    for dog in dogs {
        let breed = dog.breed.as_deref().unwrap_or("-");
        // Pad before coloring so ANSI codes do not skew the column.
        let status = format!("{:<8}", if dog.active { "active" } else { "inactive" });
        let status_display = if !color {
            status
        } else if dog.active {
            status.green().to_string()
        } else {
            status.red().to_string()
        };

        println!(
            "{:<code_width$}  {:<name_width$}  {:<18}  {}  {}",
            dog.dog_code,
            dog.name,
            breed,
            status_display,
            dog.created_at.format("%Y-%m-%d"),
        );
    }
}
