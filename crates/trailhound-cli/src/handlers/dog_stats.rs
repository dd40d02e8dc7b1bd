use anyhow::Result;
use owo_colors::OwoColorize;

use trailhound_client::Backend;
use trailhound_engine::DogReport;

use crate::args::OutputFormat;
use crate::output::{color_enabled, format_distribution};

pub fn handle(backend: &Backend, dog_code: &str, format: OutputFormat) -> Result<()> {
    let dog = backend.find_dog(dog_code)?;
    let sessions = backend.list_sessions(Some(dog.id))?;

    let Some(report) = DogReport::build(&sessions) else {
        if format == OutputFormat::Json {
            println!("{}", serde_json::json!({ "dog": dog, "report": null }));
        } else {
            println!("No sessions recorded for {} ({})", dog.name, dog.dog_code);
        }
        return Ok(());
    };

    if format == OutputFormat::Json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "dog": dog,
                "report": report,
            }))?
        );
        return Ok(());
    }

    let color = color_enabled();
    let headline = format!(
        "{} ({}) — {} sessions, {} success / {} fail ({}%)",
        dog.name,
        dog.dog_code,
        report.total,
        report.success,
        report.fail,
        report.success_rate_pct,
    );
    if color {
        println!("{}\n", headline.bold());
    } else {
        println!("{}\n", headline);
    }

    for line in format_distribution("Duration (s)", &report.duration, color) {
        println!("{}", line);
    }
    println!();

    for (key, distribution) in &report.conditions {
        for line in format_distribution(key.label(), distribution, color) {
            println!("{}", line);
        }
        println!();
    }

    Ok(())
}
