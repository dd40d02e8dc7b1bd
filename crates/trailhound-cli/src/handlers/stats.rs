use anyhow::Result;
use owo_colors::OwoColorize;
use std::collections::HashMap;
use uuid::Uuid;

use trailhound_client::Backend;
use trailhound_engine::Report;
use trailhound_types::Dog;

use crate::args::{OutputFormat, RankBy};
use crate::output::{color_enabled, format_condition_series};

pub fn handle(backend: &Backend, rank_by: RankBy, format: OutputFormat) -> Result<()> {
    let dogs = backend.list_dogs()?;
    let sessions = backend.list_sessions(None)?;

    let Some(report) = Report::build(&sessions) else {
        if format == OutputFormat::Json {
            println!("{}", serde_json::json!({ "report": null }));
        } else {
            println!("No sessions recorded");
        }
        return Ok(());
    };

    if format == OutputFormat::Json {
        let codes: HashMap<Uuid, &str> = dogs
            .iter()
            .map(|d| (d.id, d.dog_code.as_str()))
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "report": report,
                "dog_codes": codes,
            }))?
        );
        return Ok(());
    }

    let by_id: HashMap<Uuid, &Dog> = dogs.iter().map(|d| (d.id, d)).collect();
    let color = color_enabled();

    let headline = format!(
        "{} sessions across {} dogs — {} success / {} fail ({}%)",
        report.global.total_sessions,
        report.global.distinct_dogs,
        report.global.success,
        report.global.fail,
        report.global.success_rate_pct,
    );
    if color {
        println!("{}\n", headline.bold());
    } else {
        println!("{}\n", headline);
    }

    let rank_heading = match rank_by {
        RankBy::Count => "Dogs by success count:",
        RankBy::Rate => "Dogs by success rate:",
    };
    println!("{}", rank_heading);
    for (position, tally) in report.ranked_dogs(rank_by.into()).iter().enumerate() {
        let label = match by_id.get(&tally.dog_id) {
            Some(dog) => format!("{} ({})", dog.name, dog.dog_code),
            None => tally.dog_id.to_string(),
        };
        println!(
            "  {:>2}. {:<28} total {:>4}  success {:>4} ({:>3}%)  fail {:>4} ({:>3}%)",
            position + 1,
            label,
            tally.total,
            tally.success,
            tally.success_rate_pct,
            tally.fail,
            tally.fail_rate_pct,
        );
    }
    println!();

    println!("By scent:");
    for scent in &report.per_scent {
        println!(
            "  {:<16} total {:>4}  success {:>4} ({:>3}%)",
            scent.scent, scent.total, scent.success, scent.success_rate_pct,
        );
    }
    println!();

    for (key, groups) in &report.per_condition {
        let heading = format!("Success rate by {}", key.label());
        for line in format_condition_series(&heading, groups, color) {
            println!("{}", line);
        }
        println!();
    }

    Ok(())
}
