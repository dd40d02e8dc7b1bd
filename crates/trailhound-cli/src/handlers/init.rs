use anyhow::Result;
use std::path::Path;

use trailhound_client::Config;

pub fn handle(data_dir: &Path, backend_url: String, api_key: String) -> Result<()> {
    let config = Config {
        backend_url,
        api_key,
    };
    let path = Config::path_in(data_dir);
    config.save_to(&path)?;

    println!("Wrote {}", path.display());
    println!("Next: trailhound auth login --email <EMAIL>");
    Ok(())
}
