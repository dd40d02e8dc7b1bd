use anyhow::{Context, Result, bail};
use std::path::Path;

use trailhound_client::{AuthSession, Backend, Config};

pub fn login(data_dir: &Path, email: &str, password: Option<String>) -> Result<()> {
    let password = match password {
        Some(p) => p,
        None => std::env::var("TRAILHOUND_PASSWORD")
            .context("No password given; pass --password or set TRAILHOUND_PASSWORD")?,
    };

    let config = Config::load_from(&Config::path_in(data_dir))?;
    let backend = Backend::new(&config)?;
    let session = backend.sign_in(email, &password)?;

    session.save_to(&AuthSession::path_in(data_dir))?;
    println!("Signed in as {}", session.email);
    Ok(())
}

pub fn logout(data_dir: &Path) -> Result<()> {
    if AuthSession::delete_at(&AuthSession::path_in(data_dir))? {
        println!("Signed out");
    } else {
        println!("No stored session");
    }
    Ok(())
}

pub fn status(data_dir: &Path) -> Result<()> {
    match AuthSession::load_from(&AuthSession::path_in(data_dir))? {
        Some(session) => {
            println!("Signed in as {}", session.email);
            println!(
                "Session obtained {}",
                session.obtained_at.format("%Y-%m-%d %H:%M UTC")
            );
            Ok(())
        }
        None => bail!("Not signed in; run `trailhound auth login`"),
    }
}
