use anyhow::Result;
use std::path::Path;

use trailhound_client::{AuthSession, Backend, Config, resolve_data_dir};

use super::args::{AuthCommand, Cli, Commands, DogCommand};
use super::handlers;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;

    let Some(command) = cli.command else {
        show_guidance(&data_dir);
        return Ok(());
    };

    match command {
        Commands::Init {
            backend_url,
            api_key,
        } => handlers::init::handle(&data_dir, backend_url, api_key),

        Commands::Auth { command } => match command {
            AuthCommand::Login { email, password } => {
                handlers::auth::login(&data_dir, &email, password)
            }
            AuthCommand::Logout => handlers::auth::logout(&data_dir),
            AuthCommand::Status => handlers::auth::status(&data_dir),
        },

        Commands::Dog { command } => {
            let backend = connect(&data_dir)?;
            match command {
                DogCommand::List => handlers::dog_list::handle(&backend, cli.format),
                DogCommand::Add {
                    dog_code,
                    name,
                    breed,
                    sex,
                    birthdate,
                    notes,
                    inactive,
                } => {
                    let dog = trailhound_types::NewDog {
                        dog_code,
                        name,
                        breed,
                        sex,
                        birthdate,
                        notes,
                        active: !inactive,
                    };
                    handlers::dog_add::handle(&backend, dog, cli.format)
                }
                DogCommand::Stats { dog_code } => {
                    handlers::dog_stats::handle(&backend, &dog_code, cli.format)
                }
            }
        }

        Commands::Stats { rank_by } => {
            let backend = connect(&data_dir)?;
            handlers::stats::handle(&backend, rank_by, cli.format)
        }
    }
}

/// Build the backend client from stored config plus whatever session is on
/// disk. Handlers enforce authentication; this only assembles state.
fn connect(data_dir: &Path) -> Result<Backend> {
    let config = Config::load_from(&Config::path_in(data_dir))?;
    let session = AuthSession::load_from(&AuthSession::path_in(data_dir))?;
    Ok(Backend::new(&config)?.with_session(session))
}

fn show_guidance(data_dir: &Path) {
    let config_exists = Config::path_in(data_dir).exists();
    let signed_in = AuthSession::path_in(data_dir).exists();

    println!("trailhound - dog-training records and session statistics\n");

    if !config_exists {
        println!("Get started:");
        println!("  trailhound init --backend-url <URL> --api-key <KEY>");
        println!("  trailhound auth login --email <EMAIL>\n");
    } else if !signed_in {
        println!("You are not signed in:");
        println!("  trailhound auth login --email <EMAIL>\n");
    } else {
        println!("Quick commands:");
        println!("  trailhound dog list               # All dogs, newest first");
        println!("  trailhound dog stats <CODE>       # One dog's session stats");
        println!("  trailhound stats                  # Aggregate stats across dogs\n");
    }

    println!("For more commands:");
    println!("  trailhound --help");
}
