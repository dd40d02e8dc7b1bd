// NOTE: trailhound Architecture Rationale
//
// Why a thin client over a hosted backend (not a local database)?
// - The record service owns persistence, credentials, and row-level
//   security; duplicating any of that client-side would drift immediately
// - Every command fetches complete row sets and derives what it shows
//   locally in trailhound-engine, so views never depend on server-side
//   aggregation support
//
// Why namespaced subcommands (not flat)?
// - auth/dog groups keep --help discoverable as commands accumulate
// - Example: `dog stats RX-07` vs `dog list` instead of flat `stats-dog`
//
// Why guard before fetch?
// - Data commands check the stored session before any network I/O, so an
//   unauthenticated run fails in milliseconds with a hint, not a 401

mod args;
mod commands;
mod handlers;
mod output;

pub use args::{AuthCommand, Cli, Commands, DogCommand, OutputFormat, RankBy};
pub use commands::run;
