use std::sync::Arc;

use clap::Parser;
use mdict_api::MdictClient;
use tracing_subscriber::EnvFilter;

pub mod controller;
pub mod events;
pub mod io;
pub mod profile;
pub mod screen;
pub mod state;
pub mod ui;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::state::AppState;

#[derive(Parser, Debug)]
#[command(name = "mdict")]
#[command(author, version, about = "Terminal client for a Flask-Mdict server", long_about = None)]
struct Args {
    /// Server origin, overrides MDICT_BASE_URL and the profile
    #[arg(long)]
    base_url: Option<String>,

    /// Profile to load from the profiles directory
    #[arg(short, long, default_value = "main")]
    profile: String,

    /// Write the current defaults as a new profile and exit
    #[arg(long, value_name = "NAME")]
    new_profile: Option<String>,

    /// Log as JSON lines
    #[arg(long, default_value = "false")]
    json: bool,
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.with_ansi(atty::is(atty::Stream::Stderr)).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    init_tracing(args.json);

    if let Some(name) = args.new_profile.as_deref() {
        let path = profile::add_profile_from_default(name)?;
        println!("{}", path.display());
        return Ok(());
    }

    let mut config = profile::load_user_profile(&args.profile)?;
    if let Some(base_url) = args.base_url {
        config.network.base_url = base_url;
    }

    let api = Arc::new(MdictClient::new(config.network.origin()));
    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state);

    let tasks = controller.spawn_tasks(api).await;
    let outcome = controller.supervise(tasks).await;

    // the blocking stdin reader would otherwise hold the runtime open
    std::process::exit(if outcome.is_ok() { 0 } else { 1 });
}
