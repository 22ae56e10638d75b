// ABOUTME: CLI entrypoint for notekeep command
// ABOUTME: Handles error exit codes and command dispatch

use clap::Parser;
use notekeep::{
    cli::{Cli, Commands},
    settings::{resolve_endpoint, Settings},
    ClientConfig, Error, Note, ReqwestTransport, Result,
};
use std::io::Read;
use std::sync::Arc;
use std::time::Duration;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("notekeep: [E{}] {}", e.exit_code(), e);
        std::process::exit(e.exit_code());
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load(cli.config.as_deref())?;
    let timeout = cli
        .timeout_secs
        .map(Duration::from_secs)
        .unwrap_or_else(|| settings.timeout());
    let endpoint = resolve_endpoint(cli.endpoint.clone(), &settings)?;

    let transport = Arc::new(ReqwestTransport::new(timeout)?);
    let config = Arc::new(ClientConfig::new(transport, &endpoint)?);

    match cli.command() {
        Commands::Ping => {
            println!("{} is reachable", config.endpoint());
        }
        Commands::Read { id, password } => {
            let mut note = Note::new(config);
            note.set_id(id)?;
            note.set_password(password)?;
            note.refresh()?;
            println!("{}", note.data());
        }
        Commands::Create { id, password, note: text } => {
            let mut note = Note::new(config);
            if let Some(id) = id {
                note.set_id(id)?;
            }
            note.set_password(password)?;
            note.set_data(note_text(text)?)?;
            note.publish()?;
            println!("{}", note.id());
        }
        Commands::Update { id, password, note: text } => {
            let text = note_text(text)?;
            let mut note = Note::new(config);
            note.set_id(id)?;
            note.set_password(password)?;
            // Pull first so the handle targets the update route.
            note.refresh()?;
            note.set_data(text)?;
            note.publish()?;
            println!("{}", note.id());
        }
    }

    Ok(())
}

fn note_text(arg: Option<String>) -> Result<String> {
    match arg {
        Some(text) => Ok(text),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            if buf.is_empty() {
                return Err(Error::Validation("note text is empty".into()));
            }
            Ok(buf)
        }
    }
}
