use anyhow::{Context, Result};
use golf_outing::args::{self, Command, OutputFormat};
use golf_outing::config::{AppConfig, load_config, open_storage};
use golf_outing::error::OutingError;
use golf_outing::mvu::Outing;
use golf_outing::view::{ScoreboardSnapshot, render_index_template, render_text};
use std::fs;
use std::path::Path;
use tracing::warn;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn main() -> Result<()> {
    init_logger();
    let cli = args::args_checks();
    let config = load_config(&cli)?;

    if let Command::Teams = cli.command {
        for pairing in config.course.roster() {
            println!("{}", pairing.label());
        }
        return Ok(());
    }

    let storage = open_storage(&config)?;
    let mut outing = Outing::open(config.course.clone(), storage.as_ref())
        .with_context(|| format!("load saved outing from {}", config.store.display()))?;

    match cli.command {
        Command::Submit { team, holes } => {
            outing.submit_score(storage.as_ref(), &team, holes.as_slice())?;
            print!("{}", render_text(&outing.scoreboard()));
        }
        Command::Remove { team } => match outing.remove_score(storage.as_ref(), &team) {
            Ok(()) => print!("{}", render_text(&outing.scoreboard())),
            Err(e @ OutingError::NotFound(_)) => {
                warn!(error = %e, "nothing removed");
                println!("{e}");
            }
            Err(e) => return Err(e.into()),
        },
        Command::Ctp { hole, player } => {
            outing.set_closest_to_pin(storage.as_ref(), hole, &player)?;
            print!("{}", render_text(&outing.scoreboard()));
        }
        Command::Show { format, output } => {
            let rendered = render(&config, format, &outing.scoreboard())?;
            write_output(output.as_deref(), &rendered)?;
        }
        Command::Teams => {}
    }
    Ok(())
}

fn render(config: &AppConfig, format: OutputFormat, snapshot: &ScoreboardSnapshot) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => render_text(snapshot),
        OutputFormat::Json => {
            serde_json::to_string_pretty(snapshot).context("serialize scoreboard")?
        }
        OutputFormat::Html => render_index_template(&config.title, snapshot).into_string(),
    })
}

fn write_output(output: Option<&Path>, rendered: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, rendered).with_context(|| format!("write {}", path.display()))
        }
        None => {
            print!("{rendered}");
            Ok(())
        }
    }
}
