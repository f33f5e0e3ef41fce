use std::env;

use tapedeck::app::{LoadOutcome, Session};
use tapedeck::prefs::{self, Preferences};

mod args;
mod listing;
mod settings;

use args::Args;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::load_settings();
    settings::init_logging(&settings.log);

    let args = Args::parse(env::args().skip(1))?;
    apply_theme(&args);

    let mut session = Session::new(&settings);
    if args.shuffle && !session.shuffle() {
        session.toggle_shuffle();
    }

    let selection = args.selection(&env::current_dir()?);
    match session.load(selection) {
        LoadOutcome::Loaded { .. } => {}
        LoadOutcome::Empty => {
            println!("No playable files found.");
            return Ok(());
        }
        LoadOutcome::Denied(reason) => {
            eprintln!("tapedeck: cannot open folder: {reason}");
            return Ok(());
        }
        LoadOutcome::Cancelled => return Ok(()),
    }

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    rt.block_on(session.enrichment());

    let rows = match args.filter.as_deref() {
        Some(query) => session.search(query),
        None => session.order().to_vec(),
    };

    for (position, index) in rows.into_iter().enumerate() {
        let Some(track) = session.track(index) else {
            continue;
        };
        println!("{}", listing::format_row(position, &track));
        if args.covers {
            if let Some(cover) = &track.cover {
                println!("      {}", cover.data_uri());
            }
        }
    }

    Ok(())
}

fn apply_theme(args: &Args) {
    let Some(path) = prefs::default_prefs_path() else {
        return;
    };

    let mut preferences = Preferences::load_or_default(&path);
    if let Some(theme) = args.theme {
        if theme != preferences.theme {
            preferences.theme = theme;
            if let Err(e) = preferences.save(&path) {
                tracing::warn!("Could not save preferences: {}", e);
            }
        }
    }
    tracing::debug!("Theme: {:?}", preferences.theme);
}
