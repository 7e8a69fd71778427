use clap::{Parser, Subcommand};
use std::path::PathBuf;
use stylemigrate_lib::pipeline::{steps, RunOptions};

const STYLEMIGRATE_INTRO: &str = r#"
     _         _                 _                 _
 ___| |_ _   _| | ___ _ __ ___ (_) __ _ _ __ __ _| |_ ___
/ __| __| | | | |/ _ \ '_ ` _ \| |/ _` | '__/ _` | __/ _ \
\__ \ |_| |_| | |  __/ | | | | | | (_| | | | (_| | ||  __/
|___/\__|\__, |_|\___|_| |_| |_|_|\__, |_|  \__,_|\__\___|
         |___/                    |___/

    Bootstrap 3 -> Bootstrap 5 markup and stylesheet migration
"#;

#[derive(Parser)]
#[command(name = "stylemigrate")]
#[command(about = "Migrate hand-written Bootstrap 3 markup and CSS to Bootstrap 5")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Do not print the banner.
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Swap CDN links and rename classes, data attributes and spacing in the HTML file.
    Markup {
        /// HTML file, rewritten in place.
        html: PathBuf,

        #[arg(long)]
        dry_run: bool,
    },
    /// Remove stylesheet utilities Bootstrap 5 already provides.
    Cleanup {
        /// CSS file, rewritten in place.
        css: PathBuf,

        #[arg(long)]
        dry_run: bool,
    },
    /// Replace custom classes with Bootstrap 5 utilities, then prune unused rules.
    Consolidate {
        html: PathBuf,
        css: PathBuf,

        #[arg(long)]
        dry_run: bool,
    },
    /// Delete single-class CSS rules the HTML never references.
    Prune {
        html: PathBuf,
        css: PathBuf,

        #[arg(long)]
        dry_run: bool,
    },
    /// List Bootstrap 3 era classes still used in class attributes.
    Audit { html: PathBuf },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // parse the args given in terminal
    let args: Args = Args::parse();
    if !args.quiet {
        println!("{}", STYLEMIGRATE_INTRO);
    }

    let result = match &args.command {
        Command::Markup { html, dry_run } => {
            steps::migrate_markup_file(html, RunOptions { dry_run: *dry_run })
        }
        Command::Cleanup { css, dry_run } => {
            steps::cleanup_stylesheet_file(css, RunOptions { dry_run: *dry_run })
        }
        Command::Consolidate { html, css, dry_run } => {
            steps::consolidate_files(html, css, RunOptions { dry_run: *dry_run })
        }
        Command::Prune { html, css, dry_run } => {
            steps::prune_files(html, css, RunOptions { dry_run: *dry_run })
        }
        Command::Audit { html } => steps::audit_markup_file(html),
    };

    match result {
        Ok(report) => print!("{}", report),
        Err(e) => {
            log::debug!("{:?}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
