//! # camp-seed — Sample Data Loader
//!
//! Fills the registry database with a handful of activities, campers, and
//! signups for local development. Activities have no write endpoint, so
//! this is how they get into a fresh database.

use anyhow::Context;
use camp_api::db;
use camp_core::{NewActivity, NewCamper, NewSignup};
use clap::Parser;

/// Load sample activities, campers, and signups.
#[derive(Parser, Debug)]
#[command(name = "camp-seed", version, about)]
struct Cli {
    /// Database to seed.
    #[arg(long, env = "DATABASE_URL", default_value = camp_api::state::DEFAULT_DATABASE_URL)]
    database_url: String,

    /// Delete existing rows before seeding.
    #[arg(long)]
    reset: bool,
}

const ACTIVITIES: &[(&str, i64)] = &[
    ("Archery", 2),
    ("Canoeing", 3),
    ("Hiking", 1),
    ("Rock Climbing", 5),
    ("Swimming", 2),
];

const CAMPERS: &[(&str, i64)] = &[
    ("Alex", 12),
    ("Caitlin", 9),
    ("Jordan", 15),
    ("Priya", 17),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let pool = db::init_pool(&cli.database_url)
        .await
        .with_context(|| format!("failed to open {}", cli.database_url))?;

    if cli.reset {
        db::reset(&pool).await.context("failed to clear tables")?;
    }

    let mut activities = Vec::with_capacity(ACTIVITIES.len());
    for (name, difficulty) in ACTIVITIES {
        let activity = db::activities::insert(&pool, &NewActivity::new(*name, *difficulty))
            .await
            .with_context(|| format!("failed to insert activity {name}"))?;
        activities.push(activity);
    }

    let mut campers = Vec::with_capacity(CAMPERS.len());
    for (name, age) in CAMPERS {
        let draft = NewCamper::try_new(Some(name.to_string()), Some(*age))?;
        let camper = db::campers::insert(&pool, &draft)
            .await
            .with_context(|| format!("failed to insert camper {name}"))?;
        campers.push(camper);
    }

    // Each camper takes two consecutive activities, starting at 9:00.
    let mut signups = 0usize;
    for (i, camper) in campers.iter().enumerate() {
        for offset in 0..2 {
            let activity = &activities[(i + offset) % activities.len()];
            let hour = 9 + (i + offset * 3) as i64;
            let draft = NewSignup::try_new(camper.id, activity.id, hour)?;
            db::signups::insert(&pool, &draft)
                .await
                .with_context(|| format!("failed to sign up camper {}", camper.id))?;
            signups += 1;
        }
    }

    tracing::info!(
        activities = activities.len(),
        campers = campers.len(),
        signups,
        "seed complete"
    );
    Ok(())
}
