mod cli;

use clap::Parser;
use classmere::config::Config;
use classmere::{Course, CourseList};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut courses = CourseList::default();
    for path in cli.catalog_paths(&config)? {
        courses.extend(cli::load(&path)?);
    }

    info!(
        "Decoded {} courses ({} records skipped)",
        courses.len(),
        courses.skipped()
    );

    if cli.json {
        let courses: Vec<Course> = courses.into_vec();
        println!("{}", serde_json::to_string_pretty(&courses)?);
    } else {
        for course in &courses {
            println!("{}", cli::summary_line(course));
        }
    }

    Ok(())
}
