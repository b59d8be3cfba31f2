use robot_ga::{Configuration, bootstrap, models::Metrics, render};
use tracing::Level;

// Runs one simulation from the defaults plus ROBOT_GA_* overrides and prints the report.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let config = Configuration::from_env()?;
    let mut service = bootstrap(&config)?;

    let mut metrics = Metrics::new();
    let outcome = service.evolve(&mut metrics)?;
    tracing::info!(
        generations_completed = outcome.generations_completed,
        termination = ?outcome.termination,
        final_position = %service.robot().position(),
        "Simulation finished"
    );

    let report = render(&metrics, service.robot());
    println!("{report}");

    if let Some(path) = &config.report_path {
        report.write_json(path)?;
        tracing::info!(path = %path.display(), "Report written");
    }

    Ok(())
}
