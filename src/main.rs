use league_matchups::config::{Mode, RunConfig};
use league_matchups::demo::demo_teams;
use league_matchups::display::{print_schedule, write_schedule_to_file};
use league_matchups::parser::load_teams;
use league_matchups::schedule::{build_slot_universe, schedule_round_robin, TeamOrder};
use league_matchups::{logging, web};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();
    let config = RunConfig::from_env();

    let roster = match config.mode {
        Mode::Web { port } => {
            println!("Starting web server on port {}...", port);
            println!("Access the API at http://localhost:{}/api/demo", port);

            web::start_server(port, config.admin_password, config.seed).await?;
            return Ok(());
        }
        Mode::Cli { roster } => roster,
    };

    let slots = build_slot_universe();
    let teams = match &roster {
        Some(path) => {
            info!(path = %path.display(), "loading teams from CSV");
            load_teams(path, &slots)?
        }
        None => {
            info!("no roster supplied, using the demo league");
            demo_teams(slots.len() as u32)?
        }
    };
    println!("Loaded {} teams across {} slots", teams.len(), slots.len());

    let schedule = schedule_round_robin(slots, teams, &TeamOrder::Shuffled(config.seed))?;
    print_schedule(&schedule);

    write_schedule_to_file(&schedule, &config.output_path)?;
    println!("\nSchedule saved to {}", config.output_path.display());

    Ok(())
}
