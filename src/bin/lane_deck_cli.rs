use clap::Parser;
use lane_deck::core::{DateRange, LaneFilter};
use lane_deck::utils::logger;
use lane_deck::{DashboardClient, LaneListModel, SeriesState, SeriesViewModel};

#[derive(Debug, Parser)]
#[command(name = "lane-deck-cli")]
#[command(about = "Terminal client for the lane dashboard")]
struct Cli {
    #[arg(long, default_value = "http://127.0.0.1:3000")]
    server: String,

    #[arg(long, help = "Filter lanes by origin substring")]
    origin: Option<String>,

    #[arg(long, help = "Filter lanes by destination substring")]
    destination: Option<String>,

    #[arg(long, help = "Show the daily series for this lane id")]
    lane: Option<String>,

    #[arg(long, help = "Series lower bound, ISO date (inclusive)")]
    from: Option<String>,

    #[arg(long, help = "Series upper bound, ISO date (inclusive)")]
    to: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init_logger(cli.verbose);

    let client = match DashboardClient::new(&cli.server) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    match &cli.lane {
        Some(lane_id) => show_series(&client, lane_id, &cli).await,
        None => list_lanes(&client, &cli).await,
    }

    Ok(())
}

async fn list_lanes(client: &DashboardClient, cli: &Cli) {
    let filter = LaneFilter::new(cli.origin.clone(), cli.destination.clone());

    let mut list = LaneListModel::new();
    list.refresh_and_fetch(client, &filter).await;

    if let Some(error) = list.error() {
        eprintln!("❌ {}", error);
        std::process::exit(1);
    }

    if list.lanes().is_empty() {
        println!("No lanes found.");
        return;
    }

    for lane in list.lanes() {
        println!(
            "{:<6} {} → {} [{:?}]  ${:.2}/ton  {:.0} tons  {} days  {:.1}% reliable",
            lane.id,
            lane.origin,
            lane.destination,
            lane.mode,
            lane.cost_per_ton,
            lane.volume_tons,
            lane.lead_days,
            lane.reliability * 100.0
        );
    }
}

async fn show_series(client: &DashboardClient, lane_id: &str, cli: &Cli) {
    let range = DateRange::parse(cli.from.as_deref(), cli.to.as_deref());

    let mut view = SeriesViewModel::new();
    view.select_and_fetch(client, lane_id, &range).await;

    match view.state() {
        SeriesState::Loaded { points, .. } => {
            if points.is_empty() {
                println!("No data points in the requested range.");
                return;
            }
            println!("Series for lane {}:", lane_id);
            for point in points {
                println!(
                    "{}  {:>3} shipments  ${:.2}/ton  {:.1} lead days  {:.1}% on time",
                    point.date,
                    point.shipments,
                    point.avg_cost_per_ton,
                    point.avg_lead_days,
                    point.on_time_rate * 100.0
                );
            }
        }
        SeriesState::Unavailable { message, .. } => {
            println!("{}", message);
        }
        SeriesState::Failed { message, .. } => {
            eprintln!("❌ {}", message);
            std::process::exit(1);
        }
        // select_and_fetch always resolves to a terminal state.
        SeriesState::Idle | SeriesState::Loading { .. } => {}
    }
}
