use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use church_locator::catalog::Catalog;
use church_locator::config::Settings;
use church_locator::geo::Coordinate;
use church_locator::location::{
    FixedPosition, IpGeolocator, LocationResolver, NoPosition, Position, PositionProvider,
};
use church_locator::maps::MapLinks;
use church_locator::region::{group_by_region, Region};
use church_locator::server::{NearestItem, NearestResponse};

/// Church directory — find the churches nearest to you.
///
/// Examples:
///   churches nearest
///   churches nearest --lat 10.7769 --lon 106.7009 --limit 3
///   churches list
///   churches show 1
///   churches serve --port 8080
#[derive(Parser)]
#[command(name = "churches", version, about, long_about = None)]
struct Cli {
    /// Catalog JSON file (defaults to the bundled dataset).
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Settings file (defaults to ~/.church_locator/config.json).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rank churches by distance from your position.
    Nearest {
        /// Latitude (-90 to 90). Skips geolocation.
        #[arg(long, allow_hyphen_values = true, requires = "lon")]
        lat: Option<f64>,

        /// Longitude (-180 to 180). Skips geolocation.
        #[arg(long, allow_hyphen_values = true, requires = "lat")]
        lon: Option<f64>,

        /// Number of results. Defaults to the configured limit.
        #[arg(long, short = 'n', allow_hyphen_values = true)]
        limit: Option<i64>,

        /// Do not contact the geolocation service; use the default location.
        #[arg(long)]
        offline: bool,

        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// List every church, grouped by region.
    List {
        #[arg(long)]
        json: bool,
    },

    /// Show one church with its map and directions links.
    Show {
        id: i64,

        #[arg(long)]
        json: bool,
    },

    /// Serve the directory over HTTP.
    Serve {
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        #[arg(long, short = 'p', default_value_t = 3000)]
        port: u16,
    },
}

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = match cli.command {
        Command::Serve { .. } => "info",
        _ => "warn",
    };
    init_tracing(default_level);

    // ── Settings and catalog ────────────────────────────────────

    let settings = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    }
    .context("Failed to load settings")?;

    let catalog_path = cli.catalog.as_ref().or(settings.catalog_path.as_ref());
    let catalog = Catalog::load(catalog_path.map(|p| p.as_path())).context("Failed to load catalog")?;

    let resolver = LocationResolver::new(settings.fallback);

    match cli.command {
        Command::Nearest { lat, lon, limit, offline, json } => {
            let position = resolve_position(&settings, &resolver, lat, lon, offline)?;
            let limit = limit.unwrap_or(settings.default_limit);
            print_nearest(&catalog, &position, limit, json)
        }
        Command::List { json } => print_list(&catalog, json),
        Command::Show { id, json } => print_show(&catalog, id, json),
        Command::Serve { host, port } => {
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(church_locator::server::start(
                &host,
                port,
                Arc::new(catalog),
                resolver,
                settings.default_limit,
            ))?;
            Ok(())
        }
    }
}

fn resolve_position(
    settings: &Settings,
    resolver: &LocationResolver,
    lat: Option<f64>,
    lon: Option<f64>,
    offline: bool,
) -> Result<Position> {
    let mut provider: Box<dyn PositionProvider> = match (lat, lon) {
        (Some(lat), Some(lon)) => {
            let coordinate = Coordinate::new(lat, lon);
            if !coordinate.is_valid() {
                bail!("Invalid coordinates. Lat: -90..90, Lon: -180..180");
            }
            Box::new(FixedPosition(coordinate))
        }
        _ if offline || settings.offline => Box::new(NoPosition),
        _ => Box::new(IpGeolocator::new(settings.geolocation_url.clone())),
    };
    Ok(resolver.locate(&mut *provider))
}

// ── Output ──────────────────────────────────────────────────────

fn print_nearest(catalog: &Catalog, position: &Position, limit: i64, json: bool) -> Result<()> {
    let ranked = catalog.nearest(&position.coordinate, Some(limit))?;

    if json {
        let out = NearestResponse {
            origin: *position,
            results: ranked.into_iter().map(NearestItem::from).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("{}", position.status_line());
    println!();
    for (i, r) in ranked.iter().enumerate() {
        println!("  {:>2}. {} \u{2014} {}", i + 1, r.point.name, r.formatted_distance());
        println!("      {}", r.point.address);
    }
    Ok(())
}

fn print_list(catalog: &Catalog, json: bool) -> Result<()> {
    let groups = group_by_region(catalog.points());

    if json {
        println!("{}", serde_json::to_string_pretty(&groups)?);
        return Ok(());
    }

    for group in &groups {
        println!("\u{2500}\u{2500} {} ({}) \u{2500}\u{2500}", group.label, group.points.len());
        for p in &group.points {
            println!("  [{}] {}", p.id, p.name);
            println!("       {}", p.address);
        }
        println!();
    }
    Ok(())
}

fn print_show(catalog: &Catalog, id: i64, json: bool) -> Result<()> {
    let Some(point) = catalog.get(id) else {
        bail!("No church with id {}", id);
    };
    let links = MapLinks::for_point(point);

    if json {
        let out = serde_json::json!({
            "church": point,
            "region": Region::classify(&point.address).label(),
            "links": links,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("{}", point.name);
    println!("  {}", point.address);
    println!("  {}", point.coordinate);
    println!("  Map:        {}", links.search);
    println!("  Directions: {}", links.directions);
    Ok(())
}
