mod when;

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand, ValueEnum};
use orrery_config::OrreryConfig;
use orrery_ephem::{Body, EphemError, EphemerisStore};
use orrery_search::{
    ConjunctionConfig, ConjunctionKind, ElongationConfig, GeoLocation, JovianScanConfig,
    RiseSetConfig, classify_event, eclipse_visibility, format_hours, moon_altitude_deg,
    planet_events, prev_conjunction, search_conjunctions, search_greatest_elongations,
    search_jovian_events, visible_lon_range,
};
use orrery_shadow::{EclipsePhaseWindow, LowPrecisionGalilean, load_catalog};
use orrery_time::gmst_deg;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::when::{format_jd, parse_date, parse_when};

#[derive(Parser)]
#[command(name = "orrery", about = "Astronomical event finder")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Inferior,
    Superior,
    Opposition,
}

impl From<KindArg> for ConjunctionKind {
    fn from(k: KindArg) -> Self {
        match k {
            KindArg::Inferior => Self::Inferior,
            KindArg::Superior => Self::Superior,
            KindArg::Opposition => Self::Opposition,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Transits, shadow transits, eclipses and occultations of Jupiter's moons
    Jovian {
        /// Start instant (JD or YYYY-MM-DD[Thh:mm]) in UT
        #[arg(long)]
        date: String,
        /// Span in days (default from config)
        #[arg(long)]
        days: Option<f64>,
        /// Report occultations and eclipses even when the other hides them
        #[arg(long)]
        no_masking: bool,
        /// Observer latitude for visibility labels
        #[arg(long, allow_hyphen_values = true, requires = "lon")]
        lat: Option<f64>,
        /// Observer longitude (east positive) for visibility labels
        #[arg(long, allow_hyphen_values = true, requires = "lat")]
        lon: Option<f64>,
    },
    /// Rise, transit and set for one local calendar day
    Riseset {
        /// Body name (Sun, Moon, Mars, ...)
        #[arg(long)]
        body: String,
        /// Local date YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// Latitude in degrees, north positive
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        /// Longitude in degrees, east positive
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        /// Altitude in meters
        #[arg(long, default_value = "0")]
        alt: f64,
        /// Local time minus UT, in hours
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        utc_offset: f64,
        /// Lower the horizon by the standard atmospheric refraction
        #[arg(long)]
        refraction: bool,
    },
    /// Heliocentric conjunctions and oppositions
    Conjunction {
        /// Planet name
        #[arg(long)]
        body: String,
        #[arg(long, value_enum)]
        kind: KindArg,
        /// Start instant (JD or YYYY-MM-DD[Thh:mm]) in UT
        #[arg(long)]
        date: String,
        /// Span in days (default from config)
        #[arg(long)]
        days: Option<f64>,
        /// Report only the previous event before the date
        #[arg(long)]
        prev: bool,
    },
    /// Greatest elongations of Mercury or Venus
    Elongation {
        /// Mercury or Venus
        #[arg(long)]
        body: String,
        /// Start instant (JD or YYYY-MM-DD[Thh:mm]) in UT
        #[arg(long)]
        date: String,
        /// Span in days (default from config)
        #[arg(long)]
        days: Option<f64>,
    },
    /// Which catalogued lunar eclipses can be seen from a location
    EclipseVisibility {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        #[arg(long, default_value = "0")]
        alt: f64,
        /// Catalog CSV (default from config)
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Skip eclipses before this instant
        #[arg(long)]
        after: Option<String>,
    },
    /// Longitude band where a body is above the horizon, per latitude
    VisibleLon {
        /// Right ascension in degrees
        #[arg(long)]
        ra: f64,
        /// Declination in degrees
        #[arg(long, allow_hyphen_values = true)]
        dec: f64,
        /// Instant (JD or YYYY-MM-DD[Thh:mm]) in UT
        #[arg(long)]
        date: String,
        /// Latitude step in degrees
        #[arg(long, default_value = "10")]
        lat_step: f64,
    },
    /// Interpolated state of a body
    State {
        #[arg(long)]
        body: String,
        /// Instant (JD or YYYY-MM-DD[Thh:mm]) in UT
        #[arg(long)]
        date: String,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn parse_body(name: &str) -> Result<Body> {
    Body::from_name(name).ok_or_else(|| anyhow!(EphemError::UnknownBody(name.to_string())))
}

/// Load the planet table, and the Moon table when `with_moon` is set.
fn load_store(config: &OrreryConfig, with_moon: bool) -> Result<EphemerisStore> {
    let mut store = EphemerisStore::new();
    let n = store
        .load_file(&config.planets_path, &config.planets_layout())
        .with_context(|| format!("loading {}", config.planets_path.display()))?;
    info!(records = n, path = %config.planets_path.display(), "planet table loaded");
    if with_moon {
        let n = store
            .load_file(&config.moon_path, &config.moon_layout())
            .with_context(|| format!("loading {}", config.moon_path.display()))?;
        info!(records = n, path = %config.moon_path.display(), "moon table loaded");
    }
    Ok(store)
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let config = OrreryConfig::from_env()?;

    match cli.command {
        Commands::Jovian {
            date,
            days,
            no_masking,
            lat,
            lon,
        } => {
            let jd = parse_when(&date)?;
            let span = days.unwrap_or(config.jovian_span_days);
            let store = load_store(&config, false)?;
            let scan = JovianScanConfig {
                step_minutes: config.jovian_step_minutes,
                mutual_masking: !no_masking,
                ..JovianScanConfig::default()
            };
            let observer = lat.zip(lon).map(|(la, lo)| GeoLocation::new(la, lo, 0.0));
            let events = search_jovian_events(&store, &LowPrecisionGalilean, jd, jd + span, &scan)?;
            if events.is_empty() {
                println!("No Jovian events found in search range");
            }
            for ev in &events {
                match &observer {
                    Some(loc) => {
                        let vis = classify_event(&store, Body::Jupiter, ev.jd, loc)?;
                        println!("{}  {:<32} {}", format_jd(ev.jd), ev.text, vis.label());
                    }
                    None => println!("{}  {}", format_jd(ev.jd), ev.text),
                }
            }
        }

        Commands::Riseset {
            body,
            date,
            lat,
            lon,
            alt,
            utc_offset,
            refraction,
        } => {
            let body = parse_body(&body)?;
            let (year, month, day) = parse_date(&date)?;
            let store = load_store(&config, body == Body::Moon)?;
            let loc = GeoLocation::new(lat, lon, alt);
            let rs_config = if refraction {
                RiseSetConfig::with_refraction()
            } else {
                RiseSetConfig::default()
            };
            let ev = planet_events(&store, body, &loc, year, month, day, utc_offset, &rs_config)?;
            println!("{body} on {date} at ({lat:.4}, {lon:.4}):");
            println!("  Rise:    {}", format_hours(ev.rise));
            println!("  Transit: {}", format_hours(ev.transit));
            println!("  Set:     {}", format_hours(ev.set));
            println!("  Day:     {:?}", ev.visibility);
        }

        Commands::Conjunction {
            body,
            kind,
            date,
            days,
            prev,
        } => {
            let body = parse_body(&body)?;
            let kind = ConjunctionKind::from(kind);
            let jd = parse_when(&date)?;
            let store = load_store(&config, false)?;
            let cfg = ConjunctionConfig::default();
            let events = if prev {
                prev_conjunction(&store, body, kind, jd, &cfg)?
                    .into_iter()
                    .collect()
            } else {
                let span = days.unwrap_or(config.phenomena_span_days);
                search_conjunctions(&store, body, kind, jd, jd + span, &cfg)?
            };
            if events.is_empty() {
                println!("No {} of {body} found in search range", kind.label());
            }
            for ev in &events {
                println!("{}  {body} {}", format_jd(ev.jd), ev.kind.label());
                println!(
                    "  Helio lon: {:.4} deg  Earth lon: {:.4} deg  Dist: {:.4} AU",
                    ev.body_helio_lon_deg, ev.earth_helio_lon_deg, ev.body_dist_geo_au
                );
            }
        }

        Commands::Elongation { body, date, days } => {
            let body = parse_body(&body)?;
            let jd = parse_when(&date)?;
            let span = days.unwrap_or(config.phenomena_span_days);
            let store = load_store(&config, false)?;
            let cfg = ElongationConfig::default();
            let events = search_greatest_elongations(&store, body, jd, jd + span, &cfg)?;
            if events.is_empty() {
                println!("No greatest elongation of {body} found in search range");
            }
            for ev in &events {
                println!(
                    "{}  {body} {} ({:.2} deg)",
                    format_jd(ev.jd),
                    ev.kind.label(),
                    ev.elongation_deg
                );
            }
        }

        Commands::EclipseVisibility {
            lat,
            lon,
            alt,
            catalog,
            after,
        } => {
            let Some(path) = catalog.or(config.eclipse_catalog_path) else {
                bail!("no eclipse catalog: pass --catalog or set ORRERY_ECLIPSE_CSV");
            };
            let after = after.as_deref().map(parse_when).transpose()?;
            let records = load_catalog(&path)?;
            let loc = GeoLocation::new(lat, lon, alt);
            for rec in records
                .iter()
                .filter(|r| after.is_none_or(|a| r.greatest_jd >= a))
            {
                let window = EclipsePhaseWindow::from_record(rec)?;
                let vis = eclipse_visibility(&window, &loc);
                println!(
                    "{}  {:?} eclipse (mag {:.3}): {}",
                    format_jd(window.greatest_jd),
                    rec.kind,
                    rec.magnitude,
                    if vis.visible { "visible" } else { "not visible" }
                );
                if vis.visible {
                    for (label, jd) in window.contacts() {
                        println!(
                            "    {:<18} {}  Moon alt {:6.1} deg",
                            label,
                            format_jd(jd),
                            moon_altitude_deg(jd, &loc)
                        );
                    }
                }
            }
        }

        Commands::VisibleLon {
            ra,
            dec,
            date,
            lat_step,
        } => {
            if !lat_step.is_finite() || lat_step <= 0.0 {
                bail!("--lat-step must be positive");
            }
            let jd = parse_when(&date)?;
            let gmst = gmst_deg(jd);
            let mut lat = -90.0;
            while lat <= 90.0 {
                let band = visible_lon_range(lat, ra, dec, gmst);
                if band.always_up {
                    println!("{lat:6.1}  always up");
                } else if band.never_up {
                    println!("{lat:6.1}  never up");
                } else {
                    println!("{lat:6.1}  {:8.2} .. {:8.2}", band.lon1, band.lon2);
                }
                lat += lat_step;
            }
        }

        Commands::State { body, date } => {
            let body = parse_body(&body)?;
            let jd = parse_when(&date)?;
            let store = load_store(&config, body == Body::Moon)?;
            let s = store.interpolate(body, jd)?;
            let (lon, lat) = s.geocentric_ecliptic();
            println!("{body} at {} (JD {jd:.5}):", format_jd(jd));
            println!("  RA:  {:.6} deg  Dec: {:.6} deg", s.ra_deg, s.dec_deg);
            println!("  Geocentric ecliptic: lon {lon:.6} lat {lat:.6} deg");
            println!(
                "  Heliocentric ecliptic: lon {:.6} lat {:.6} deg",
                s.ecl_lon_deg, s.ecl_lat_deg
            );
            println!(
                "  Distance: {:.8} AU from Earth, {:.8} AU from Sun",
                s.dist_geo_au, s.dist_sun_au
            );
            if let Some((first, last)) = store.span(body) {
                println!("  Table: {} .. {}", format_jd(first), format_jd(last));
            }
        }
    }
    Ok(())
}
