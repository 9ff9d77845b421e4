mod config;
mod logger;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use bazi_chart::{
    BaziChart, BirthContext, ChartConfig, ClockPolicy, PillarComputer, Sex, StaticTables,
};
use bazi_cycle::pair_of_cycle_position;
use bazi_ephem::{AnalyticEphemeris, GeoLocation, Observer};
use bazi_search::terms_for_year;

use crate::config::{FileConfig, parse_clock};

#[derive(Parser)]
#[command(name = "bazi", about = "BaZi four-pillar charts from solar terms")]
struct Cli {
    /// Debug-level logging on stderr
    #[arg(long, short, global = true)]
    verbose: bool,
    /// TOML file with [clock] and [search] overrides
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Four pillars for a birth instant
    Chart {
        /// Civil date and time, YYYY-MM-DD[THH:MM[:SS]]
        #[arg(long)]
        date: String,
        /// Longitude in degrees, east positive
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        /// Latitude in degrees, north positive
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        /// male or female
        #[arg(long, default_value = "male")]
        sex: Sex,
        /// Clock the date was read from: zone, lmt, or minutes east of UT
        #[arg(long, value_parser = parse_clock, allow_hyphen_values = true)]
        clock: Option<ClockPolicy>,
        /// Include the static auxiliary readings
        #[arg(long)]
        readings: bool,
    },
    /// The 24 solar terms of a year
    Terms {
        #[arg(long, allow_hyphen_values = true)]
        year: i32,
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, value_parser = parse_clock, allow_hyphen_values = true)]
        clock: Option<ClockPolicy>,
    },
    /// GanZhi at a sexagenary cycle position (0-59)
    Cycle { position: u8 },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    match cli.command {
        Commands::Chart {
            date,
            lon,
            lat,
            sex,
            clock,
            readings,
        } => {
            let config = load_config(cli.config.as_deref(), clock)?;
            let birth = BirthContext::parse(&date, lat, lon, sex)
                .with_context(|| format!("invalid birth {date:?} at ({lat}, {lon})"))?;
            let computer = PillarComputer::new(AnalyticEphemeris::default(), config)?;
            let chart = if readings {
                computer.compute_with_tables(&birth, &StaticTables)?
            } else {
                computer.compute(&birth)?
            };
            print_chart(&chart, &config);
        }
        Commands::Terms {
            year,
            lon,
            lat,
            clock,
        } => {
            let config = load_config(cli.config.as_deref(), clock)?;
            let observer = Observer::new(
                GeoLocation::at_sea_level(lat, lon),
                config.clock.clock_for(lon),
            );
            let schedule =
                terms_for_year(&AnalyticEphemeris::default(), &observer, year, &config.search)
                    .with_context(|| format!("solar terms for {year}"))?;
            println!("Solar terms from {year} (clock {})", config.clock);
            for instant in schedule.terms() {
                println!(
                    "  {:2}  {}  {:<12} {:>7.1}°  {}",
                    instant.term.index(),
                    instant.term.hanzi(),
                    instant.term.pinyin(),
                    instant.term.longitude_deg(),
                    instant.civil,
                );
            }
        }
        Commands::Cycle { position } => {
            let gz = pair_of_cycle_position(position)?;
            let (stem, branch) = (gz.stem(), gz.branch());
            println!("{position:2}  {gz}  {}", gz.pinyin());
            println!(
                "  stem    {} {} {}{}",
                stem.hanzi(),
                stem.pinyin(),
                stem.polarity().hanzi(),
                stem.element().hanzi(),
            );
            println!(
                "  branch  {} {} {}{} ({})",
                branch.hanzi(),
                branch.pinyin(),
                branch.polarity().hanzi(),
                branch.element().hanzi(),
                branch.animal(),
            );
        }
    }

    Ok(())
}

/// Defaults, then the config file, then command-line flags.
fn load_config(path: Option<&Path>, clock: Option<ClockPolicy>) -> Result<ChartConfig> {
    let mut config = match path {
        Some(path) => FileConfig::load(path)?.apply(ChartConfig::default())?,
        None => ChartConfig::default(),
    };
    if let Some(clock) = clock {
        config.clock = clock;
    }
    config.validate()?;
    debug!(clock = %config.clock, cache = config.cache_capacity, "config");
    Ok(config)
}

fn print_chart(chart: &BaziChart, config: &ChartConfig) {
    println!("{chart}");
    println!("八字: {}", chart.eight_characters());
    println!();

    let y = &chart.year;
    println!(
        "Year   {}  cyclic year {}, 立春 {}",
        y.ganzhi, y.cyclic_year, y.start_of_spring.civil
    );
    let m = &chart.month;
    println!(
        "Month  {}  interval {} of {} [{} {}, {} {})",
        m.ganzhi,
        m.interval_index,
        m.schedule_year,
        m.start.term.hanzi(),
        m.start.civil,
        m.end.term.hanzi(),
        m.end.civil,
    );
    let d = &chart.day;
    println!("Day    {}  {} days from 2000-01-01", d.ganzhi, d.days_from_epoch);
    let h = &chart.hour;
    println!(
        "Hour   {}  true solar {} (EoT {:+.2} min, longitude {:+.2} min, clock {})",
        h.ganzhi,
        h.true_solar_time,
        h.equation_of_time_minutes,
        h.longitude_correction_minutes,
        config.clock,
    );

    let phases = chart.growth_phases();
    println!(
        "十二长生: {}",
        phases
            .iter()
            .map(|p| p.hanzi())
            .collect::<Vec<_>>()
            .join(" ")
    );
    let counts = chart
        .element_counts()
        .iter()
        .map(|(e, n)| format!("{}{n}", e.hanzi()))
        .collect::<Vec<_>>()
        .join(" ");
    println!("五行: {counts}");

    let r = &chart.readings;
    if !r.is_empty() {
        println!();
        for (element, state) in &r.five_element_states {
            print!("{element}{state} ");
        }
        println!();
        if !r.luck_periods.is_empty() {
            println!("大运: {}", r.luck_periods.join(", "));
        }
        if !r.hidden_stars.is_empty() {
            println!("神煞: {}", r.hidden_stars.join(", "));
        }
        if let Some(najia) = &r.najia {
            println!("纳音: {najia}");
        }
    }
}
