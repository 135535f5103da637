//! Fantasy basketball head-to-head rankings CLI
//!
//! Reads a season of matchup results and prints weekly and season rankings.

use clap::{Parser, Subcommand};
use hoops::report::OutputFormat;
use hoops::{Config, Result};

#[derive(Parser)]
#[command(name = "hoops")]
#[command(about = "Head-to-head category rankings for fantasy basketball", long_about = None)]
struct Cli {
    /// Config file path
    #[arg(short, long, default_value = "hoops.toml")]
    config: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Matchup CSV file (overrides the config)
    #[arg(short, long)]
    data: Option<String>,

    /// Number of weeks in the season (overrides the config)
    #[arg(long)]
    weeks: Option<u32>,

    /// Output format: table, csv or json
    #[arg(short, long, default_value = "table")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config file
    Init,
    /// Show what the matchup file contains
    Status,
    /// Average-margin and win-count rankings for one week
    Week {
        /// Week number
        week: u32,
    },
    /// Season ranking by average category margin
    Season {
        /// List every team/week score instead of the season average
        #[arg(long)]
        by_week: bool,
    },
    /// Week-by-week results between two teams
    H2h {
        /// First team name
        team: String,
        /// Second team name
        opponent: String,
    },
    /// Category-rank voting rankings
    Votes {
        /// Only this week (default: every week with data)
        #[arg(long)]
        week: Option<u32>,
    },
    /// Share of categories won against the whole league in one week
    Share {
        /// Week number
        week: u32,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    // Load or create config
    let mut config = if std::path::Path::new(&cli.config).exists() {
        match Config::load(&cli.config) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        Config::default()
    };
    if let Some(data) = cli.data {
        config.data.matchups_path = data;
    }
    if cli.weeks.is_some() {
        config.league.weeks = cli.weeks;
    }

    let result = match cli.command {
        Commands::Init => commands::init(&cli.config),
        Commands::Status => commands::status(&config),
        Commands::Week { week } => commands::week(&config, cli.format, week),
        Commands::Season { by_week } => commands::season(&config, cli.format, by_week),
        Commands::H2h { team, opponent } => commands::h2h(&config, cli.format, &team, &opponent),
        Commands::Votes { week } => commands::votes(&config, cli.format, week),
        Commands::Share { week } => commands::share(&config, cli.format, week),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

mod commands {
    use super::*;
    use hoops::data::{load_matchups, StatTable};
    use hoops::engine::{rank_by_category_votes, season_average_wins, HeadToHead, Rankings};
    use hoops::report::ReportPrinter;

    fn load(config: &Config) -> Result<StatTable> {
        load_matchups(&config.data.matchups_path, &config.league)
    }

    fn printer(config: &Config, format: OutputFormat) -> ReportPrinter {
        ReportPrinter::new(format, config.report.precision)
    }

    pub fn init(config_path: &str) -> Result<()> {
        let config = Config::default();
        config.save(config_path)?;
        println!("Created default config at {}", config_path);

        println!("\nNext steps:");
        println!("  1. Export the league's matchup results to {}", config.data.matchups_path);
        println!("  2. Run 'hoops status' to check the file");
        println!("  3. Run 'hoops week <N>' or 'hoops season' for rankings");

        Ok(())
    }

    pub fn status(config: &Config) -> Result<()> {
        let table = load(config)?;
        let stats: Vec<&str> = table.stats().iter().map(|s| s.label()).collect();
        let active = table.active_weeks();

        println!("League Status");
        println!("───────────────────────────────");
        println!("  File:     {}", config.data.matchups_path);
        println!("  Teams:    {}", table.team_count());
        println!("  Weeks:    {} ({} with data)", table.week_count(), active.len());
        println!("  Stats:    {}", stats.join(", "));
        for team in table.teams() {
            let played = active.iter().filter(|w| table.has_snapshot(team, **w)).count();
            println!("    {:<24} {} weeks", team, played);
        }

        Ok(())
    }

    pub fn week(config: &Config, format: OutputFormat, week: u32) -> Result<()> {
        let table = load(config)?;
        let h2h = HeadToHead::compute(&table);
        let rankings = Rankings::new(&table, &h2h);
        let printer = printer(config, format);

        let by_average = rankings.rank_by_average_margin(week)?;
        print!(
            "{}",
            printer.ranking(&format!("Ranking by average stats on week {}:", week), &by_average)?
        );

        let by_wins = rankings.rank_by_win_count(week)?;
        if format == OutputFormat::Table {
            println!();
        }
        print!(
            "{}",
            printer.ranking(&format!("Ranking by wins on week {}:", week), &by_wins)?
        );

        Ok(())
    }

    pub fn season(config: &Config, format: OutputFormat, by_week: bool) -> Result<()> {
        let table = load(config)?;
        let h2h = HeadToHead::compute(&table);
        let rankings = Rankings::new(&table, &h2h);
        let printer = printer(config, format);

        if by_week {
            let all = rankings.rank_by_average_margin_all_weeks();
            print!("{}", printer.ranking("Ranking by average stats:", &all)?);
        } else {
            let season = rankings.season_average_margin();
            print!("{}", printer.ranking("Ranking all season by avg stats:", &season)?);
        }

        Ok(())
    }

    pub fn h2h(config: &Config, format: OutputFormat, team: &str, opponent: &str) -> Result<()> {
        let table = load(config)?;
        let h2h = HeadToHead::compute(&table);
        let series = h2h.series(team, opponent)?;
        print!("{}", printer(config, format).series(&series)?);
        Ok(())
    }

    pub fn votes(config: &Config, format: OutputFormat, week: Option<u32>) -> Result<()> {
        let table = load(config)?;
        let printer = printer(config, format);

        let weeks = match week {
            Some(w) => vec![w],
            None => table.active_weeks(),
        };
        for week in weeks {
            let tally = rank_by_category_votes(&table, week)?;
            print!("{}", printer.ranking(&format!("Week {}:", week), &tally)?);
            if format == OutputFormat::Table {
                println!();
            }
        }

        if week.is_none() {
            let season = season_average_wins(&table);
            print!("{}", printer.ranking("Season average wins:", &season)?);
        }

        Ok(())
    }

    pub fn share(config: &Config, format: OutputFormat, week: u32) -> Result<()> {
        let table = load(config)?;
        let h2h = HeadToHead::compute(&table);
        let shares = Rankings::new(&table, &h2h).weekly_category_share(week)?;
        print!(
            "{}",
            printer(config, format).ranking(&format!("Category share on week {}:", week), &shares)?
        );
        Ok(())
    }
}
