use clap::Parser;
use reflectwell::application::{
    resolve_range, AddEntryService, ConfigService, DeleteEntryService, InitService,
    ListEntriesService, NewEntry, StatsService,
};
use reflectwell::cli::{
    format_entry_list, format_progress, format_streak, format_trends, Cli, Commands,
};
use reflectwell::domain::Mood;
use reflectwell::error::ReflectError;
use reflectwell::infrastructure::{Clock, FileSystemRepository, SystemClock};
use std::str::FromStr;

fn main() {
    init_logging();

    let cli = Cli::parse();

    match run(cli, &SystemClock) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Log filter from `REFLECTWELL_LOG`, then `RUST_LOG`, default `warn`.
/// Logs go to stderr so command output stays clean.
fn init_logging() {
    let log_env = std::env::var("REFLECTWELL_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "warn".to_string());

    let env_filter = tracing_subscriber::EnvFilter::try_new(&log_env)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();
}

fn run(cli: Cli, clock: &dyn Clock) -> Result<(), ReflectError> {
    match cli.command {
        Commands::Init { path, goal } => {
            let config = InitService::execute(&path, goal)?;
            println!("Initialized reflectwell journal at {}", path.display());
            println!("Weekly goal: {} days", config.weekly_goal);
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("goal = {}", config.weekly_goal);
                println!("editor = {}", config.editor);
                println!("created = {}", config.created.to_rfc3339());
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
            } else {
                println!("Usage: reflectwell config [--list | <key> [<value>]]");
                println!("Valid keys: goal, editor, created");
            }
            Ok(())
        }
        Commands::Add { text, mood, date } => {
            let mood = Mood::from_str(&mood).map_err(ReflectError::InvalidMood)?;
            let repo = FileSystemRepository::discover()?;
            let service = AddEntryService::new(repo);

            let text = if text.is_empty() {
                None
            } else {
                Some(text.join(" "))
            };
            let entry = service.execute(NewEntry { text, mood, date }, clock)?;

            let date = entry
                .date
                .map(|d| d.format("%d-%m-%Y").to_string())
                .unwrap_or_default();
            println!("Added entry {} for {} ({})", entry.id, date, entry.mood);
            Ok(())
        }
        Commands::List { from, to, limit } => {
            let range = resolve_range(from.as_deref(), to.as_deref(), clock.today())?;
            let repo = FileSystemRepository::discover()?;
            let entries = ListEntriesService::new(repo).execute(range, limit)?;
            print!("{}", format_entry_list(&entries));
            if entries.is_empty() {
                println!();
            }
            Ok(())
        }
        Commands::Streak => {
            let repo = FileSystemRepository::discover()?;
            let streak = StatsService::new(repo).streak(clock)?;
            println!("{}", format_streak(streak));
            Ok(())
        }
        Commands::Progress { goal } => {
            let repo = FileSystemRepository::discover()?;
            let progress = StatsService::new(repo).weekly_progress(clock, goal)?;
            println!("{}", format_progress(&progress));
            Ok(())
        }
        Commands::Trends { from, to } => {
            let range = resolve_range(from.as_deref(), to.as_deref(), clock.today())?;
            let repo = FileSystemRepository::discover()?;
            let summary = StatsService::new(repo).trends(range)?;
            print!("{}", format_trends(&summary));
            if summary.total() == 0 {
                println!();
            }
            Ok(())
        }
        Commands::Delete { id } => {
            let repo = FileSystemRepository::discover()?;
            let removed = DeleteEntryService::new(repo).execute(&id)?;
            println!("Deleted entry {}", removed.id);
            Ok(())
        }
    }
}
