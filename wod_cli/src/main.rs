use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wod_core::*;

#[derive(Parser)]
#[command(name = "wodgen")]
#[command(about = "Reproducible workout generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a workout and save it
    Generate {
        /// Skill level (beginner, intermediate, advanced)
        #[arg(long)]
        level: Option<String>,

        /// Duration in minutes (15-120)
        #[arg(long)]
        duration: Option<u32>,

        /// Available equipment, comma separated; order matters for the seed
        #[arg(long, value_delimiter = ',')]
        equipment: Option<Vec<String>>,

        /// Seed to reproduce a previous workout
        #[arg(long)]
        seed: Option<String>,

        /// Show the workout without saving it
        #[arg(long)]
        dry_run: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List saved workouts, newest first
    List {
        #[arg(long, default_value_t = DEFAULT_LIST_LIMIT)]
        limit: usize,

        #[arg(long, default_value_t = 0)]
        offset: usize,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show and validate the active catalog
    Catalog {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show the effective configuration
    Config {
        /// Write it to the config file instead of printing it
        #[arg(long)]
        write: bool,
    },
}

fn main() {
    wod_core::logging::init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {}", e);
        std::process::exit(if e.is_validation() { 2 } else { 1 });
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) if path.exists() => Config::load_from(path)?,
        Some(path) => {
            tracing::info!("No config file at {:?}, using defaults", path);
            Config::default()
        }
        None => Config::load()?,
    };
    let config_path = cli.config.unwrap_or_else(Config::default_config_path);
    if let Some(dir) = cli.data_dir {
        config.data.data_dir = dir;
    }

    match cli.command {
        Commands::Generate {
            level,
            duration,
            equipment,
            seed,
            dry_run,
            json,
        } => {
            let request = GenerationRequest {
                level: level.unwrap_or_else(|| config.defaults.level.clone()),
                duration_min: duration.unwrap_or(config.defaults.duration_min),
                equipment: equipment.unwrap_or_else(|| config.defaults.equipment.clone()),
                seed,
            };
            cmd_generate(&config, &request, dry_run, json)
        }
        Commands::List {
            limit,
            offset,
            json,
        } => cmd_list(&config, limit, offset, json),
        Commands::Catalog { json } => cmd_catalog(&config, json),
        Commands::Config { write } => cmd_config(&config, &config_path, write),
    }
}

fn load_catalog(config: &Config) -> Result<Catalog> {
    let catalog = match &config.catalog.path {
        Some(path) => Catalog::load_from(path)?,
        None => get_default_catalog().clone(),
    };
    catalog.ensure_valid()?;
    Ok(catalog)
}

fn cmd_generate(
    config: &Config,
    request: &GenerationRequest,
    dry_run: bool,
    json: bool,
) -> Result<()> {
    let catalog = load_catalog(config)?;
    let workout = generate(request, &catalog)?;

    if !dry_run {
        let store = JsonlStore::new(config.store_path());
        store.save(&workout)?;
        tracing::info!("Saved workout {} to {:?}", workout.id, store.path());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&workout)?);
    } else {
        display_workout(&workout);
        if dry_run {
            println!("\n[Dry run - not saving workout]");
        } else {
            println!("\n✓ Workout saved!");
        }
    }

    Ok(())
}

fn cmd_list(config: &Config, limit: usize, offset: usize, json: bool) -> Result<()> {
    let store = JsonlStore::new(config.store_path());
    let workouts = store.list(limit, offset)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&workouts)?);
        return Ok(());
    }

    if workouts.is_empty() {
        println!("No saved workouts.");
        return Ok(());
    }

    for workout in &workouts {
        println!(
            "{}  {}  {:<12} {:>3} min  {} blocks  seed {}",
            workout.created_at.format("%Y-%m-%d %H:%M"),
            workout.id,
            workout.level.as_str(),
            workout.duration_min,
            workout.blocks.len(),
            workout.seed
        );
    }

    Ok(())
}

fn cmd_catalog(config: &Config, json: bool) -> Result<()> {
    let catalog = load_catalog(config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }

    println!("{} moves", catalog.len());
    for mv in &catalog.moves {
        let needs = if mv.needs_one_of.is_empty() {
            "none".to_string()
        } else {
            mv.needs_one_of.join(" | ")
        };
        println!("  {:<20} weight {:<4} needs {}", mv.name, mv.weight, needs);
    }

    Ok(())
}

fn cmd_config(config: &Config, path: &std::path::Path, write: bool) -> Result<()> {
    if write {
        config.save_to(path)?;
        println!("Wrote config to {}", path.display());
    } else {
        print!("{}", config.to_toml_string()?);
    }
    Ok(())
}

fn display_workout(workout: &Workout) {
    println!("\n╭─────────────────────────────────────────╮");
    println!(
        "│  {} WORKOUT - {} min",
        workout.level.as_str().to_uppercase(),
        workout.duration_min
    );
    println!("╰─────────────────────────────────────────╯");
    println!();

    for (i, block) in workout.blocks.iter().enumerate() {
        let params: Vec<String> = block
            .params
            .iter()
            .map(|(name, value)| format!("{} {}", value, name))
            .collect();
        println!("  {:>2}. {:<20} {}", i + 1, block.name, params.join(", "));
    }

    println!();
    if !workout.equipment.is_empty() {
        println!("  Equipment: {}", workout.equipment.join(", "));
    }
    println!("  Seed: {}", workout.seed);
    println!("  Id:   {}", workout.id);
}
