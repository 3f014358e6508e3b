use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use vitalog_core::*;

#[derive(Parser)]
#[command(name = "vitalog")]
#[command(about = "Personal wellness tracker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Track recurring habits
    Habit {
        #[command(subcommand)]
        command: HabitCommands,
    },
    /// Log and export weight measurements
    Weight {
        #[command(subcommand)]
        command: WeightCommands,
    },
    /// Start, check, and end fasting windows
    Fast {
        #[command(subcommand)]
        command: FastCommands,
    },
    /// Log food entries
    Food {
        #[command(subcommand)]
        command: FoodCommands,
    },
    /// Log a journal entry with mood
    Mood {
        /// Mood before writing (1-5)
        before: i8,

        /// Mood after writing (1-5)
        #[arg(long)]
        after: Option<i8>,

        /// Journal text
        #[arg(long, default_value = "")]
        text: String,
    },
    /// Track long-term goals
    Goal {
        #[command(subcommand)]
        command: GoalCommands,
    },
    /// Track medications
    Med {
        #[command(subcommand)]
        command: MedCommands,
    },
    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Write a default config file if none exists
    Init,
    /// Print the resolved configuration
    Show,
}

#[derive(Subcommand)]
enum HabitCommands {
    /// Create a new habit
    Add {
        name: String,

        /// Category (health, fitness, mindfulness, productivity, learning, social)
        #[arg(long, default_value = "health")]
        category: String,

        /// Target this many check-ins per week instead of every day
        #[arg(long, conflicts_with = "every_n_days")]
        times_per_week: Option<u8>,

        /// Repeat every N days instead of every day
        #[arg(long)]
        every_n_days: Option<u16>,
    },
    /// Mark a habit completed for a day (default today)
    Done {
        name: String,

        /// Completion date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// List habits with streaks and maturity
    List,
    /// Advance a habit's maturity one stage
    Graduate { name: String },
}

#[derive(Subcommand)]
enum WeightCommands {
    /// Log a weight measurement
    Log {
        value: f64,

        /// Unit (kg, lbs, stone); defaults to the configured unit
        #[arg(long)]
        unit: Option<String>,

        #[arg(long)]
        note: Option<String>,
    },
    /// List logged measurements
    List,
    /// Export the weight journal to CSV
    Export {
        /// Clean up processed journal files after export
        #[arg(long)]
        cleanup: bool,
    },
}

#[derive(Subcommand)]
enum FastCommands {
    /// Start a fasting window
    Start {
        /// Target hours; defaults to the configured target
        #[arg(long)]
        target_hours: Option<f64>,
    },
    /// Show the active fast
    Status,
    /// End the active fast
    End,
}

#[derive(Subcommand)]
enum FoodCommands {
    /// Log a food entry with explicit nutrition
    Log {
        name: String,

        #[arg(long)]
        calories: f64,

        #[arg(long, default_value_t = 0.0)]
        protein: f64,

        #[arg(long, default_value_t = 0.0)]
        carbs: f64,

        #[arg(long, default_value_t = 0.0)]
        fat: f64,

        #[arg(long, default_value_t = 1.0)]
        servings: f64,

        /// Meal (breakfast, lunch, dinner, snack)
        #[arg(long, default_value = "snack")]
        meal: String,
    },
    /// Log a food entry from a built-in template
    Template {
        name: String,

        #[arg(long, default_value_t = 1.0)]
        servings: f64,

        #[arg(long, default_value = "snack")]
        meal: String,
    },
    /// List built-in food templates
    Templates,
    /// Show nutrition totals for today
    Today,
}

#[derive(Subcommand)]
enum GoalCommands {
    /// Create a goal, optionally with milestones
    Add {
        title: String,

        /// Target date (YYYY-MM-DD)
        #[arg(long)]
        target_date: Option<NaiveDate>,

        /// Milestone titles
        #[arg(long = "milestone")]
        milestones: Vec<String>,
    },
    /// List goals with progress
    List,
    /// Mark a milestone completed
    DoneMilestone { goal: String, milestone: String },
}

#[derive(Subcommand)]
enum MedCommands {
    /// Register a medication
    Add {
        name: String,

        #[arg(long)]
        dose: f64,

        #[arg(long, default_value = "mg")]
        unit: String,
    },
    /// Log a dose (taken, skipped, missed)
    Log {
        name: String,

        #[arg(long, default_value = "taken")]
        status: String,

        #[arg(long)]
        note: Option<String>,
    },
}

fn main() -> Result<()> {
    vitalog_core::logging::init();

    let cli = Cli::parse();

    let config = Config::load()?;
    let data_dir = cli.data_dir.unwrap_or_else(|| config.data.data_dir.clone());
    tracing::debug!("Using data directory {:?}", data_dir);

    match cli.command {
        Commands::Habit { command } => cmd_habit(&data_dir, command, &config),
        Commands::Weight { command } => cmd_weight(&data_dir, command, &config),
        Commands::Fast { command } => cmd_fast(&data_dir, command, &config),
        Commands::Food { command } => cmd_food(&data_dir, command),
        Commands::Mood {
            before,
            after,
            text,
        } => cmd_mood(&data_dir, before, after, text),
        Commands::Goal { command } => cmd_goal(&data_dir, command),
        Commands::Med { command } => cmd_med(&data_dir, command),
        Commands::Config { command } => cmd_config(command, &config),
    }
}

fn cmd_config(command: ConfigCommands, config: &Config) -> Result<()> {
    let config_path = Config::default_config_path();

    match command {
        ConfigCommands::Init => {
            if config_path.exists() {
                println!("Config already exists at {}", config_path.display());
                return Ok(());
            }
            Config::default().save()?;
            println!("✓ Wrote default config to {}", config_path.display());
        }

        ConfigCommands::Show => {
            println!("Config path: {}", config_path.display());
            println!("  data dir: {}", config.data.data_dir.display());
            println!("  weight unit: {}", config.units.weight.abbrev());
            println!("  days to formation: {}", config.habits.days_to_formation);
            println!(
                "  fasting target: {:.1}h",
                config.fasting.default_target_hours
            );
        }
    }

    Ok(())
}

fn state_path(data_dir: &Path) -> PathBuf {
    data_dir.join("state.json")
}

fn journal_path(data_dir: &Path, name: &str) -> PathBuf {
    data_dir.join("journal").join(name)
}

fn parse_category(raw: &str) -> HabitCategory {
    match raw.to_lowercase().as_str() {
        "fitness" => HabitCategory::Fitness,
        "mindfulness" => HabitCategory::Mindfulness,
        "productivity" => HabitCategory::Productivity,
        "learning" => HabitCategory::Learning,
        "social" => HabitCategory::Social,
        "health" => HabitCategory::Health,
        other => {
            eprintln!("Unknown category: {}. Using health.", other);
            HabitCategory::Health
        }
    }
}

fn parse_weight_unit(raw: &str) -> Option<WeightUnit> {
    match raw.to_lowercase().as_str() {
        "kg" | "kilograms" => Some(WeightUnit::Kg),
        "lbs" | "pounds" => Some(WeightUnit::Lbs),
        "stone" | "st" => Some(WeightUnit::Stone),
        _ => None,
    }
}

fn parse_meal(raw: &str) -> MealType {
    match raw.to_lowercase().as_str() {
        "breakfast" => MealType::Breakfast,
        "lunch" => MealType::Lunch,
        "dinner" => MealType::Dinner,
        _ => MealType::Snack,
    }
}

fn cmd_habit(data_dir: &Path, command: HabitCommands, config: &Config) -> Result<()> {
    let path = state_path(data_dir);
    let today = Utc::now().date_naive();

    match command {
        HabitCommands::Add {
            name,
            category,
            times_per_week,
            every_n_days,
        } => {
            let category = parse_category(&category);
            let frequency = match (times_per_week, every_n_days) {
                (Some(times_per_week), _) => HabitFrequency::Weekly { times_per_week },
                (None, Some(n)) => HabitFrequency::EveryNDays { n },
                (None, None) => HabitFrequency::Daily,
            };
            TrackerState::update(&path, |state| {
                if state.find_habit_by_name(&name).is_some() {
                    return Err(Error::Validation(format!("habit '{}' already exists", name)));
                }
                let mut habit = Habit::new(&name, category, frequency);
                habit.days_to_formation = config.habits.days_to_formation;
                state.add_habit(habit);
                Ok(())
            })?;
            println!("✓ Added habit '{}' ({})", name, category.display_name());
        }

        HabitCommands::Done { name, date } => {
            let date = date.unwrap_or(today);
            let state = TrackerState::update(&path, |state| {
                let habit = state
                    .habits
                    .values_mut()
                    .find(|h| !h.archived && h.name.eq_ignore_ascii_case(&name))
                    .ok_or_else(|| Error::Validation(format!("no habit named '{}'", name)))?;
                habit.mark_completed(date);
                Ok(())
            })?;
            let habit = state.find_habit_by_name(&name).expect("habit just updated");
            println!(
                "✓ '{}' done on {} (streak: {} days)",
                habit.name,
                date,
                habit.current_streak(today)
            );
        }

        HabitCommands::List => {
            let state = TrackerState::load(&path)?;
            if state.habits.is_empty() {
                println!("No habits yet. Add one with: vitalog habit add <name>");
                return Ok(());
            }
            let mut habits: Vec<_> = state.habits.values().filter(|h| !h.archived).collect();
            habits.sort_by(|a, b| a.name.cmp(&b.name));
            for habit in habits {
                println!(
                    "{} {} [{}] streak {} / best {}  {} {}",
                    habit.category.emoji(),
                    habit.name,
                    habit.frequency.describe(),
                    habit.current_streak(today),
                    habit.longest_streak(),
                    habit.maturity.emoji(),
                    habit.maturity.display_name(),
                );
            }
        }

        HabitCommands::Graduate { name } => {
            let state = TrackerState::update(&path, |state| {
                let habit = state
                    .habits
                    .values_mut()
                    .find(|h| !h.archived && h.name.eq_ignore_ascii_case(&name))
                    .ok_or_else(|| Error::Validation(format!("no habit named '{}'", name)))?;
                habit.graduate();
                Ok(())
            })?;
            let habit = state.find_habit_by_name(&name).expect("habit just updated");
            println!(
                "✓ '{}' is now {} {}",
                habit.name,
                habit.maturity.emoji(),
                habit.maturity.display_name()
            );
        }
    }

    Ok(())
}

fn cmd_weight(data_dir: &Path, command: WeightCommands, config: &Config) -> Result<()> {
    let journal_file = journal_path(data_dir, "weight.jsonl");

    match command {
        WeightCommands::Log { value, unit, note } => {
            let unit = match unit {
                Some(raw) => parse_weight_unit(&raw)
                    .ok_or_else(|| Error::Validation(format!("unknown weight unit: {}", raw)))?,
                None => config.units.weight,
            };
            let mut entry = WeightEntry::new(value, unit);
            if let Some(note) = note {
                entry = entry.with_note(note);
            }

            let mut journal = JsonlJournal::new(&journal_file);
            journal.append(&entry)?;
            println!(
                "✓ Logged {:.1} {} ({:.1} kg)",
                entry.weight,
                entry.unit.abbrev(),
                entry.in_kg()
            );
        }

        WeightCommands::List => {
            let journal: JsonlJournal<WeightEntry> = JsonlJournal::new(&journal_file);
            let entries = journal.read_entries()?;
            if entries.is_empty() {
                println!("No weight entries yet.");
                return Ok(());
            }
            for entry in entries {
                println!(
                    "{}  {:.1} {}  ({:.1} kg)",
                    entry.recorded_at.format("%Y-%m-%d %H:%M"),
                    entry.weight,
                    entry.unit.abbrev(),
                    entry.in_kg()
                );
            }
        }

        WeightCommands::Export { cleanup } => {
            let csv_path = data_dir.join("weight.csv");
            if !journal_file.exists() {
                println!("No weight journal found - nothing to export.");
                return Ok(());
            }
            let count = csv_export::weight_journal_to_csv(&journal_file, &csv_path)?;
            println!("✓ Exported {} entries to CSV", count);
            println!("  CSV: {}", csv_path.display());

            if cleanup {
                let journal_dir = data_dir.join("journal");
                let cleaned = csv_export::cleanup_processed(&journal_dir)?;
                if cleaned > 0 {
                    println!("✓ Cleaned up {} processed journal files", cleaned);
                }
            }
        }
    }

    Ok(())
}

fn active_fast_path(data_dir: &Path) -> PathBuf {
    data_dir.join("active_fast.json")
}

fn load_active_fast(path: &Path) -> Result<Option<FastingEntry>> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(path)?;
    Ok(Some(serde_json::from_str(&contents)?))
}

fn cmd_fast(data_dir: &Path, command: FastCommands, config: &Config) -> Result<()> {
    let active_path = active_fast_path(data_dir);
    let now = Utc::now();

    match command {
        FastCommands::Start { target_hours } => {
            if load_active_fast(&active_path)?.is_some() {
                return Err(Error::Validation(
                    "a fast is already active; end it first".into(),
                ));
            }
            let target = target_hours.unwrap_or(config.fasting.default_target_hours);
            let fast = FastingEntry::start(now, target);

            std::fs::create_dir_all(data_dir)?;
            std::fs::write(&active_path, serde_json::to_string(&fast)?)?;
            println!("✓ Fast started (target {:.1}h)", target);
        }

        FastCommands::Status => match load_active_fast(&active_path)? {
            Some(fast) => {
                println!(
                    "Fasting for {:.1}h of {:.1}h ({:.0}%)",
                    fast.hours_at(now),
                    fast.target_hours,
                    fast.progress_at(now) * 100.0
                );
                if fast.target_met(now) {
                    println!("🎉 Target reached!");
                }
            }
            None => println!("No active fast."),
        },

        FastCommands::End => {
            let mut fast = load_active_fast(&active_path)?
                .ok_or_else(|| Error::Validation("no active fast to end".into()))?;
            fast.complete(now)?;

            let mut journal = JsonlJournal::new(journal_path(data_dir, "fasts.jsonl"));
            journal.append(&fast)?;
            std::fs::remove_file(&active_path)?;

            println!(
                "✓ Fast ended after {:.1}h (target {:.1}h{})",
                fast.hours_at(now),
                fast.target_hours,
                if fast.target_met(now) { ", met" } else { "" }
            );
        }
    }

    Ok(())
}

fn cmd_food(data_dir: &Path, command: FoodCommands) -> Result<()> {
    let journal_file = journal_path(data_dir, "food.jsonl");

    match command {
        FoodCommands::Log {
            name,
            calories,
            protein,
            carbs,
            fat,
            servings,
            meal,
        } => {
            let facts = NutritionFacts {
                calories,
                protein_g: protein,
                carbs_g: carbs,
                fat_g: fat,
                fiber_g: 0.0,
            };
            let entry = FoodEntry::new(&name, parse_meal(&meal), 1.0, ServingUnit::Piece, facts)
                .with_servings(servings);

            let mut journal = JsonlJournal::new(&journal_file);
            journal.append(&entry)?;
            println!(
                "✓ Logged {} ({:.0} kcal)",
                entry.name,
                entry.total_nutrition().calories
            );
        }

        FoodCommands::Template {
            name,
            servings,
            meal,
        } => {
            let catalog = get_builtin_catalog();
            let template = catalog
                .find_food_by_name(&name)
                .ok_or_else(|| Error::Validation(format!("no template named '{}'", name)))?;
            let entry = template.instantiate(servings, parse_meal(&meal), Utc::now());

            let mut journal = JsonlJournal::new(&journal_file);
            journal.append(&entry)?;
            println!(
                "✓ Logged {} x{} ({:.0} kcal)",
                entry.name,
                servings,
                entry.total_nutrition().calories
            );
        }

        FoodCommands::Templates => {
            let catalog = get_builtin_catalog();
            let mut templates: Vec<_> = catalog.food.values().collect();
            templates.sort_by(|a, b| a.name.cmp(&b.name));
            for template in templates {
                println!(
                    "{}  {:.0} kcal per {} {}",
                    template.name,
                    template.per_serving.calories,
                    template.serving_size,
                    template.serving_unit.abbrev()
                );
            }
        }

        FoodCommands::Today => {
            let journal: JsonlJournal<FoodEntry> = JsonlJournal::new(&journal_file);
            let entries = journal.read_entries()?;
            let totals = daily_totals(&entries, Utc::now().date_naive());
            println!(
                "Today: {:.0} kcal, {:.1}g protein, {:.1}g carbs, {:.1}g fat",
                totals.calories, totals.protein_g, totals.carbs_g, totals.fat_g
            );
        }
    }

    Ok(())
}

fn cmd_mood(data_dir: &Path, before: i8, after: Option<i8>, text: String) -> Result<()> {
    let mut entry = JournalEntry::new(MoodLevel::from_score(before), text);
    if let Some(after) = after {
        entry = entry.with_mood_after(MoodLevel::from_score(after));
    }

    let mut journal = JsonlJournal::new(journal_path(data_dir, "mood.jsonl"));
    journal.append(&entry)?;

    match entry.mood_change() {
        Some(delta) if delta > 0 => println!(
            "✓ Entry saved. Mood improved by {} {} ",
            delta,
            entry.mood_after.expect("after mood set").emoji()
        ),
        Some(delta) => println!("✓ Entry saved. Mood change: {}", delta),
        None => println!("✓ Entry saved. {}", entry.mood_before.emoji()),
    }

    Ok(())
}

fn cmd_goal(data_dir: &Path, command: GoalCommands) -> Result<()> {
    let path = state_path(data_dir);
    let today = Utc::now().date_naive();

    match command {
        GoalCommands::Add {
            title,
            target_date,
            milestones,
        } => {
            TrackerState::update(&path, |state| {
                let mut goal = Goal::new(&title);
                if let Some(date) = target_date {
                    goal = goal.with_target_date(date);
                }
                goal = goal.with_sort_order(state.goals.len() as i32);
                for milestone in &milestones {
                    goal.add_milestone(milestone);
                }
                state.add_goal(goal);
                Ok(())
            })?;
            println!("✓ Added goal '{}'", title);
        }

        GoalCommands::List => {
            let state = TrackerState::load(&path)?;
            if state.goals.is_empty() {
                println!("No goals yet. Add one with: vitalog goal add <title>");
                return Ok(());
            }
            let mut goals: Vec<_> = state.goals.values().collect();
            goals.sort_by_key(|g| g.sort_order);
            for goal in goals {
                let overdue = if goal.is_overdue(today) { " (overdue)" } else { "" };
                println!(
                    "{} {}  {:.0}%{}",
                    goal.status.emoji(),
                    goal.title,
                    goal.progress() * 100.0,
                    overdue
                );
            }
        }

        GoalCommands::DoneMilestone { goal, milestone } => {
            let now = Utc::now();
            TrackerState::update(&path, |state| {
                let target = state
                    .goals
                    .values_mut()
                    .find(|g| g.title.eq_ignore_ascii_case(&goal))
                    .ok_or_else(|| Error::Validation(format!("no goal named '{}'", goal)))?;
                let id = target
                    .milestones
                    .iter()
                    .find(|m| m.title.eq_ignore_ascii_case(&milestone))
                    .map(|m| m.id)
                    .ok_or_else(|| {
                        Error::Validation(format!("no milestone named '{}'", milestone))
                    })?;
                target.complete_milestone(id, now);
                Ok(())
            })?;
            println!("✓ Milestone '{}' completed", milestone);
        }
    }

    Ok(())
}

fn parse_med_status(raw: &str) -> Result<MedicationStatus> {
    match raw.to_lowercase().as_str() {
        "taken" => Ok(MedicationStatus::Taken),
        "skipped" => Ok(MedicationStatus::Skipped),
        "missed" => Ok(MedicationStatus::Missed),
        other => Err(Error::Validation(format!("unknown status: {}", other))),
    }
}

fn cmd_med(data_dir: &Path, command: MedCommands) -> Result<()> {
    let path = state_path(data_dir);

    match command {
        MedCommands::Add { name, dose, unit } => {
            TrackerState::update(&path, |state| {
                let med = Medication::new(&name, dose, &unit);
                state.medications.insert(med.id, med);
                Ok(())
            })?;
            println!("✓ Added medication '{}' ({} {})", name, dose, unit);
        }

        MedCommands::Log { name, status, note } => {
            let status = parse_med_status(&status)?;
            let state = TrackerState::load(&path)?;
            let med = state
                .medications
                .values()
                .find(|m| m.name.eq_ignore_ascii_case(&name))
                .ok_or_else(|| Error::Validation(format!("no medication named '{}'", name)))?;

            let mut log = MedicationLog::new(med.id, status, Utc::now());
            if let Some(note) = note {
                log = log.with_note(note);
            }

            let mut journal = JsonlJournal::new(journal_path(data_dir, "meds.jsonl"));
            journal.append(&log)?;
            println!(
                "{} {} {}",
                status.emoji(),
                med.name,
                status.display_name().to_lowercase()
            );
        }
    }

    Ok(())
}
