//! CLI interface for dropout-predictor

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use crate::classifier::RuleSet;
use crate::config::Config;
use crate::error::PredictorError;
use crate::predictor::Predictor;
use crate::store::SqliteStudentStore;
use crate::types::{Evaluation, FamilyIncome, StudentAttributes, StudentRecord};

#[derive(Parser)]
#[command(name = "dropout-predictor")]
#[command(about = "Classify students as Promoted or Dropped Out and keep a record of each", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the config file (default: platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Student database file, overrides the config
    #[arg(long, global = true, env = "DROPOUT_PREDICTOR_DB")]
    database: Option<PathBuf>,

    /// Rule set to classify with, overrides the config
    #[arg(long, global = true, value_enum)]
    rule_set: Option<RuleSet>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a student without saving
    Predict(StudentArgs),
    /// Classify a student and save the record
    Submit(StudentArgs),
    /// Show saved student records
    List {
        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show record counts by status
    Stats,
    /// Create the database and table if missing
    Init,
    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,
        /// Set the default rule set
        #[arg(long, value_enum)]
        set_rule_set: Option<RuleSet>,
        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[derive(Args)]
struct StudentArgs {
    /// Student ID (positive integer, must be unique when saving)
    #[arg(long, allow_negative_numbers = true)]
    id: i64,
    /// School satisfaction (1-5)
    #[arg(long, allow_negative_numbers = true)]
    satisfaction: f64,
    /// Attendance rate (%)
    #[arg(long, allow_negative_numbers = true)]
    attendance: f64,
    /// Failed courses (0-10)
    #[arg(long, allow_negative_numbers = true)]
    failed: i64,
    /// Commute time in minutes (0-120)
    #[arg(long, allow_negative_numbers = true)]
    commute: i64,
    /// Disciplinary cases (0-10)
    #[arg(long, allow_negative_numbers = true)]
    disciplinary: i64,
    /// Homework completion (%)
    #[arg(long, allow_negative_numbers = true)]
    homework: f64,
    /// Family income bracket
    #[arg(long, value_enum)]
    income: Option<FamilyIncome>,
}

impl From<StudentArgs> for StudentAttributes {
    fn from(args: StudentArgs) -> Self {
        StudentAttributes {
            student_id: args.id,
            school_satisfaction: args.satisfaction,
            attendance_rate: args.attendance,
            failed_courses: args.failed,
            commute_time_minutes: args.commute,
            disciplinary_cases: args.disciplinary,
            homework_completion: args.homework,
            family_income: args.income,
        }
    }
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None => crate::config::config_path()?,
    };

    if let Commands::Config { show, set_rule_set, reset } = cli.command {
        if reset {
            crate::config::reset_config(&config_path)?;
        } else if let Some(rule_set) = set_rule_set {
            crate::config::set_rule_set(&config_path, rule_set)?;
        } else if show {
            let config = Config::load_from(&config_path)?;
            crate::config::show_config(&config, &config_path);
        } else {
            println!("Configuration options:");
            println!("  --show                  Display current configuration");
            println!("  --set-rule-set <name>   Set the default rule set (reasons, conjunctive)");
            println!("  --reset                 Reset configuration to defaults");
        }
        return Ok(());
    }

    let mut config = Config::load_from(&config_path)?;
    if let Some(database) = cli.database {
        config.store.database_path = database;
    }
    if let Some(rule_set) = cli.rule_set {
        config.classifier.rule_set = rule_set;
    }

    let store = SqliteStudentStore::open(&config.store)
        .await
        .with_context(|| format!("Failed to open student database {}", config.store.database_path.display()))?;
    let predictor = Predictor::new(config.classifier.rule_set, Arc::new(store));

    match cli.command {
        Commands::Predict(args) => {
            let attributes: StudentAttributes = args.into();
            let evaluation = predictor.evaluate(&attributes)?;
            print_evaluation(&evaluation);
        }
        Commands::Submit(args) => {
            let attributes: StudentAttributes = args.into();
            match predictor.submit(&attributes).await {
                Ok(evaluation) => {
                    print_evaluation(&evaluation);
                    println!("Student data saved successfully!");
                }
                Err(PredictorError::DuplicateKey { student_id }) => {
                    anyhow::bail!("Student ID {} already exists. Please use a unique ID.", student_id);
                }
                Err(e) => return Err(e.into()),
            }
        }
        Commands::List { json } => {
            let records = predictor.list_all().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                print_records(&records);
            }
        }
        Commands::Stats => {
            let stats = predictor.stats().await?;
            println!("Student Records");
            println!("===============");
            println!("  Total:       {}", stats.total);
            println!("  Promoted:    {}", stats.promoted);
            println!("  Dropped Out: {}", stats.dropped_out);
        }
        Commands::Init => {
            // Opening the store already created the table
            println!("Student database ready at {}", config.store.database_path.display());
        }
        Commands::Config { .. } => unreachable!("handled before the store is opened"),
    }

    Ok(())
}

fn print_evaluation(evaluation: &Evaluation) {
    println!("Status: {}", evaluation.status);
    if !evaluation.reasons.is_empty() {
        println!("Reason(s): {}", evaluation.reasons.join(", "));
    }
}

fn print_records(records: &[StudentRecord]) {
    if records.is_empty() {
        println!("No data found in the database yet.");
        return;
    }

    println!(
        "{:>6}  {:>12}  {:>10}  {:>6}  {:>7}  {:>12}  {:>8}  {:>6}  {}",
        "ID", "Satisfaction", "Attendance", "Failed", "Commute", "Disciplinary", "Homework", "Income", "Status"
    );
    for record in records {
        let a = record.attributes();
        println!(
            "{:>6}  {:>12}  {:>10}  {:>6}  {:>7}  {:>12}  {:>8}  {:>6}  {}",
            a.student_id,
            a.school_satisfaction,
            a.attendance_rate,
            a.failed_courses,
            a.commute_time_minutes,
            a.disciplinary_cases,
            a.homework_completion,
            a.family_income.map(|i| i.as_str()).unwrap_or("-"),
            record.status(),
        );
    }
}
