use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::info;
use medi_predict::config::PipelineConfig;
use medi_predict::models::{Diagnosis, PatientInput, VitalsInput};
use medi_predict::{Dataset, PredictionOutcome, generate_corpus, predict_disease, train};

/// Symptom-based disease prediction
#[derive(Parser, Debug)]
#[command(name = "medi-predict")]
#[command(version)]
#[command(about = "Generate training data, train the model and predict diseases from symptoms")]
struct Cli {
    /// JSON configuration file; flags override its values
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory holding the dataset and model artifacts
    #[arg(short, long, global = true, value_name = "DIR")]
    dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the synthetic training corpus
    Generate {
        /// Cases generated per disease
        #[arg(short = 'n', long)]
        samples: Option<usize>,
        /// Seed for reproducible generation
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Fit the scaler and classifier on the generated corpus
    Train,
    /// Predict diseases for reported symptoms
    Predict {
        /// Reported symptoms, comma separated
        #[arg(short, long, value_delimiter = ',')]
        symptoms: Vec<String>,
        #[arg(long, default_value_t = 25)]
        age: u32,
        #[arg(long, default_value = "Male")]
        gender: String,
        #[arg(long)]
        temperature: Option<f64>,
        #[arg(long)]
        systolic: Option<u32>,
        #[arg(long)]
        diastolic: Option<u32>,
        #[arg(long)]
        heart_rate: Option<u32>,
        /// History tokens such as "Current smoker", comma separated
        #[arg(long, value_delimiter = ',')]
        history: Vec<String>,
        /// Read the whole request from a JSON file instead of flags
        #[arg(long, value_name = "FILE", conflicts_with = "symptoms")]
        input: Option<PathBuf>,
        /// Number of diseases to report
        #[arg(short = 'k', long)]
        top_k: Option<usize>,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
}

fn print_diagnoses(diagnoses: &[Diagnosis]) {
    println!("\nTop Predictions:");
    for diagnosis in diagnoses {
        println!("- {}: {}", diagnosis.disease, diagnosis.confidence_percent());
        println!("    Urgency: {}", diagnosis.info.urgency);
        match diagnosis.doctors.first() {
            Some(doctor) => println!(
                "    Doctor: {} ({}, rating {:.1})",
                doctor.name, doctor.specialty, doctor.rating
            ),
            None => println!("    Doctor: none listed"),
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => PipelineConfig::from_file(path)
            .with_context(|| format!("failed to load configuration {}", path.display()))?,
        None => PipelineConfig::default(),
    };
    if let Some(dir) = cli.dir {
        config.artifacts.dir = dir;
    }

    match cli.command {
        Command::Generate { samples, seed } => {
            if let Some(samples) = samples {
                config.generator.samples_per_disease = samples;
            }
            if seed.is_some() {
                config.generator.seed = seed;
            }
            info!("{}", config.generator);

            let start = Instant::now();
            let dataset = generate_corpus(&config.generator);
            let path = config.artifacts.dataset_path();
            dataset
                .write_csv(&path)
                .with_context(|| format!("failed to write dataset {}", path.display()))?;
            info!(
                "Generated {} cases in {:?}",
                dataset.len(),
                start.elapsed()
            );
        }
        Command::Train => {
            let path = config.artifacts.dataset_path();
            let dataset = Dataset::read_csv(&path).with_context(|| {
                format!(
                    "failed to read dataset {}; run `medi-predict generate` first",
                    path.display()
                )
            })?;
            info!("{}", config.training);

            let (artifacts, report) = train(&dataset, &config.training)?;
            artifacts
                .save(&config.artifacts)
                .context("failed to save model artifacts")?;
            println!("{report}");
        }
        Command::Predict {
            symptoms,
            age,
            gender,
            temperature,
            systolic,
            diastolic,
            heart_rate,
            history,
            input,
            top_k,
            json,
        } => {
            let request: PatientInput = match input {
                Some(path) => {
                    let contents = std::fs::read_to_string(&path)
                        .with_context(|| format!("failed to read {}", path.display()))?;
                    serde_json::from_str(&contents)
                        .with_context(|| format!("invalid request in {}", path.display()))?
                }
                None => PatientInput::with_symptoms(symptoms)
                    .demographics(age, gender)
                    .vitals(VitalsInput {
                        temperature,
                        systolic,
                        diastolic,
                        heart_rate,
                    })
                    .history(history),
            };
            let top_k = top_k.unwrap_or(config.prediction.top_k);

            let outcome = predict_disease(&config.artifacts, &request, top_k)?;
            match (outcome, json) {
                (PredictionOutcome::Ranked(diagnoses), true) => {
                    println!("{}", serde_json::to_string_pretty(&diagnoses)?);
                }
                (PredictionOutcome::Ranked(diagnoses), false) => print_diagnoses(&diagnoses),
                (PredictionOutcome::ModelUnavailable { message }, true) => {
                    println!("{}", serde_json::json!({ "error": message }));
                }
                (PredictionOutcome::ModelUnavailable { message }, false) => println!("{message}"),
            }
        }
    }

    Ok(())
}
