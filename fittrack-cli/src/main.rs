use std::{error::Error, iter};

use clap::{Parser, Subcommand};
use fittrack_client::{search_exercises, ExerciseClient, ExerciseDbConfig};
use fittrack_model::{compute, exercise::BodyPartFilter, validate, BiometricInput, BmrResult, RawBiometricInput};
use itertools::Itertools;
use log::info;
use serde::Serialize;

#[derive(Parser)]
#[command(name = "fittrack")]
#[command(about = "BMR calculator and gym exercise search")]
struct Args {
    /// Path to log4rs configuration file
    #[arg(long, default_value = "log4rs.yml")]
    log_config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Calculate basal metabolic rate with the Mifflin-St Jeor equation
    Bmr {
        /// Age in years
        #[arg(long)]
        age: Option<String>,

        /// Height in centimetres
        #[arg(long)]
        height: Option<String>,

        /// Weight in kilograms
        #[arg(long)]
        weight: Option<String>,

        /// male or female
        #[arg(long)]
        sex: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// List body parts known to the exercise database
    BodyParts,
    /// Search exercises by name
    Exercises {
        /// Part of the exercise name, case insensitive
        #[arg(default_value = "")]
        term: String,

        /// Restrict the search to one body part
        #[arg(long, default_value = "all")]
        body_part: String,
    },
}

#[derive(Serialize)]
struct BmrReport {
    #[serde(flatten)]
    input: BiometricInput,
    calories_per_day: BmrResult,
}

/// Same steps as `fittrack_model::calculate`, keeping the validated input
/// around for the JSON report.
fn render_bmr(raw: &RawBiometricInput, json: bool) -> Result<String, Box<dyn Error>> {
    let input = validate(raw)?;
    let result = compute(&input);
    info!("BMR for {:?} is {}", input, result);

    if json {
        let report = BmrReport {
            input,
            calories_per_day: result,
        };
        Ok(serde_json::to_string(&report)?)
    } else {
        Ok(format!("BMR: {}", result))
    }
}

async fn render_body_parts(client: &dyn ExerciseClient) -> Result<String, Box<dyn Error>> {
    let parts = client.body_parts().await?;
    info!("Fetched {} body parts", parts.len());
    Ok(iter::once("all".to_owned()).chain(parts).join("\n"))
}

async fn render_exercises(
    client: &dyn ExerciseClient,
    term: &str,
    body_part: &str,
) -> Result<String, Box<dyn Error>> {
    let filter: BodyPartFilter = body_part.parse()?;
    let found = search_exercises(client, term, &filter).await?;
    if found.is_empty() {
        return Ok("No exercises found".to_owned());
    }
    Ok(found
        .iter()
        .map(|e| format!("{} | {} | {} | {}", e.name, e.body_part, e.equipment, e.target))
        .join("\n"))
}

async fn run(args: Args) -> Result<String, Box<dyn Error>> {
    match args.command {
        Command::Bmr {
            age,
            height,
            weight,
            sex,
            json,
        } => render_bmr(
            &RawBiometricInput {
                age,
                height,
                weight,
                sex,
            },
            json,
        ),
        Command::BodyParts => {
            let client = fittrack_client::create(ExerciseDbConfig::from_env()?);
            render_body_parts(&client).await
        }
        Command::Exercises { term, body_part } => {
            let client = fittrack_client::create(ExerciseDbConfig::from_env()?);
            render_exercises(&client, &term, &body_part).await
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    log4rs::init_file(&args.log_config, Default::default())?;

    println!("{}", run(args).await?);
    Ok(())
}
