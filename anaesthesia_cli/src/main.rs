use anaesthesia_core::*;
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Cap on reprompt attempts per question, so redirected input that never
/// becomes valid cannot spin forever.
const MAX_PROMPT_ATTEMPTS: u32 = 100;

#[derive(Parser)]
#[command(name = "artidose")]
#[command(about = "Articaine anaesthesia evaluator (Ultracain)", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate contraindications and compute the maximum dosage (default)
    Check {
        /// Patient condition, repeatable; skips the interactive questionnaire
        #[arg(long = "condition", conflicts_with = "no_conditions")]
        conditions: Vec<String>,

        /// Assume the patient has no conditions (skips the questionnaire)
        #[arg(long)]
        no_conditions: bool,

        /// Body weight in kg; skips the weight prompt
        #[arg(long)]
        weight: Option<f64>,

        /// Emit dosage results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the formulation catalog
    List,
}

fn main() -> Result<()> {
    // Initialize logging
    anaesthesia_core::logging::init();

    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let catalog = build_catalog(&config)?;

    match cli.command {
        Some(Commands::Check {
            conditions,
            no_conditions,
            weight,
            json,
        }) => cmd_check(&catalog, conditions, no_conditions, weight, json),
        Some(Commands::List) => cmd_list(&catalog),
        None => {
            // Default to the interactive "check" command
            cmd_check(&catalog, vec![], false, None, false)
        }
    }
}

fn cmd_check(
    catalog: &Catalog,
    conditions: Vec<String>,
    no_conditions: bool,
    weight: Option<f64>,
    json: bool,
) -> Result<()> {
    // JSON is a scripting surface; interactive prompts would corrupt the
    // stream, so the condition source must come from flags.
    if json && !no_conditions && conditions.is_empty() {
        return Err(Error::Input(
            "--json requires --no-conditions or at least one --condition".into(),
        ));
    }

    let patient_conditions: PatientConditions = if no_conditions {
        PatientConditions::new()
    } else if !conditions.is_empty() {
        conditions.into_iter().collect()
    } else {
        prompt_patient_conditions(catalog)?
    };

    let allowed = allowed_formulations(catalog, &patient_conditions);
    tracing::debug!(
        "{} of {} formulations allowed",
        allowed.len(),
        catalog.formulations.len()
    );

    if allowed.is_empty() {
        if json {
            println!("[]");
        } else {
            println!();
            println!("Decision:");
            println!("No anaesthesia with Articaine is allowed based on the given conditions.");
        }
        return Ok(());
    }

    if !json {
        println!();
        println!("Decision:");
        println!("The following anaesthesia types are allowed:");
        for formulation in &allowed {
            println!("- {}", formulation.name);
        }
    }

    let weight_kg = match weight {
        Some(value) => check_weight(value)?,
        None if json => {
            return Err(Error::Input(
                "--json requires --weight when formulations are allowed".into(),
            ))
        }
        None => prompt_weight()?,
    };

    let results = max_dosage(weight_kg, &allowed);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        println!();
        println!("Maximum allowable dosage:");
        for result in &results {
            println!("{}", result.display_line());
        }
    }

    Ok(())
}

fn cmd_list(catalog: &Catalog) -> Result<()> {
    for formulation in &catalog.formulations {
        println!(
            "{} ({} mg/kg)",
            formulation.name, formulation.max_dosage_per_kg
        );
        for condition in &formulation.contraindications {
            println!("  - {}", condition);
        }
        println!();
    }
    Ok(())
}

/// Ask one y/n question per unique contraindication.
///
/// Invalid answers are reprompted; the same condition is never asked twice
/// even though several formulations list it.
fn prompt_patient_conditions(catalog: &Catalog) -> Result<PatientConditions> {
    let mut patient_conditions = PatientConditions::new();

    println!("Please answer with 'y' for yes and 'n' for no.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    for condition in catalog.unique_contraindications() {
        let mut answered = false;

        for _ in 0..MAX_PROMPT_ATTEMPTS {
            print!("{}: ", condition);
            io::stdout().flush()?;

            let line = match lines.next() {
                Some(line) => line?,
                None => {
                    return Err(Error::Input(
                        "unexpected end of input during questionnaire".into(),
                    ))
                }
            };

            match line.trim().to_lowercase().as_str() {
                "y" => {
                    patient_conditions.insert(condition.clone());
                    answered = true;
                    break;
                }
                "n" => {
                    answered = true;
                    break;
                }
                _ => println!("Invalid input. Please enter 'y' for yes and 'n' for no."),
            }
        }

        if !answered {
            return Err(Error::Input("too many invalid answers".into()));
        }
    }

    Ok(patient_conditions)
}

/// Prompt for body weight until a valid value is supplied.
fn prompt_weight() -> Result<f64> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    for _ in 0..MAX_PROMPT_ATTEMPTS {
        println!();
        print!("Enter the patient's body weight in kg: ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => {
                return Err(Error::Input(
                    "unexpected end of input while reading weight".into(),
                ))
            }
        };

        match parse_weight(&line) {
            Ok(weight) => return Ok(weight),
            Err(err) => println!("{}", err),
        }
    }

    Err(Error::Input("too many invalid weight inputs".into()))
}
