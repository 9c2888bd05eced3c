//! Premium Quote CLI
//!
//! Without a subcommand, prices the sample auto and life clients.
//!
//! ```bash
//! premium_quote
//! premium_quote quote --type auto --data '{"anio_auto": 2020}' --discounts 1
//! premium_quote quote --request '{"policy_type": "vida", "data": {"edad": 40}}' --format json
//! ```

use anyhow::{ensure, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use premium_quote::{
    DataRecord, FormulaFactory, NewClientDiscount, Policy, PremiumSource, QuoteRequest,
};

#[derive(Parser)]
#[command(name = "premium_quote")]
#[command(version)]
#[command(about = "Quote auto and life insurance premiums", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a single quote
    Quote {
        /// Product label ("auto" or "vida")
        #[arg(short = 't', long = "type", required_unless_present = "request")]
        policy_type: Option<String>,

        /// Client data as a JSON object, e.g. '{"edad": 40}'
        #[arg(short, long, conflicts_with = "request")]
        data: Option<String>,

        /// Number of new-client discounts to apply
        #[arg(long, default_value_t = 0, conflicts_with = "request")]
        discounts: u32,

        /// Full quote request as JSON
        #[arg(long, conflicts_with = "policy_type")]
        request: Option<String>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        None => run_sample(),
        Some(Commands::Quote { policy_type, data, discounts, request, format }) => {
            let request = match request {
                Some(json) => serde_json::from_str::<QuoteRequest>(&json)
                    .context("Failed to parse quote request")?,
                None => {
                    let data = match data {
                        Some(json) => serde_json::from_str::<DataRecord>(&json)
                            .context("Failed to parse client data")?,
                        None => DataRecord::new(),
                    };
                    let policy_type = policy_type.context("Missing policy type")?;
                    QuoteRequest::new(policy_type, data).with_discounts(discounts)
                }
            };
            run_quote(&request, format)
        }
    }
}

/// Sample clients: a 2020 vehicle (with and without discount) and a 40-year-old
fn run_sample() -> Result<()> {
    let auto_formula = FormulaFactory::create_from_label("auto")?;
    let life_formula = FormulaFactory::create_from_label("vida")?;

    let auto = Policy::new(auto_formula, DataRecord::new().with("anio_auto", 2020.0));
    let life = Policy::new(life_formula, DataRecord::new().with("edad", 40.0));
    let auto_discounted = NewClientDiscount::new(&auto);

    println!("Auto premium: {:.2}", auto.calculate());
    println!("Auto premium with new-client discount: {:.2}", auto_discounted.calculate());
    println!("Life premium: {:.2}", life.calculate());
    Ok(())
}

fn run_quote(request: &QuoteRequest, format: OutputFormat) -> Result<()> {
    let quote = request
        .price()
        .with_context(|| format!("Failed to price '{}' quote", request.policy_type))?;

    match format {
        OutputFormat::Text => {
            println!("Policy type: {}", quote.policy_type);
            println!("Base premium: {:.2}", quote.base_premium);
            println!("Discount layers: {}", quote.discount_layers);
            println!("Premium: {:.2}", quote.premium);
        }
        OutputFormat::Json => {
            ensure!(
                quote.is_finite(),
                "Premium is not a finite number (base {}, discounted {}); use --format text",
                quote.base_premium,
                quote.premium
            );
            println!("{}", serde_json::to_string_pretty(&quote)?);
        }
    }
    Ok(())
}
