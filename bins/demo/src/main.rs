//! Moneta demo
//!
//! Builds a money field from configuration, feeds it a submitted form post and
//! saves the result into an in-memory property bag.
//!
//! Usage: `moneta [FIELD_NAME] [POST_JSON_FILE]`
//!
//! The post file holds a flat JSON object such as
//! `{"Price[Amount]": "12.50", "Price[Currency]": "EUR"}`.

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use moneta_core::{FormContext, FormData, FormField, MoneyField, PropertyBag, ValidationResult};
use moneta_shared::AppConfig;

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moneta=debug,moneta_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;

    let mut args = std::env::args().skip(1);
    let name = args.next().unwrap_or_else(|| "Price".to_string());
    let post = match args.next() {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read form post from {path}"))?;
            serde_json::from_str::<FormData>(&text).context("Form post is not a flat JSON object")?
        }
        None => FormData::new(),
    };

    let form = FormContext::new("DemoForm");
    let mut field = MoneyField::configured(name.as_str(), name.as_str(), &config.money_field);
    field.set_form(&form);
    info!(
        field = %field.name(),
        selector = field.currency_field().is_selector(),
        locale = ?field.locale(),
        "money field ready"
    );

    field.load_submitted(&post);

    let mut result = ValidationResult::new();
    if !field.validate_values(&mut result) {
        for error in result.errors() {
            warn!(field = %error.field(), code = error.error_code(), "{error}");
        }
    }

    let mut bag = PropertyBag::new();
    field.save_into(&mut bag)?;
    info!(value = %field.data_value(), complete = field.data_value().is_complete(), "saved");

    println!("{bag:#?}");
    Ok(())
}
