use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, info_span};

use catalog_model::Product;
use catalog_normalization::{
    ProductForm, SubmissionPlan, attach_owner, form_from_product, plan_submission,
    product_from_form, sync_from_json, to_creation,
};
use catalog_validate::{ValidationReport, validate_product};

use crate::cli::{AttachOwnerArgs, InputArgs, InputShape, NormalizeArgs, OutputShape, SyncArgs};
use crate::config::CatalogConfig;

/// Read a JSON file into a value.
pub fn read_json(path: &Path) -> Result<Value> {
    let content =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("parse JSON in {}", path.display()))
}

/// Load the canonical record described by `args`.
pub fn load_product(args: &InputArgs) -> Result<Product> {
    let value = read_json(&args.input)?;
    let product = match args.from {
        InputShape::Form => {
            let form: ProductForm = serde_json::from_value(value)
                .with_context(|| format!("{} is not a product form", args.input.display()))?;
            product_from_form(&form)
        }
        InputShape::Document => serde_json::from_value(value)
            .with_context(|| format!("{} is not a product document", args.input.display()))?,
    };
    Ok(product)
}

pub fn run_normalize(args: &NormalizeArgs) -> Result<Value> {
    let span = info_span!("normalize", input = %args.input.input.display());
    let _guard = span.enter();
    let product = load_product(&args.input)?;
    let value = match args.to {
        OutputShape::Canonical => serde_json::to_value(&product)?,
        OutputShape::Form => serde_json::to_value(form_from_product(&product))?,
        OutputShape::Create => serde_json::to_value(to_creation(&product))?,
    };
    info!(product = %product.name, to = ?args.to, "normalized product");
    Ok(value)
}

pub fn run_sync(args: &SyncArgs) -> Result<Value> {
    let span = info_span!("sync", response = %args.response.display());
    let _guard = span.enter();
    let response = read_json(&args.response)?;
    let prior: Option<Product> = match &args.prior {
        Some(path) => Some(
            serde_json::from_value(read_json(path)?)
                .with_context(|| format!("{} is not a product document", path.display()))?,
        ),
        None => None,
    };
    let synced = sync_from_json(&response, prior.as_ref());
    info!(product = %synced.name, persisted = synced.is_persisted(), "synced response");
    Ok(serde_json::to_value(&synced)?)
}

pub fn run_attach_owner(args: &AttachOwnerArgs) -> Result<Value> {
    let product = load_product(&args.input)?;
    let owned = attach_owner(&product, &args.owner)
        .with_context(|| format!("attach owner to {}", args.input.input.display()))?;
    info!(owner = %args.owner, "attached owner");
    Ok(serde_json::to_value(&owned)?)
}

pub fn run_validate(args: &InputArgs, config: &CatalogConfig) -> Result<ValidationReport> {
    let span = info_span!("validate", input = %args.input.display());
    let _guard = span.enter();
    let product = load_product(args)?;
    Ok(validate_product(&product, &config.validation))
}

/// Route description printed by `plan`.
#[derive(Debug, Serialize)]
pub struct PlanOutput {
    pub action: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub payload: Value,
}

pub fn run_plan(args: &InputArgs) -> Result<PlanOutput> {
    let product = load_product(args)?;
    let output = match plan_submission(&product) {
        SubmissionPlan::Create(shape) => PlanOutput {
            action: "create",
            id: None,
            payload: serde_json::to_value(shape.into_document())?,
        },
        SubmissionPlan::Update { id, product } => PlanOutput {
            action: "update",
            id: Some(id.to_hex()),
            payload: serde_json::to_value(&product)?,
        },
    };
    info!(action = output.action, "planned submission");
    Ok(output)
}

/// Write `value` as JSON to `output`, or to stdout when no path is given.
pub fn write_output<T: Serialize>(value: &T, output: Option<&Path>, pretty: bool) -> Result<()> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    match output {
        Some(path) => {
            fs::write(path, format!("{text}\n"))
                .with_context(|| format!("write {}", path.display()))?;
            info!(path = %path.display(), "wrote output");
        }
        None => println!("{text}"),
    }
    Ok(())
}
