//! Command tests over files on disk.

use std::fs;
use std::path::{Path, PathBuf};

use catalog_cli::cli::{
    AttachOwnerArgs, InputArgs, InputShape, NormalizeArgs, OutputShape, SyncArgs,
};
use catalog_cli::commands::{
    run_attach_owner, run_normalize, run_plan, run_sync, run_validate, write_output,
};
use catalog_cli::config::CatalogConfig;
use serde_json::{Value, json};
use tempfile::TempDir;

fn write_json(dir: &TempDir, name: &str, value: &Value) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    path
}

fn input(path: &Path, from: InputShape) -> InputArgs {
    InputArgs {
        input: path.to_path_buf(),
        from,
    }
}

fn soy_sauce_form() -> Value {
    json!({
        "name": "Soy Sauce",
        "category": "Condiments",
        "description": "Naturally brewed",
        "pricePerUnit": 4.5,
        "unitType": "bottle",
        "minimumOrderQuantity": 10,
        "dailyCapacity": 500,
        "currentAvailable": 120,
        "leadTime": 3,
        "leadTimeUnit": "days",
        "image": "https://cdn.example.com/soy.png",
        "productType": "Food Product",
        "manufacturer": "Acme",
        "flavorType": ["Umami"],
        "ingredients": "Soy"
    })
}

#[test]
fn normalize_form_to_creation_payload() {
    let dir = TempDir::new().unwrap();
    let path = write_json(&dir, "form.json", &soy_sauce_form());
    let args = NormalizeArgs {
        input: input(&path, InputShape::Form),
        to: OutputShape::Create,
    };
    let value = run_normalize(&args).unwrap();
    assert_eq!(value["brand"], "Acme");
    assert_eq!(value["price"], 4.5);
    assert_eq!(value["ingredients"], json!(["Soy"]));
    assert_eq!(value["allergens"], json!([]));
}

#[test]
fn normalize_document_to_form() {
    let dir = TempDir::new().unwrap();
    let path = write_json(
        &dir,
        "doc.json",
        &json!({"name": "Tea", "manufacturerName": "Leafy", "countInStock": 4}),
    );
    let args = NormalizeArgs {
        input: input(&path, InputShape::Document),
        to: OutputShape::Form,
    };
    let value = run_normalize(&args).unwrap();
    assert_eq!(value["manufacturer"], "Leafy");
    assert_eq!(value["currentAvailable"], 4);
}

#[test]
fn unreadable_input_names_the_file() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.json");
    let args = NormalizeArgs {
        input: input(&missing, InputShape::Form),
        to: OutputShape::Canonical,
    };
    let error = run_normalize(&args).unwrap_err();
    assert!(format!("{error:#}").contains("missing.json"));
}

#[test]
fn sync_merges_response_into_prior() {
    let dir = TempDir::new().unwrap();
    let prior = write_json(
        &dir,
        "prior.json",
        &json!({"name": "Soy Sauce", "manufacturer": "Acme", "pricePerUnit": 4.5}),
    );
    let response = write_json(
        &dir,
        "response.json",
        &json!({"_id": "507f1f77bcf86cd799439011", "price": 5.0}),
    );
    let value = run_sync(&SyncArgs {
        response,
        prior: Some(prior),
    })
    .unwrap();
    assert_eq!(value["_id"], "507f1f77bcf86cd799439011");
    assert_eq!(value["pricePerUnit"], 5.0);
    assert_eq!(value["price"], 5.0);
    assert_eq!(value["brand"], "Acme");
}

#[test]
fn attach_owner_rejects_malformed_id() {
    let dir = TempDir::new().unwrap();
    let path = write_json(&dir, "doc.json", &json!({"name": "Honey"}));
    let args = AttachOwnerArgs {
        input: input(&path, InputShape::Document),
        owner: "not-a-valid-id".to_string(),
    };
    let error = run_attach_owner(&args).unwrap_err();
    assert!(format!("{error:#}").contains("invalid identifier"));

    let args = AttachOwnerArgs {
        owner: "507f1f77bcf86cd799439011".to_string(),
        ..args
    };
    assert_eq!(run_attach_owner(&args).unwrap()["owner"], "507f1f77bcf86cd799439011");
}

#[test]
fn validate_uses_configured_options() {
    let dir = TempDir::new().unwrap();
    let mut form = soy_sauce_form();
    form["image"] = json!("");
    let path = write_json(&dir, "form.json", &form);
    let args = input(&path, InputShape::Form);

    let report = run_validate(&args, &CatalogConfig::default()).unwrap();
    assert!(report.has_errors());

    let config_path = dir.path().join("catalog.toml");
    fs::write(&config_path, "[validation]\nrequire_image = false\n").unwrap();
    let config = CatalogConfig::load(&config_path).unwrap();
    let report = run_validate(&args, &config).unwrap();
    assert!(report.is_clean(), "{:?}", report.issues);
}

#[test]
fn invalid_config_is_reported_with_its_path() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("broken.toml");
    fs::write(&config_path, "[validation\n").unwrap();
    let error = CatalogConfig::load(&config_path).unwrap_err();
    assert!(format!("{error:#}").contains("broken.toml"));
}

#[test]
fn plan_routes_on_server_id() {
    let dir = TempDir::new().unwrap();
    let new = write_json(&dir, "new.json", &json!({"id": 17, "name": "Jam", "sku": "J-1"}));
    let plan = run_plan(&input(&new, InputShape::Document)).unwrap();
    assert_eq!(plan.action, "create");
    assert!(plan.id.is_none());
    assert!(plan.payload.get("id").is_none());
    assert!(plan.payload.get("sku").is_none());

    let stored = write_json(
        &dir,
        "stored.json",
        &json!({"_id": "507f1f77bcf86cd799439011", "name": "Jam"}),
    );
    let plan = run_plan(&input(&stored, InputShape::Document)).unwrap();
    assert_eq!(plan.action, "update");
    assert_eq!(plan.id.as_deref(), Some("507f1f77bcf86cd799439011"));
}

#[test]
fn output_file_receives_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.json");
    write_output(&json!({"name": "Jam"}), Some(&path), false).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "{\"name\":\"Jam\"}\n");
}
