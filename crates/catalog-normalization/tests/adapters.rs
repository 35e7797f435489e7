//! Form ⇄ canonical conversion and variant merging.

use catalog_model::{
    BeverageAttributes, FoodAttributes, LeadTime, LegacyId, ObjectId, OtherAttributes, Product,
    ProductType, VariantBlock,
};
use catalog_normalization::{
    ProductForm, form_from_product, merge_variant_blocks, product_from_form, to_creation,
};
use serde_json::{Value, json};

fn form(value: Value) -> ProductForm {
    serde_json::from_value(value).expect("form parses")
}

fn soy_sauce_form() -> ProductForm {
    form(json!({
        "name": "Soy Sauce",
        "category": "Condiments",
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
        "ingredients": ["Soy", "Salt"]
    }))
}

#[test]
fn food_form_becomes_fully_aliased_creation_shape() {
    let product = product_from_form(&soy_sauce_form());
    let creation = serde_json::to_value(to_creation(&product)).unwrap();

    assert_eq!(creation["manufacturer"], "Acme");
    assert_eq!(creation["manufacturerName"], "Acme");
    assert_eq!(creation["brand"], "Acme");
    assert_eq!(creation["pricePerUnit"], 4.5);
    assert_eq!(creation["price"], 4.5);
    assert_eq!(creation["currentAvailable"], 120);
    assert_eq!(creation["countInStock"], 120);
    assert_eq!(creation["productType"], "Food Product");
    assert_eq!(creation["flavorType"], json!(["Umami"]));
    assert_eq!(creation["ingredients"], json!(["Soy", "Salt"]));
    assert_eq!(creation["allergens"], json!([]));
    assert_eq!(creation["usage"], json!([]));
    assert_eq!(creation["foodProductData"]["ingredients"], json!(["Soy", "Salt"]));
    assert!(creation.get("_id").is_none());
}

#[test]
fn manufacturer_name_and_scalar_flavor_are_canonicalized() {
    let product = product_from_form(&form(json!({
        "name": "Soy Sauce",
        "productType": "Food Product",
        "manufacturerName": "Acme",
        "pricePerUnit": 4.5,
        "flavorType": "Umami"
    })));
    assert_eq!(product.manufacturer.as_deref(), Some("Acme"));
    assert_eq!(product.brand(), Some("Acme"));
    assert_eq!(product.price(), 4.5);
    assert_eq!(product.food().unwrap().flavor_type(), ["Umami".to_string()]);

    let wire = serde_json::to_value(&product).unwrap();
    assert_eq!(wire["brand"], "Acme");
    assert_eq!(wire["price"], 4.5);
    assert_eq!(wire["flavorType"], json!(["Umami"]));
}

#[test]
fn deprecated_names_fill_the_canonical_slots() {
    let product = product_from_form(&form(json!({
        "name": "Tea",
        "brand": "Leafy",
        "price": 2.0,
        "countInStock": 7
    })));
    assert_eq!(product.manufacturer.as_deref(), Some("Leafy"));
    assert_eq!(product.price_per_unit, 2.0);
    assert_eq!(product.current_available, 7);
}

#[test]
fn blank_manufacturer_falls_back_to_later_aliases() {
    let product = product_from_form(&form(json!({
        "manufacturer": "",
        "manufacturerName": "  ",
        "brand": "Acme"
    })));
    assert_eq!(product.manufacturer.as_deref(), Some("Acme"));
}

#[test]
fn mistyped_values_are_treated_as_absent() {
    let product = product_from_form(&form(json!({
        "name": "Oats",
        "pricePerUnit": "cheap",
        "price": 3.25,
        "dailyCapacity": {"per": "day"},
        "sustainable": "yes please"
    })));
    assert_eq!(product.price_per_unit, 3.25);
    assert_eq!(product.daily_capacity, 0);
    assert!(!product.sustainable);
}

#[test]
fn scalar_list_input_is_wrapped() {
    let product = product_from_form(&form(json!({
        "productType": "Food Product",
        "ingredients": "Salt",
        "allergens": ""
    })));
    let food = product.food().expect("food block");
    assert_eq!(food.ingredients(), ["Salt".to_string()]);
    assert!(food.allergens().is_empty());
}

#[test]
fn non_food_form_keeps_only_the_active_block() {
    let product = product_from_form(&form(json!({
        "productType": "Beverage Product",
        "beverageProductData": {"alcoholContent": 4.8, "carbonated": true},
        "otherProductData": {"specifications": {"color": "red"}}
    })));
    assert_eq!(product.product_type, ProductType::Beverage);
    let Some(VariantBlock::Beverage(block)) = &product.variant else {
        panic!("expected a beverage block, got {:?}", product.variant);
    };
    assert_eq!(block.alcohol_content, Some(4.8));
    assert_eq!(block.carbonated, Some(true));
}

#[test]
fn non_food_form_without_block_gets_none() {
    let product = product_from_form(&form(json!({"productType": "Packaging Product"})));
    assert_eq!(product.product_type, ProductType::Packaging);
    assert!(product.variant.is_none());
}

#[test]
fn form_round_trip_preserves_the_record() {
    let original = product_from_form(&soy_sauce_form());
    let form = form_from_product(&original);

    assert_eq!(form.manufacturer, "Acme");
    assert_eq!(form.manufacturer_name.as_deref(), Some("Acme"));
    assert_eq!(form.brand.as_deref(), Some("Acme"));
    assert_eq!(form.price, Some(4.5));
    assert_eq!(form.count_in_stock, Some(120));
    assert_eq!(form.food.ingredients(), ["Soy".to_string(), "Salt".to_string()]);
    assert!(form.food_product_data.is_none());

    assert_eq!(product_from_form(&form), original);
}

#[test]
fn form_round_trip_keeps_identity_and_media() {
    let owner: ObjectId = "64b7f3a2c9e77a0012345678".parse().unwrap();
    let original = Product {
        server_id: Some("507f1f77bcf86cd799439011".parse().unwrap()),
        legacy_id: Some(LegacyId(1712)),
        owner: Some(owner),
        name: "Crates".to_string(),
        description: "Stackable".to_string(),
        unit_type: "piece".to_string(),
        minimum_order_quantity: 4,
        daily_capacity: 90,
        image: "https://cdn.example.com/crate.png".to_string(),
        images: vec!["https://cdn.example.com/crate-side.png".to_string()],
        sku: Some("CR-01".to_string()),
        manufacturer: Some("Boxworks".to_string()),
        product_type: ProductType::Packaging,
        ..Default::default()
    };

    let form = form_from_product(&original);
    assert_eq!(form.owner, Some(owner));
    assert_eq!(form.legacy_id, Some(LegacyId(1712)));
    assert_eq!(form.sku.as_deref(), Some("CR-01"));

    let back = product_from_form(&form);
    assert_eq!(back.owner, Some(owner));
    assert_eq!(back.legacy_id.map(|id| id.get()), Some(1712));
    assert_eq!(back.sku.as_deref(), Some("CR-01"));
    assert_eq!(back.images, original.images);
    assert_eq!(back, original);
}

#[test]
fn food_record_without_block_gains_an_empty_one() {
    let original = Product {
        name: "Rice".to_string(),
        product_type: ProductType::Food,
        variant: None,
        ..Default::default()
    };
    let back = product_from_form(&form_from_product(&original));
    assert_eq!(
        back.variant,
        Some(VariantBlock::Food(FoodAttributes::default()).normalized())
    );

    let again = product_from_form(&form_from_product(&back));
    assert_eq!(again, back);
}

#[test]
fn shared_list_fields_alone_do_not_make_a_form_food() {
    let form = form(json!({"name": "Jars", "usage": ["storage"]}));
    assert_eq!(form.effective_product_type(), ProductType::Other);

    let form = self::form(json!({"name": "Jam", "usage": ["spread"], "foodType": "Preserve"}));
    assert_eq!(form.effective_product_type(), ProductType::Food);
}

#[test]
fn form_for_a_new_record_has_defined_inputs() {
    let form = form_from_product(&Product::default());
    assert_eq!(form.name, "");
    assert_eq!(form.price_per_unit, Some(0.0));
    assert_eq!(form.lead_time, Some(0));
    assert_eq!(form.product_type, Some(ProductType::Other));
    assert!(form.images.is_empty());
}

#[test]
fn merge_copies_the_block_and_keeps_other_fields() {
    let source = Product {
        product_type: ProductType::Beverage,
        variant: Some(VariantBlock::Beverage(BeverageAttributes {
            alcohol_content: Some(0.0),
            ..Default::default()
        })),
        ..Default::default()
    };
    let target = Product {
        name: "Lemonade".to_string(),
        lead_time: LeadTime::new(2, "days"),
        product_type: ProductType::Other,
        variant: Some(VariantBlock::Other(OtherAttributes::default())),
        ..Default::default()
    };

    let merged = merge_variant_blocks(&source, &target);
    assert_eq!(merged.name, "Lemonade");
    assert_eq!(merged.lead_time, LeadTime::new(2, "days"));
    assert_eq!(merged.product_type, ProductType::Beverage);
    assert!(matches!(merged.variant, Some(VariantBlock::Beverage(_))));
    assert_eq!(target.product_type, ProductType::Other);
}

#[test]
fn merge_without_source_block_returns_target() {
    let target = Product {
        name: "Rice".to_string(),
        product_type: ProductType::Food,
        variant: Some(VariantBlock::Food(FoodAttributes::default()).normalized()),
        ..Default::default()
    };
    assert_eq!(merge_variant_blocks(&Product::default(), &target), target);
}
