//! Category-specific attribute blocks.
//!
//! Each block is an independent record. Scalars are optional and copied
//! verbatim; list fields are `None` only while a block is a partial patch.
//! A block stored on a canonical [`Product`](crate::Product) has every list
//! normalized to a (possibly empty) sequence.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::ProductType;
use crate::lenient;

fn overlay<T: Clone>(target: &mut Option<T>, patch: &Option<T>) {
    if patch.is_some() {
        target.clone_from(patch);
    }
}

fn fill(list: &mut Option<Vec<String>>) {
    list.get_or_insert_with(Vec::new);
}

fn items(list: &Option<Vec<String>>) -> &[String] {
    list.as_deref().unwrap_or_default()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodAttributes {
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub food_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::text_list", skip_serializing_if = "Option::is_none")]
    pub flavor_type: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient::text_list", skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient::text_list", skip_serializing_if = "Option::is_none")]
    pub allergens: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient::text_list", skip_serializing_if = "Option::is_none")]
    pub usage: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub packaging_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub packaging_size: Option<String>,
    /// Free-text descriptor such as "12 months"; an explicit window uses the dates below.
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub shelf_life: Option<String>,
    #[serde(default, deserialize_with = "lenient::date", skip_serializing_if = "Option::is_none")]
    pub shelf_life_start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient::date", skip_serializing_if = "Option::is_none")]
    pub shelf_life_end_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub storage_instruction: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub manufacturer_region: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub nutritional_info: Option<String>,
    #[serde(default, deserialize_with = "lenient::text_list", skip_serializing_if = "Option::is_none")]
    pub certifications: Option<Vec<String>>,
}

impl FoodAttributes {
    pub fn flavor_type(&self) -> &[String] {
        items(&self.flavor_type)
    }

    pub fn ingredients(&self) -> &[String] {
        items(&self.ingredients)
    }

    pub fn allergens(&self) -> &[String] {
        items(&self.allergens)
    }

    pub fn usage(&self) -> &[String] {
        items(&self.usage)
    }

    pub fn certifications(&self) -> &[String] {
        items(&self.certifications)
    }

    pub fn normalize_lists(&mut self) {
        fill(&mut self.flavor_type);
        fill(&mut self.ingredients);
        fill(&mut self.allergens);
        fill(&mut self.usage);
        fill(&mut self.certifications);
    }

    /// Overwrites every field that `patch` carries; absent fields are kept.
    pub fn overlay(&mut self, patch: &FoodAttributes) {
        overlay(&mut self.food_type, &patch.food_type);
        overlay(&mut self.flavor_type, &patch.flavor_type);
        overlay(&mut self.ingredients, &patch.ingredients);
        overlay(&mut self.allergens, &patch.allergens);
        overlay(&mut self.usage, &patch.usage);
        overlay(&mut self.packaging_type, &patch.packaging_type);
        overlay(&mut self.packaging_size, &patch.packaging_size);
        overlay(&mut self.shelf_life, &patch.shelf_life);
        overlay(&mut self.shelf_life_start_date, &patch.shelf_life_start_date);
        overlay(&mut self.shelf_life_end_date, &patch.shelf_life_end_date);
        overlay(&mut self.storage_instruction, &patch.storage_instruction);
        overlay(&mut self.manufacturer_region, &patch.manufacturer_region);
        overlay(&mut self.nutritional_info, &patch.nutritional_info);
        overlay(&mut self.certifications, &patch.certifications);
    }

    pub fn is_unset(&self) -> bool {
        *self == Self::default()
    }

    /// True when a field no other category shares is set.
    ///
    /// Lists such as `usage` or `ingredients` also appear on other blocks, so
    /// they alone do not identify a Food record.
    pub fn has_food_markers(&self) -> bool {
        self.food_type.is_some()
            || self.shelf_life_start_date.is_some()
            || self.shelf_life_end_date.is_some()
            || self.manufacturer_region.is_some()
            || self.nutritional_info.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeverageAttributes {
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub beverage_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::text_list", skip_serializing_if = "Option::is_none")]
    pub flavor_type: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient::text_list", skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient::text_list", skip_serializing_if = "Option::is_none")]
    pub allergens: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub packaging_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
    /// Percent alcohol by volume.
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub alcohol_content: Option<f64>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub sugar_content: Option<String>,
    #[serde(default, deserialize_with = "lenient::flag", skip_serializing_if = "Option::is_none")]
    pub carbonated: Option<bool>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub shelf_life: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub storage_instruction: Option<String>,
    #[serde(default, deserialize_with = "lenient::text_list", skip_serializing_if = "Option::is_none")]
    pub certifications: Option<Vec<String>>,
}

impl BeverageAttributes {
    pub fn normalize_lists(&mut self) {
        fill(&mut self.flavor_type);
        fill(&mut self.ingredients);
        fill(&mut self.allergens);
        fill(&mut self.certifications);
    }

    pub fn overlay(&mut self, patch: &BeverageAttributes) {
        overlay(&mut self.beverage_type, &patch.beverage_type);
        overlay(&mut self.flavor_type, &patch.flavor_type);
        overlay(&mut self.ingredients, &patch.ingredients);
        overlay(&mut self.allergens, &patch.allergens);
        overlay(&mut self.packaging_type, &patch.packaging_type);
        overlay(&mut self.volume, &patch.volume);
        overlay(&mut self.alcohol_content, &patch.alcohol_content);
        overlay(&mut self.sugar_content, &patch.sugar_content);
        overlay(&mut self.carbonated, &patch.carbonated);
        overlay(&mut self.shelf_life, &patch.shelf_life);
        overlay(&mut self.storage_instruction, &patch.storage_instruction);
        overlay(&mut self.certifications, &patch.certifications);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NaturalAttributes {
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub natural_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::text_list", skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(default, deserialize_with = "lenient::text_list", skip_serializing_if = "Option::is_none")]
    pub certifications: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient::text_list", skip_serializing_if = "Option::is_none")]
    pub benefits: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient::text_list", skip_serializing_if = "Option::is_none")]
    pub usage: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub packaging_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub packaging_size: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub shelf_life: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub storage_instruction: Option<String>,
}

impl NaturalAttributes {
    pub fn normalize_lists(&mut self) {
        fill(&mut self.ingredients);
        fill(&mut self.certifications);
        fill(&mut self.benefits);
        fill(&mut self.usage);
    }

    pub fn overlay(&mut self, patch: &NaturalAttributes) {
        overlay(&mut self.natural_type, &patch.natural_type);
        overlay(&mut self.ingredients, &patch.ingredients);
        overlay(&mut self.origin, &patch.origin);
        overlay(&mut self.certifications, &patch.certifications);
        overlay(&mut self.benefits, &patch.benefits);
        overlay(&mut self.usage, &patch.usage);
        overlay(&mut self.packaging_type, &patch.packaging_type);
        overlay(&mut self.packaging_size, &patch.packaging_size);
        overlay(&mut self.shelf_life, &patch.shelf_life);
        overlay(&mut self.storage_instruction, &patch.storage_instruction);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthyAttributes {
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub healthy_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::text_list", skip_serializing_if = "Option::is_none")]
    pub nutritional_claims: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient::text_list", skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient::text_list", skip_serializing_if = "Option::is_none")]
    pub allergens: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient::text_list", skip_serializing_if = "Option::is_none")]
    pub certifications: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient::text_list", skip_serializing_if = "Option::is_none")]
    pub dietary_tags: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub packaging_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub packaging_size: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub shelf_life: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub storage_instruction: Option<String>,
}

impl HealthyAttributes {
    pub fn normalize_lists(&mut self) {
        fill(&mut self.nutritional_claims);
        fill(&mut self.ingredients);
        fill(&mut self.allergens);
        fill(&mut self.certifications);
        fill(&mut self.dietary_tags);
    }

    pub fn overlay(&mut self, patch: &HealthyAttributes) {
        overlay(&mut self.healthy_type, &patch.healthy_type);
        overlay(&mut self.nutritional_claims, &patch.nutritional_claims);
        overlay(&mut self.ingredients, &patch.ingredients);
        overlay(&mut self.allergens, &patch.allergens);
        overlay(&mut self.certifications, &patch.certifications);
        overlay(&mut self.dietary_tags, &patch.dietary_tags);
        overlay(&mut self.packaging_type, &patch.packaging_type);
        overlay(&mut self.packaging_size, &patch.packaging_size);
        overlay(&mut self.shelf_life, &patch.shelf_life);
        overlay(&mut self.storage_instruction, &patch.storage_instruction);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackagingAttributes {
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub packaging_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub capacity: Option<String>,
    #[serde(default, deserialize_with = "lenient::flag", skip_serializing_if = "Option::is_none")]
    pub recyclable: Option<bool>,
    #[serde(default, deserialize_with = "lenient::flag", skip_serializing_if = "Option::is_none")]
    pub biodegradable: Option<bool>,
    #[serde(default, deserialize_with = "lenient::text_list", skip_serializing_if = "Option::is_none")]
    pub usage: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient::text_list", skip_serializing_if = "Option::is_none")]
    pub certifications: Option<Vec<String>>,
}

impl PackagingAttributes {
    pub fn normalize_lists(&mut self) {
        fill(&mut self.usage);
        fill(&mut self.certifications);
    }

    pub fn overlay(&mut self, patch: &PackagingAttributes) {
        overlay(&mut self.packaging_type, &patch.packaging_type);
        overlay(&mut self.material, &patch.material);
        overlay(&mut self.dimensions, &patch.dimensions);
        overlay(&mut self.capacity, &patch.capacity);
        overlay(&mut self.recyclable, &patch.recyclable);
        overlay(&mut self.biodegradable, &patch.biodegradable);
        overlay(&mut self.usage, &patch.usage);
        overlay(&mut self.certifications, &patch.certifications);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtherAttributes {
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub other_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::text_list", skip_serializing_if = "Option::is_none")]
    pub usage: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient::text_list", skip_serializing_if = "Option::is_none")]
    pub certifications: Option<Vec<String>>,
    /// Free-form key/value specifications ("Voltage" -> "220V").
    #[serde(default, deserialize_with = "lenient::text_map", skip_serializing_if = "Option::is_none")]
    pub specifications: Option<BTreeMap<String, String>>,
}

impl OtherAttributes {
    pub fn normalize_lists(&mut self) {
        fill(&mut self.usage);
        fill(&mut self.certifications);
    }

    /// Specifications merge key by key.
    pub fn overlay(&mut self, patch: &OtherAttributes) {
        overlay(&mut self.other_type, &patch.other_type);
        overlay(&mut self.usage, &patch.usage);
        overlay(&mut self.certifications, &patch.certifications);
        if let Some(specs) = &patch.specifications {
            self.specifications
                .get_or_insert_with(BTreeMap::new)
                .extend(specs.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
    }
}

/// The one active variant block of a product, keyed by its [`ProductType`].
#[derive(Debug, Clone, PartialEq)]
pub enum VariantBlock {
    Food(FoodAttributes),
    Beverage(BeverageAttributes),
    Natural(NaturalAttributes),
    Healthy(HealthyAttributes),
    Packaging(PackagingAttributes),
    Other(OtherAttributes),
}

impl VariantBlock {
    pub fn product_type(&self) -> ProductType {
        match self {
            VariantBlock::Food(_) => ProductType::Food,
            VariantBlock::Beverage(_) => ProductType::Beverage,
            VariantBlock::Natural(_) => ProductType::Natural,
            VariantBlock::Healthy(_) => ProductType::Healthy,
            VariantBlock::Packaging(_) => ProductType::Packaging,
            VariantBlock::Other(_) => ProductType::Other,
        }
    }

    pub fn normalize_lists(&mut self) {
        match self {
            VariantBlock::Food(block) => block.normalize_lists(),
            VariantBlock::Beverage(block) => block.normalize_lists(),
            VariantBlock::Natural(block) => block.normalize_lists(),
            VariantBlock::Healthy(block) => block.normalize_lists(),
            VariantBlock::Packaging(block) => block.normalize_lists(),
            VariantBlock::Other(block) => block.normalize_lists(),
        }
    }

    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.normalize_lists();
        self
    }

    /// Overlays a block of the same kind; returns false (and changes nothing)
    /// when the kinds differ.
    pub fn overlay(&mut self, patch: &VariantBlock) -> bool {
        match (self, patch) {
            (VariantBlock::Food(block), VariantBlock::Food(p)) => block.overlay(p),
            (VariantBlock::Beverage(block), VariantBlock::Beverage(p)) => block.overlay(p),
            (VariantBlock::Natural(block), VariantBlock::Natural(p)) => block.overlay(p),
            (VariantBlock::Healthy(block), VariantBlock::Healthy(p)) => block.overlay(p),
            (VariantBlock::Packaging(block), VariantBlock::Packaging(p)) => block.overlay(p),
            (VariantBlock::Other(block), VariantBlock::Other(p)) => block.overlay(p),
            _ => return false,
        }
        true
    }

    pub fn as_food(&self) -> Option<&FoodAttributes> {
        match self {
            VariantBlock::Food(block) => Some(block),
            _ => None,
        }
    }
}
