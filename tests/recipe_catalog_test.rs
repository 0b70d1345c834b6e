// ABOUTME: Integration tests for recipe catalog loading and validation
// ABOUTME: Tests accepted document shapes, rejected records, and error reporting
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Velo-Altitude

mod common;

use common::recipe;
use serde_json::json;
use velo_altitude::config::RecipeEngineConfig;
use velo_altitude::errors::CatalogError;
use velo_altitude::intelligence::recipes::{Catalog, Macros, Recipe, RecipeCategory, RecipeEngine};

fn entry(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": format!("Recette {id}"),
        "category": "snack",
        "nutritionalInfo": {
            "calories": 320,
            "macros": { "carbs": 48, "protein": 9, "fat": 10, "fiber": 4 }
        },
        "ingredients": ["dattes", "amandes"]
    })
}

fn load(document: &serde_json::Value) -> Result<Catalog, CatalogError> {
    Catalog::from_json_str(&document.to_string())
}

// ============================================================================
// Accepted Documents
// ============================================================================

#[test]
fn test_bundled_catalog_loads() {
    let catalog = Catalog::bundled().unwrap();
    assert_eq!(catalog.len(), 12);
    assert_eq!(catalog.recipes()[0].id, "energy-oat-bars");
}

#[test]
fn test_object_and_bare_array_documents() {
    let wrapped = load(&json!({ "recipes": [entry("a"), entry("b")] })).unwrap();
    let bare = load(&json!([entry("a"), entry("b")])).unwrap();
    assert_eq!(wrapped, bare);
    assert_eq!(wrapped.len(), 2);
}

#[test]
fn test_empty_catalog_is_valid() {
    let catalog = load(&json!([])).unwrap();
    assert!(catalog.is_empty());
}

#[test]
fn test_record_fields_are_mapped() {
    let document = json!([{
        "id": "porridge",
        "name": "Porridge",
        "category": "breakfast",
        "timing": "before",
        "prepTime": 5,
        "cookTime": 10,
        "nutritionalInfo": { "calories": 380, "macros": { "carbs": 60, "protein": 12, "fat": 8 } },
        "ingredients": ["avoine", "banane"],
        "instructions": ["Cuire", "Servir"],
        "benefits": ["Énergie durable"],
        "tips": "Préparer la veille"
    }]);
    let catalog = load(&document).unwrap();
    let r = &catalog.recipes()[0];

    assert_eq!(r.category, RecipeCategory::Breakfast);
    assert_eq!(r.timing.as_deref(), Some("before"));
    assert_eq!(r.total_time_mins(), 15);
    let nutrition = r.nutrition.unwrap();
    assert!((nutrition.calories - 380.0).abs() < f64::EPSILON);
    assert!(nutrition.macros.fiber.abs() < f64::EPSILON);
    assert_eq!(r.instructions.len(), 2);
    assert_eq!(r.tips.as_deref(), Some("Préparer la veille"));
}

#[test]
fn test_optional_fields_default() {
    let document = json!([{ "id": "water", "name": "Eau", "category": "drink" }]);
    let catalog = load(&document).unwrap();
    let r = &catalog.recipes()[0];

    assert!(r.nutrition.is_none());
    assert!(r.ingredients.is_empty());
    assert_eq!(r.total_time_mins(), 0);
}

#[test]
fn test_from_reader() {
    let bytes = json!({ "recipes": [entry("reader")] }).to_string().into_bytes();
    let catalog = Catalog::from_reader(bytes.as_slice()).unwrap();
    assert_eq!(catalog.recipes()[0].id, "reader");
}

#[test]
fn test_engine_from_json_str() {
    let document = json!([entry("a"), entry("b"), entry("c")]).to_string();
    let engine = RecipeEngine::from_json_str(&document, RecipeEngineConfig::default()).unwrap();
    assert_eq!(engine.len(), 3);
    assert!(engine.recipe("b").is_some());
}

#[test]
fn test_built_recipe_serializes_with_catalog_field_names() {
    let r = Recipe::new("shake", "Shake", RecipeCategory::Drink)
        .with_timing("après l'effort")
        .with_times(5, 0)
        .with_ingredient("lait de soja")
        .with_instruction("Mixer");
    let catalog = Catalog::from_recipes(vec![r]).unwrap();
    let json = serde_json::to_value(&catalog.recipes()[0]).unwrap();

    assert_eq!(json["prepTime"], 5);
    assert_eq!(json["cookTime"], 0);
    assert_eq!(json["category"], "drink");
    assert!(json["nutritionalInfo"].is_null());
    assert_eq!(json["instructions"][0], "Mixer");
}

// ============================================================================
// Rejected Records
// ============================================================================

#[test]
fn test_missing_id_is_rejected() {
    let mut record = entry("x");
    record.as_object_mut().unwrap().remove("id");
    let err = load(&json!([entry("a"), record])).unwrap_err();

    assert!(matches!(err, CatalogError::MissingId { index: 1 }));
    assert_eq!(err.index(), Some(1));
}

#[test]
fn test_blank_id_is_rejected() {
    let err = load(&json!([entry("   ")])).unwrap_err();
    assert!(matches!(err, CatalogError::MissingId { index: 0 }));
}

#[test]
fn test_duplicate_id_is_rejected() {
    let err = load(&json!([entry("a"), entry("b"), entry("a")])).unwrap_err();
    match err {
        CatalogError::DuplicateId {
            id,
            first_index,
            index,
        } => {
            assert_eq!(id, "a");
            assert_eq!(first_index, 0);
            assert_eq!(index, 2);
        }
        other => panic!("expected DuplicateId, got {other:?}"),
    }
}

#[test]
fn test_unknown_category_is_rejected() {
    let mut record = entry("cake");
    record["category"] = json!("dessert");
    let err = load(&json!([record])).unwrap_err();

    assert!(matches!(err, CatalogError::InvalidEntry { index: 0, .. }));
    assert!(err.to_string().contains("dessert"));
}

#[test]
fn test_missing_name_is_rejected() {
    let mut record = entry("nameless");
    record.as_object_mut().unwrap().remove("name");
    let err = load(&json!([record])).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidEntry { index: 0, .. }));
}

#[test]
fn test_wrongly_typed_field_is_rejected_with_index() {
    let mut record = entry("typed");
    record["ingredients"] = json!("dattes, amandes");
    let err = load(&json!([entry("ok"), record])).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidEntry { index: 1, .. }));
}

#[test]
fn test_negative_nutrition_is_rejected() {
    let mut record = entry("negative");
    record["nutritionalInfo"]["macros"]["protein"] = json!(-3);
    let err = load(&json!([record])).unwrap_err();

    assert!(matches!(err, CatalogError::InvalidEntry { index: 0, .. }));
    assert!(err.to_string().contains("protein"));
}

#[test]
fn test_one_bad_record_rejects_whole_catalog() {
    let mut records: Vec<serde_json::Value> = (0..10).map(|i| entry(&format!("r{i}"))).collect();
    records[7]["category"] = json!(42);
    assert!(load(&json!(records)).is_err());
}

#[test]
fn test_from_recipes_validates() {
    let a = recipe("a", RecipeCategory::Snack, 200.0, 30.0, 5.0, 5.0, &[]);
    let err = Catalog::from_recipes(vec![a.clone(), a]).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateId { index: 1, .. }));

    let blank = Recipe::new("", "Sans nom", RecipeCategory::Main);
    let err = Catalog::from_recipes(vec![blank]).unwrap_err();
    assert!(matches!(err, CatalogError::MissingId { index: 0 }));

    let nan = Recipe::new("nan", "NaN", RecipeCategory::Main).with_nutrition(
        f64::NAN,
        Macros::default(),
    );
    let err = Catalog::from_recipes(vec![nan]).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidEntry { index: 0, .. }));
}

// ============================================================================
// Malformed Documents
// ============================================================================

#[test]
fn test_invalid_json_is_malformed() {
    let err = Catalog::from_json_str("{ \"recipes\": [ ").unwrap_err();
    assert!(matches!(err, CatalogError::Malformed(_)));
    assert_eq!(err.index(), None);
}

#[test]
fn test_wrong_document_shape_is_malformed() {
    for document in [json!("recipes"), json!(42), json!({ "items": [] }), json!({ "recipes": {} })] {
        let err = load(&document).unwrap_err();
        assert!(matches!(err, CatalogError::Malformed(_)), "{document}");
    }
}

#[test]
fn test_every_error_reads_as_invalid_catalog_entry() {
    let mut nameless = entry("n");
    nameless.as_object_mut().unwrap().remove("name");
    let errors = [
        Catalog::from_json_str("not json").unwrap_err(),
        load(&json!([{ "name": "x", "category": "main" }])).unwrap_err(),
        load(&json!([entry("d"), entry("d")])).unwrap_err(),
        load(&json!([nameless])).unwrap_err(),
    ];
    for err in errors {
        assert!(
            err.to_string().starts_with("invalid catalog entry"),
            "unexpected message: {err}"
        );
    }
}
