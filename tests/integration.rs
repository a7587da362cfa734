//! Integration tests for the Materials Engine.
//!
//! This test suite drives the HTTP API against the default configuration and covers:
//! - Volume materials (base rock, clean rock)
//! - Area materials (pavers, fabric)
//! - Linear materials (edging)
//! - Totals, breakdown text and category displays
//! - Other services and unknown services
//! - Excavation depth
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use materials_engine::api::{AppState, create_router};
use materials_engine::config::ConfigLoader;
use materials_engine::logging;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    logging::init_test();
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    AppState::from_config(&config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    post_raw(router, uri, body.to_string()).await
}

async fn post_raw(router: Router, uri: &str, body: String) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn post_calculate(body: Value) -> (StatusCode, Value) {
    post_json(create_router_for_test(), "/materials/calculate", body).await
}

fn create_request(square_footage: &str, selected_materials: Value) -> Value {
    json!({
        "company_id": "acme_landscaping",
        "service_config_id": "paver_patio",
        "square_footage": square_footage,
        "selected_materials": selected_materials
    })
}

/// Returns the category result with the given key.
fn category<'a>(response: &'a Value, key: &str) -> &'a Value {
    response["result"]["categories"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["category"]["key"] == key)
        .unwrap_or_else(|| panic!("Category '{}' not in result", key))
}

fn assert_decimal_eq(actual: &Value, expected: &str) {
    let actual = decimal(actual.as_str().unwrap());
    assert_eq!(
        actual,
        decimal(expected),
        "Expected {}, got {}",
        expected,
        actual
    );
}

// =============================================================================
// SECTION 1: Volume Materials
// =============================================================================

#[tokio::test]
async fn test_base_rock_360_sqft_default() {
    // 360 sqft x 6" = 180 cu ft = 6.667 cu yd, +20% compaction = 8, +10% waste = 8.8
    let (status, response) = post_calculate(create_request("360", json!({}))).await;

    assert_eq!(status, StatusCode::OK);
    let base_rock = category(&response, "base_rock");
    assert_decimal_eq(&base_rock["quantity"]["purchase_units_rounded"], "8.8");
    assert_decimal_eq(&base_rock["subtotal"], "323.40");
    assert_eq!(base_rock["quantity"]["display_text"], "8.8 cubic yards");
}

#[tokio::test]
async fn test_base_rock_100_sqft_rounds_up() {
    // 50 cu ft = 1.852 cu yd, x1.2 x1.1 = 2.444 -> 2.5
    let (status, response) = post_calculate(create_request("100", json!({}))).await;

    assert_eq!(status, StatusCode::OK);
    let base_rock = category(&response, "base_rock");
    assert_decimal_eq(&base_rock["quantity"]["purchase_units_rounded"], "2.5");
    assert_decimal_eq(&base_rock["subtotal"], "91.875");
}

#[tokio::test]
async fn test_selected_recycled_base() {
    // 8" depth, 25% compaction: 240 cu ft = 8.889 cu yd -> 11.111 -> 12.222 -> 12.3
    let (status, response) = post_calculate(create_request(
        "360",
        json!({ "base_rock": "mat_base_rock_recycled" }),
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    let base_rock = category(&response, "base_rock");
    assert_eq!(base_rock["material"]["id"], "mat_base_rock_recycled");
    assert_decimal_eq(&base_rock["quantity"]["purchase_units_rounded"], "12.3");
    assert_decimal_eq(&base_rock["subtotal"], "362.85");
}

#[tokio::test]
async fn test_clean_rock_without_compaction() {
    // 60 cu ft = 2.222 cu yd, no compaction, +10% waste = 2.444 -> 2.5
    let (status, response) = post_calculate(create_request("360", json!({}))).await;

    assert_eq!(status, StatusCode::OK);
    let clean_rock = category(&response, "clean_rock");
    assert_decimal_eq(&clean_rock["quantity"]["compaction_factor_percentage"], "0");
    assert_decimal_eq(&clean_rock["quantity"]["purchase_units_rounded"], "2.5");
    assert_decimal_eq(&clean_rock["subtotal"], "130");
}

// =============================================================================
// SECTION 2: Area Materials
// =============================================================================

#[tokio::test]
async fn test_pavers_sold_per_square_foot() {
    let (status, response) = post_calculate(create_request("360", json!({}))).await;

    assert_eq!(status, StatusCode::OK);
    let pavers = category(&response, "pavers");
    assert_decimal_eq(&pavers["quantity"]["purchase_units_rounded"], "396");
    assert_eq!(pavers["quantity"]["display_text"], "396 square feet");
    assert_decimal_eq(&pavers["subtotal"], "1683");
}

#[tokio::test]
async fn test_pavers_sold_by_pallet() {
    // 396 sqft / 120 sqft per pallet = 3.3 pallets
    let (status, response) = post_calculate(create_request(
        "360",
        json!({ "pavers": "mat_paver_cobble_pallet" }),
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    let pavers = category(&response, "pavers");
    assert_eq!(
        pavers["quantity"]["display_text"],
        "3.3 pallets (396 sqft coverage)"
    );
    assert_decimal_eq(&pavers["subtotal"], "1353");
}

#[tokio::test]
async fn test_fabric_100_sqft() {
    // 115 sqft / 1800 = 0.064 rolls -> 0.1
    let (status, response) = post_calculate(create_request("100", json!({}))).await;

    assert_eq!(status, StatusCode::OK);
    let fabric = category(&response, "geotextile");
    assert_eq!(
        fabric["quantity"]["display_text"],
        "0.1 rolls (180 sqft coverage)"
    );
    assert_decimal_eq(&fabric["subtotal"], "19.966");
    assert!(fabric["quantity"]["quantity_with_compaction"].is_null());
}

// =============================================================================
// SECTION 3: Linear Materials
// =============================================================================

#[tokio::test]
async fn test_edging_estimated_perimeter() {
    let (status, response) = post_calculate(create_request("360", json!({}))).await;

    assert_eq!(status, StatusCode::OK);
    let edging = category(&response, "edging");
    assert_eq!(
        edging["quantity"]["display_text"],
        "10.9 8ft sections (87.2 linear feet)"
    );
    assert_decimal_eq(&edging["subtotal"], "13.516");
}

#[tokio::test]
async fn test_edging_custom_perimeter_with_steel() {
    // 76 ft + 10% = 83.6 ft / 10 ft sections = 8.36 -> 8.4
    let mut request = create_request("360", json!({ "edging": "mat_edging_steel" }));
    request["custom_perimeter"] = json!("76");

    let (status, response) = post_calculate(request).await;

    assert_eq!(status, StatusCode::OK);
    let edging = category(&response, "edging");
    assert_eq!(
        edging["quantity"]["display_text"],
        "8.4 10ft sections (84 linear feet)"
    );
    assert_decimal_eq(&edging["subtotal"], "54.60");
}

#[tokio::test]
async fn test_custom_perimeter_independent_of_area() {
    let mut small = create_request("100", json!({}));
    small["custom_perimeter"] = json!("60");
    let mut large = create_request("5000", json!({}));
    large["custom_perimeter"] = json!("60");

    let (_, small) = post_calculate(small).await;
    let (_, large) = post_calculate(large).await;

    assert_eq!(
        category(&small, "edging")["quantity"],
        category(&large, "edging")["quantity"]
    );
}

// =============================================================================
// SECTION 4: Totals and Breakdown
// =============================================================================

#[tokio::test]
async fn test_total_reconciles_with_subtotals() {
    let (status, response) = post_calculate(create_request("360", json!({}))).await;

    assert_eq!(status, StatusCode::OK);
    let sum: Decimal = response["result"]["categories"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| decimal(c["subtotal"].as_str().unwrap()))
        .sum();

    assert_decimal_eq(&response["result"]["total_cost"], &sum.to_string());
    assert_decimal_eq(&response["result"]["total_cost"], "2209.814");
    assert_decimal_eq(
        &response["result"]["cost_per_square_foot"],
        &(sum / decimal("360")).to_string(),
    );
}

#[tokio::test]
async fn test_breakdown_text() {
    let (status, response) = post_calculate(create_request("360", json!({}))).await;

    assert_eq!(status, StatusCode::OK);
    let breakdown = response["result"]["breakdown"].as_str().unwrap();
    let lines: Vec<&str> = breakdown.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Base Rock: 8.8 cubic yards = $323.40",
            "Clean Rock: 2.5 cubic yards = $130.00",
            "Pavers: 396 square feet = $1683.00",
            "Geotextile Fabric: 0.3 rolls (540 sqft coverage) = $59.90",
            "Edge Restraint: 10.9 8ft sections (87.2 linear feet) = $13.52",
        ]
    );
}

#[tokio::test]
async fn test_category_displays() {
    let (status, response) = post_calculate(create_request("360", json!({}))).await;

    assert_eq!(status, StatusCode::OK);
    let displays = response["result"]["category_displays"].as_object().unwrap();
    assert_eq!(displays.len(), 5);
    assert_decimal_eq(&displays["edging"]["units_needed"], "10.9");
    assert_eq!(displays["edging"]["unit_label"], "8ft sections");
    assert_eq!(displays["base_rock"]["display_text"], "8.8 cubic yards");
}

#[tokio::test]
async fn test_audit_trace_records_each_category() {
    let (status, response) = post_calculate(create_request("360", json!({}))).await;

    assert_eq!(status, StatusCode::OK);
    let steps = response["result"]["audit_trace"]["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 5);
    assert_eq!(steps[0]["rule_id"], "volume_depth");
    assert_eq!(steps[2]["rule_id"], "area_coverage");
    assert_eq!(steps[4]["rule_id"], "linear_perimeter");
    assert!(
        response["result"]["audit_trace"]["warnings"]
            .as_array()
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn test_unknown_selection_falls_back_to_default() {
    let (status, response) = post_calculate(create_request(
        "360",
        json!({ "edging": "mat_discontinued" }),
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        category(&response, "edging")["material"]["id"],
        "mat_edging_plastic"
    );
}

#[tokio::test]
async fn test_selection_from_another_category_falls_back_to_default() {
    let (status, response) = post_calculate(create_request(
        "360",
        json!({ "base_rock": "mat_edging_steel" }),
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    let base_rock = category(&response, "base_rock");
    assert_eq!(base_rock["material"]["id"], "mat_base_rock_34");
    assert_decimal_eq(&base_rock["quantity"]["purchase_units_rounded"], "8.8");
}

// =============================================================================
// SECTION 5: Other Services
// =============================================================================

#[tokio::test]
async fn test_gravel_walkway_uses_category_depth() {
    // Category depth 4": 200 sqft -> 66.667 cu ft = 2.469 cu yd -> 2.963 -> 3.259 -> 3.3
    let (status, response) = post_calculate(json!({
        "company_id": "acme_landscaping",
        "service_config_id": "gravel_walkway",
        "square_footage": "200"
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["result"]["categories"].as_array().unwrap().len(), 4);
    let base = category(&response, "walkway_base");
    assert_decimal_eq(&base["quantity"]["purchase_units_rounded"], "3.3");
    assert_decimal_eq(&base["subtotal"], "121.275");
}

#[tokio::test]
async fn test_unknown_service_returns_empty_result() {
    let (status, response) = post_calculate(json!({
        "company_id": "acme_landscaping",
        "service_config_id": "retaining_wall",
        "square_footage": "360"
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(response["result"]["categories"].as_array().unwrap().is_empty());
    assert_decimal_eq(&response["result"]["total_cost"], "0");
    assert_eq!(response["result"]["breakdown"], "");
}

// =============================================================================
// SECTION 6: Excavation Depth
// =============================================================================

#[tokio::test]
async fn test_excavation_depth_defaults() {
    let (status, depth) = post_json(
        create_router_for_test(),
        "/materials/excavation-depth",
        json!({
            "company_id": "acme_landscaping",
            "service_config_id": "paver_patio"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_eq(&depth["depth_inches"], "11.875");
    assert_eq!(
        depth["breakdown"],
        "Base rock 6\" + Clean rock 2\" + Pavers 2.375\" + Buffer 1.5\" = 11.875\""
    );
}

#[tokio::test]
async fn test_excavation_depth_with_selection() {
    let (status, depth) = post_json(
        create_router_for_test(),
        "/materials/excavation-depth",
        json!({
            "company_id": "acme_landscaping",
            "service_config_id": "paver_patio",
            "selected_materials": { "base_rock": "mat_base_rock_recycled" }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_eq(&depth["base_rock_inches"], "8");
    assert_decimal_eq(&depth["depth_inches"], "13.875");
}

// =============================================================================
// SECTION 7: Error Cases
// =============================================================================

#[tokio::test]
async fn test_error_malformed_json() {
    let (status, error) = post_raw(
        create_router_for_test(),
        "/materials/calculate",
        "{\"company_id\": ".to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_error_missing_company_id() {
    let (status, error) = post_calculate(json!({
        "service_config_id": "paver_patio",
        "square_footage": "360"
    }))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_error_negative_square_footage() {
    let (status, error) = post_calculate(create_request("-10", json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
    assert!(error["message"].as_str().unwrap().contains("square_footage"));
}

#[tokio::test]
async fn test_error_square_footage_above_maximum() {
    let (status, error) =
        post_calculate(create_request("10000000000000000000000000000", json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
    assert!(error["message"].as_str().unwrap().contains("square_footage"));
}

#[tokio::test]
async fn test_error_zero_custom_perimeter() {
    let mut request = create_request("360", json!({}));
    request["custom_perimeter"] = json!("0");

    let (status, error) = post_calculate(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
    assert!(error["message"].as_str().unwrap().contains("custom_perimeter"));
}

#[tokio::test]
async fn test_error_non_numeric_square_footage() {
    let (status, error) = post_calculate(create_request("lots", json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_error_excavation_for_other_service() {
    let (status, error) = post_json(
        create_router_for_test(),
        "/materials/excavation-depth",
        json!({
            "company_id": "acme_landscaping",
            "service_config_id": "gravel_walkway"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
}
