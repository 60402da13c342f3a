use esg_engine::{run_module, ModuleId, QuestionnaireInput};
use serde_json::json;

fn questionnaire(value: serde_json::Value) -> QuestionnaireInput {
    serde_json::from_value(value).expect("questionnaire fixture should deserialize")
}

#[test]
fn refrigerant_emissions_follow_charge_times_leakage_times_gwp() {
    let input = questionnaire(json!({
        "A4": { "entries": [
            { "label": "Cold store", "systemType": "commercialRefrigeration", "refrigerantKey": "r134a",
              "systemChargeKg": 10.0, "leakagePercent": 10.0 }
        ] }
    }));

    let result = run_module(ModuleId::A4, &input);

    assert_eq!(result.value, 10.0 * (10.0 / 100.0) * 1430.0);
    assert_eq!(result.unit, "kg CO2e");
    assert!(result.assumptions.is_empty(), "fully specified entries need no assumptions");
    assert!(result.warnings.is_empty());
}

#[test]
fn missing_refrigerant_details_fall_back_to_system_defaults() {
    let input = questionnaire(json!({
        "A4": { "entries": [
            { "label": "Server room AC", "systemType": "airConditioning", "systemChargeKg": 10.0 }
        ] }
    }));

    let result = run_module(ModuleId::A4, &input);

    assert_eq!(result.value, 10.0 * (5.0 / 100.0) * 2088.0);
    assert!(result
        .assumptions
        .iter()
        .any(|line| line.contains("assumed to be R-410A blend")));
    assert!(result
        .assumptions
        .iter()
        .any(|line| line.contains("assumed at 5% of charge")));
}

#[test]
fn leased_floor_area_is_estimated_before_attribution() {
    let input = questionnaire(json!({
        "C13": { "entries": [
            { "label": "Leased office", "carrier": "electricity", "floorAreaSqm": 1000.0 }
        ] }
    }));

    let result = run_module(ModuleId::C13, &input);

    assert_eq!(result.value, 1000.0 * 50.0 * 0.135);
    assert!(result
        .assumptions
        .iter()
        .any(|line| line.contains("estimated from 1000 sqm at 50 kWh/sqm")));
}

#[test]
fn governance_scorecard_reaches_full_marks() {
    let input = questionnaire(json!({
        "D1": {
            "boundaryMethod": "operationalControl",
            "scopeTwoMethod": "marketBased",
            "valueChainScreeningCompleted": true,
            "dataQualityTier": "primary",
            "climateStrategyNarrative": "Reduce scope 1 and 2 emissions 42% by 2030.",
            "boardOversightNarrative": "The board reviews climate topics quarterly."
        }
    }));

    let result = run_module(ModuleId::D1, &input);

    assert_eq!(result.value, 100.0);
    assert_eq!(result.unit, "points");
    assert!(result.warnings.is_empty(), "a full scorecard has nothing to recommend");
    assert_eq!(result.assumptions.len(), 6, "every scorecard choice is disclosed");
    assert_eq!(result.trace.last().map(String::as_str), Some("total: 100 points"));
}

#[test]
fn default_screening_factors_are_disclosed_once_per_category() {
    let input = questionnaire(json!({
        "C10": { "entries": [
            { "label": "Steel", "category": "purchasedGoods", "annualSpendDkk": 100000.0,
              "factorKey": "goods.average" },
            { "label": "Cleaning", "category": "purchasedServices", "annualSpendDkk": 50000.0 },
            { "label": "Consulting", "category": "purchasedServices", "annualSpendDkk": 80000.0 },
            { "label": "Haulage", "category": "upstreamTransport", "annualSpendDkk": 60000.0 }
        ] }
    }));

    let result = run_module(ModuleId::C10, &input);

    assert_eq!(
        result.assumptions,
        vec![
            "Average purchased services factor applied where no specific factor was selected."
                .to_string(),
            "Average upstream transport factor applied where no specific factor was selected."
                .to_string(),
        ],
        "an explicitly keyed category is not reported as defaulted"
    );
    assert_eq!(
        result.value,
        100000.0 * 0.058 + 50000.0 * 0.026 + 80000.0 * 0.026 + 60000.0 * 0.089
    );
}

#[test]
fn workforce_scoring_weights_coverage_and_deducts_incidents() {
    let input = questionnaire(json!({
        "S1": {
            "segments": [
                { "label": "Drivers", "headcount": 60.0, "socialProtectionCoveragePercent": 90.0 },
                { "label": "Office", "headcount": 40.0, "socialProtectionCoveragePercent": 70.0 }
            ],
            "incidents": [
                { "description": "Overtime dispute", "severity": "medium", "remediationStatus": "inProgress" }
            ]
        }
    }));

    let result = run_module(ModuleId::S1, &input);

    assert_eq!(
        result.value,
        (90.0 * 60.0) / 100.0 + (70.0 * 40.0) / 100.0 - 4.0
    );
    assert!(
        result.warnings.is_empty(),
        "82% average coverage clears the 70% benchmark and the incident has a plan"
    );
}
