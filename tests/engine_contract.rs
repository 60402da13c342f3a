use esg_engine::{run_all, run_module, ModuleId, QuestionnaireInput};
use serde_json::json;

fn questionnaire(value: serde_json::Value) -> QuestionnaireInput {
    serde_json::from_value(value).expect("questionnaire fixture should deserialize")
}

#[test]
fn empty_questionnaire_reports_an_explained_zero_for_every_module() {
    let results = run_all(&QuestionnaireInput::default());

    assert_eq!(results.len(), ModuleId::ordered().len());
    for (id, result) in &results {
        assert_eq!(result.value, 0.0, "module {} should be zero on empty input", id.code());
        assert!(result.value.is_finite());
        assert!(
            result.unit == "kg CO2e" || result.unit == "points",
            "module {} reported unit {}",
            id.code(),
            result.unit
        );
        assert!(
            !result.assumptions.is_empty(),
            "module {} should explain why it reports zero",
            id.code()
        );
        let last = result.trace.last().expect("trace should end with a total line");
        assert!(last.starts_with("total:"), "module {} trace ends with {last}", id.code());
    }

    let governance = results
        .iter()
        .find(|(id, _)| *id == ModuleId::D1)
        .map(|(_, result)| result)
        .expect("governance module present");
    assert!(
        governance
            .warnings
            .iter()
            .any(|warning| warning.contains("below the 50-point tier")),
        "an empty scorecard should point at the baseline tier"
    );
}

#[test]
fn repeated_runs_return_identical_results() {
    let input = questionnaire(json!({
        "A1": { "heatingSource": "district", "buildingCount": 3 },
        "A3": { "entries": [
            { "label": "HQ", "carrier": "electricity", "consumptionKwh": 120000.0 },
            { "label": "Depot", "carrier": "districtHeating", "floorAreaSqm": 800.0 }
        ] },
        "A4": { "entries": [
            { "label": "Cold store", "systemType": "commercialRefrigeration", "systemChargeKg": 24.0 }
        ] },
        "C10": { "entries": [
            { "label": "Raw materials", "category": "purchasedGoods", "annualSpendDkk": 2400000.0 }
        ] },
        "D1": { "boundaryMethod": "operationalControl", "scopeTwoMethod": "locationBased" },
        "S1": {
            "segments": [
                { "label": "Drivers", "headcount": 60.0, "socialProtectionCoveragePercent": 90.0 }
            ],
            "incidents": [
                { "description": "Overtime dispute", "severity": "medium", "remediationStatus": "planned" }
            ]
        }
    }));

    let first = run_all(&input);
    let second = run_all(&input);
    assert_eq!(first, second, "the engine should be a pure function of its input");
}

#[test]
fn documentation_quality_warnings_share_one_threshold() {
    let input = questionnaire(json!({
        "A3": { "entries": [
            { "label": "HQ", "carrier": "electricity", "consumptionKwh": 1000.0, "documentationQualityPercent": 59.0 }
        ] },
        "A4": { "entries": [
            { "label": "Cold store", "systemType": "commercialRefrigeration", "refrigerantKey": "r134a",
              "systemChargeKg": 5.0, "leakagePercent": 8.0, "documentationQualityPercent": 60.0 }
        ] },
        "C12": { "entries": [
            { "label": "Pallets", "productCategory": "packaging", "tonnesSold": 12.0, "documentationQualityPercent": 59.0 }
        ] },
        "S1": { "segments": [
            { "label": "Warehouse staff", "headcount": 40.0, "socialProtectionCoveragePercent": 80.0,
              "documentationQualityPercent": 59.0 }
        ] }
    }));

    let results = run_all(&input);
    for code in ["A3", "C12", "S1"] {
        let result = results
            .iter()
            .find(|(id, _)| id.code() == code)
            .map(|(_, result)| result)
            .expect("module present in report");
        assert!(
            result
                .warnings
                .iter()
                .any(|warning| warning.contains("below the 60% review threshold")),
            "module {code} should flag 59% documentation"
        );
        assert!(
            result
                .trace
                .iter()
                .any(|line| line.starts_with("documentation quality averaged")),
            "module {code} should summarise observed quality"
        );
    }

    let refrigerants = results
        .iter()
        .find(|(id, _)| id.code() == "A4")
        .map(|(_, result)| result)
        .expect("refrigerants module present");
    assert!(
        refrigerants.warnings.is_empty(),
        "documentation at exactly 60% sits on the threshold and should not warn"
    );
}

#[test]
fn planned_modules_echo_recorded_answers_without_warnings() {
    let input = questionnaire(json!({
        "A1": { "heatingSource": "district", "buildingCount": 3, "auditNotes": null }
    }));

    let result = run_module(ModuleId::A1, &input);

    assert_eq!(result.value, 0.0);
    assert_eq!(result.unit, "kg CO2e");
    assert!(result.warnings.is_empty(), "planned modules never warn");
    assert!(
        result
            .assumptions
            .iter()
            .any(|line| line.contains("planned")),
        "the planned status should be disclosed"
    );
    assert!(result
        .trace
        .iter()
        .any(|line| line == r#"recorded 'heatingSource': "district""#));
    assert!(result.trace.iter().any(|line| line == "recorded 'buildingCount': 3"));
    assert!(
        result.trace.iter().all(|line| !line.contains("auditNotes")),
        "null answers are not echoed"
    );
}

#[test]
fn engine_does_not_clamp_out_of_contract_percentages() {
    let input = questionnaire(json!({
        "A4": { "entries": [
            { "label": "Worn-out chiller", "systemType": "commercialRefrigeration",
              "refrigerantKey": "r134a", "systemChargeKg": 10.0, "leakagePercent": 150.0 }
        ] },
        "C10": { "entries": [
            { "label": "Rebate correction", "category": "purchasedGoods", "annualSpendDkk": -1000.0 }
        ] },
        "S1": { "segments": [
            { "label": "Misentered crew", "socialProtectionCoveragePercent": 120.0 }
        ] }
    }));

    let results = run_all(&input);

    let refrigerants = results
        .iter()
        .find(|(id, _)| id.code() == "A4")
        .map(|(_, result)| result)
        .expect("refrigerants module present");
    assert_eq!(
        refrigerants.value,
        10.0 * (150.0 / 100.0) * 1430.0,
        "leakage above 100% flows through the arithmetic untouched"
    );

    let screening = results
        .iter()
        .find(|(id, _)| id.code() == "C10")
        .map(|(_, result)| result)
        .expect("screening module present");
    assert_eq!(screening.value, -1000.0 * 0.058, "negative spend is the caller's contract");

    let workforce = results
        .iter()
        .find(|(id, _)| id.code() == "S1")
        .map(|(_, result)| result)
        .expect("workforce module present");
    assert_eq!(workforce.value, 100.0, "scores cap at 100 even when inputs exceed the scale");
    assert!(workforce.trace.iter().any(|line| line.starts_with("cap:")));
}

#[test]
fn module_codes_parse_loosely_but_reject_unknown_ids() {
    assert_eq!(ModuleId::from_code(" s1 ").expect("padded lowercase code"), ModuleId::S1);
    assert_eq!(ModuleId::from_code("c10").expect("lowercase code"), ModuleId::C10);

    let err = ModuleId::from_code("B7").expect_err("B7 is not a questionnaire module");
    assert!(err.to_string().contains("unknown module id 'B7'"));
}
