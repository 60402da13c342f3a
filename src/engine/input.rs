//! The full questionnaire as one deserializable document, keyed by module
//! code on the wire.

use serde::{Deserialize, Serialize};

use crate::modules::communities::CommunitiesInput;
use crate::modules::end_of_life::EndOfLifeInput;
use crate::modules::energy::PurchasedEnergyInput;
use crate::modules::franchises::FranchisesInput;
use crate::modules::governance::GovernanceInput;
use crate::modules::human_rights::HumanRightsInput;
use crate::modules::investments::InvestmentsInput;
use crate::modules::leased_assets::LeasedAssetsInput;
use crate::modules::planned::PlannedSection;
use crate::modules::refrigerants::RefrigerantsInput;
use crate::modules::screening::ScreeningInput;
use crate::modules::workforce::WorkforceInput;

/// Everything a respondent has filled in so far. Absent sections are treated
/// exactly like sections with no rows: the calculators still run and report
/// "no data" results, so a half-finished questionnaire previews cleanly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionnaireInput {
    #[serde(rename = "A1", default, skip_serializing_if = "Option::is_none")]
    pub company_facilities: Option<PlannedSection>,
    #[serde(rename = "A2", default, skip_serializing_if = "Option::is_none")]
    pub vehicle_fleet: Option<PlannedSection>,
    #[serde(rename = "A3", default, skip_serializing_if = "Option::is_none")]
    pub purchased_energy: Option<PurchasedEnergyInput>,
    #[serde(rename = "A4", default, skip_serializing_if = "Option::is_none")]
    pub refrigerants: Option<RefrigerantsInput>,
    #[serde(rename = "C1", default, skip_serializing_if = "Option::is_none")]
    pub purchased_goods: Option<PlannedSection>,
    #[serde(rename = "C10", default, skip_serializing_if = "Option::is_none")]
    pub value_chain_screening: Option<ScreeningInput>,
    #[serde(rename = "C12", default, skip_serializing_if = "Option::is_none")]
    pub end_of_life: Option<EndOfLifeInput>,
    #[serde(rename = "C13", default, skip_serializing_if = "Option::is_none")]
    pub leased_assets: Option<LeasedAssetsInput>,
    #[serde(rename = "C14", default, skip_serializing_if = "Option::is_none")]
    pub franchises: Option<FranchisesInput>,
    #[serde(rename = "C15", default, skip_serializing_if = "Option::is_none")]
    pub investments: Option<InvestmentsInput>,
    #[serde(rename = "D1", default, skip_serializing_if = "Option::is_none")]
    pub governance: Option<GovernanceInput>,
    #[serde(rename = "S1", default, skip_serializing_if = "Option::is_none")]
    pub own_workforce: Option<WorkforceInput>,
    #[serde(rename = "S2", default, skip_serializing_if = "Option::is_none")]
    pub value_chain_workers: Option<PlannedSection>,
    #[serde(rename = "S3", default, skip_serializing_if = "Option::is_none")]
    pub affected_communities: Option<CommunitiesInput>,
    #[serde(rename = "S4", default, skip_serializing_if = "Option::is_none")]
    pub human_rights: Option<HumanRightsInput>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_sections_keyed_by_module_code() {
        let json = serde_json::json!({
            "A3": {
                "entries": [{
                    "label": "head office",
                    "carrier": "electricity",
                    "consumptionKwh": 42000.0
                }]
            },
            "D1": {
                "boundaryMethod": "operationalControl",
                "valueChainScreeningCompleted": true
            }
        });

        let input: QuestionnaireInput =
            serde_json::from_value(json).expect("questionnaire deserializes");

        let energy = input.purchased_energy.expect("A3 present");
        assert_eq!(energy.entries.len(), 1);
        assert_eq!(energy.entries[0].consumption_kwh, Some(42_000.0));
        assert!(input.governance.is_some());
        assert!(input.refrigerants.is_none());
    }

    #[test]
    fn unknown_sections_are_ignored_for_forward_compatibility() {
        let json = serde_json::json!({
            "Z9": { "anything": 1 }
        });

        let input: QuestionnaireInput =
            serde_json::from_value(json).expect("unknown keys are skipped");

        assert_eq!(input, QuestionnaireInput::default());
    }

    #[test]
    fn serialization_omits_untouched_sections() {
        let input = QuestionnaireInput::default();
        let json = serde_json::to_value(&input).expect("serializes");
        assert_eq!(json, serde_json::json!({}));
    }
}
