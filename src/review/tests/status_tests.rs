//! Unit tests for lifecycle status and review outcome labels.

use crate::review::domain::{
    ModuleStatus, ParseModuleStatusError, ParseSaDecisionError, ParseTriageAssessmentError,
    SaDecision, TriageAssessment,
};
use rstest::rstest;

#[rstest]
#[case("Created", ModuleStatus::Created)]
#[case("SetupInstructionsProvided", ModuleStatus::SetupInstructionsProvided)]
#[case("PendingTriageQA", ModuleStatus::PendingTriageQa)]
#[case("TriageQAPassed", ModuleStatus::TriageQaPassed)]
#[case("TriageQAFailed", ModuleStatus::TriageQaFailed)]
#[case("PendingSAReview", ModuleStatus::PendingSaReview)]
#[case("SAApproved", ModuleStatus::SaApproved)]
#[case("SARevisionRequested", ModuleStatus::SaRevisionRequested)]
#[case("MergedToDevelop", ModuleStatus::MergedToDevelop)]
#[case("  MergedToDevelop ", ModuleStatus::MergedToDevelop)]
fn status_parses_canonical_labels(#[case] label: &str, #[case] expected: ModuleStatus) {
    assert_eq!(ModuleStatus::try_from(label), Ok(expected));
}

#[rstest]
#[case("saapproved")]
#[case("CREATED")]
#[case("Triageqapassed")]
fn status_labels_are_case_sensitive(#[case] label: &str) {
    assert_eq!(
        ModuleStatus::try_from(label),
        Err(ParseModuleStatusError(label.to_owned()))
    );
}

#[rstest]
fn status_rejects_unknown_label() {
    assert_eq!(
        ModuleStatus::try_from("Archived"),
        Err(ParseModuleStatusError("Archived".to_owned()))
    );
}

#[rstest]
fn status_labels_match_serialised_form() {
    for status in ModuleStatus::ALL {
        let json = serde_json::to_string(&status).expect("status serialises");
        assert_eq!(json, format!("\"{}\"", status.as_str()));
    }
}

#[rstest]
#[case(ModuleStatus::Created, false)]
#[case(ModuleStatus::TriageQaPassed, false)]
#[case(ModuleStatus::SaRevisionRequested, false)]
#[case(ModuleStatus::SaApproved, true)]
#[case(ModuleStatus::MergedToDevelop, true)]
fn is_terminal_returns_expected(#[case] status: ModuleStatus, #[case] expected: bool) {
    assert_eq!(status.is_terminal(), expected);
}

#[rstest]
#[case(ModuleStatus::SetupInstructionsProvided)]
#[case(ModuleStatus::PendingTriageQa)]
#[case(ModuleStatus::PendingSaReview)]
#[case(ModuleStatus::MergedToDevelop)]
fn manual_only_states_are_not_derived_by_recorders(#[case] status: ModuleStatus) {
    assert!(!status.is_reachable_by_recorder());
}

#[rstest]
#[case(TriageAssessment::Pass, ModuleStatus::TriageQaPassed)]
#[case(TriageAssessment::Fail, ModuleStatus::TriageQaFailed)]
fn assessment_derives_status(#[case] assessment: TriageAssessment, #[case] expected: ModuleStatus) {
    assert_eq!(assessment.resulting_status(), expected);
    assert!(expected.is_reachable_by_recorder());
}

#[rstest]
#[case(SaDecision::Approved, ModuleStatus::SaApproved)]
#[case(SaDecision::RevisionRequested, ModuleStatus::SaRevisionRequested)]
fn decision_derives_status(#[case] decision: SaDecision, #[case] expected: ModuleStatus) {
    assert_eq!(decision.resulting_status(), expected);
    assert!(expected.is_reachable_by_recorder());
}

#[rstest]
#[case("pass")]
#[case("PASS")]
#[case("Passed")]
#[case("")]
fn assessment_accepts_only_exact_literals(#[case] label: &str) {
    assert_eq!(
        TriageAssessment::try_from(label),
        Err(ParseTriageAssessmentError(label.to_owned()))
    );
}

#[rstest]
#[case("SA Approved (Ready for Dev Merge)", SaDecision::Approved)]
#[case("SA Revision Requested", SaDecision::RevisionRequested)]
fn decision_parses_labels(#[case] label: &str, #[case] expected: SaDecision) {
    assert_eq!(SaDecision::try_from(label), Ok(expected));
    assert_eq!(expected.as_str(), label);
}

#[rstest]
#[case("SA Approved")]
#[case("Approved")]
#[case("sa revision requested")]
fn decision_rejects_other_literals(#[case] label: &str) {
    assert_eq!(
        SaDecision::try_from(label),
        Err(ParseSaDecisionError(label.to_owned()))
    );
}

#[rstest]
fn decision_serialises_with_display_label() {
    let json = serde_json::to_string(&SaDecision::Approved).expect("decision serialises");
    assert_eq!(json, "\"SA Approved (Ready for Dev Merge)\"");
}
