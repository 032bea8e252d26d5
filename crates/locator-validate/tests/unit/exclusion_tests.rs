//! Tests for naming exclusions and exemption sets

use locator_domain::QualifiedName;
use locator_validate::{ExclusionReason, ExclusionRules, ExemptionSet};

#[test]
fn test_default_rules() {
    let rules = ExclusionRules::default();

    assert_eq!(
        rules.exclusion_reason(&QualifiedName::new(
            "Microsoft.TeamFoundation.DistributedTask.Pipelines.IStep"
        )),
        Some(ExclusionReason::SharedNamespace(
            "Microsoft.TeamFoundation.DistributedTask".to_string()
        ))
    );
    assert_eq!(
        rules.exclusion_reason(&QualifiedName::new("Agent.Sdk.IConverterFactory")),
        Some(ExclusionReason::ConversionMarker("IConverter".to_string()))
    );
    assert!(!rules.is_excluded(&QualifiedName::new("Agent.Listener.IMessageListener")));
}

#[test]
fn test_prefix_wins_over_marker() {
    let rules = ExclusionRules::default();

    let reason = rules.exclusion_reason(&QualifiedName::new(
        "Microsoft.TeamFoundation.DistributedTask.IConverterThing",
    ));

    assert!(matches!(reason, Some(ExclusionReason::SharedNamespace(_))));
}

#[test]
fn test_prefix_must_lead_the_name() {
    let rules = ExclusionRules::none().with_namespace_prefix("Vendor.Shared");

    assert!(rules.is_excluded(&QualifiedName::new("Vendor.Shared.IThing")));
    assert!(!rules.is_excluded(&QualifiedName::new("Agent.Vendor.Shared.IThing")));
}

#[test]
fn test_none_excludes_nothing() {
    let rules = ExclusionRules::none();

    assert!(!rules.is_excluded(&QualifiedName::new("Common.IConverterThing")));
}

#[test]
fn test_custom_marker() {
    let rules = ExclusionRules::none().with_marker("Legacy");

    assert_eq!(
        rules
            .exclusion_reason(&QualifiedName::new("Worker.ILegacyRunner"))
            .map(|r| r.to_string()),
        Some("conversion marker 'Legacy'".to_string())
    );
}

#[test]
fn test_exemption_set_by_name() {
    let mut exemptions: ExemptionSet = ["Agent.Listener.ICredentialProvider"].into_iter().collect();

    assert!(exemptions.contains("Agent.Listener.ICredentialProvider"));
    assert!(!exemptions.contains("Agent.Listener.IMessageListener"));
    assert!(!exemptions.insert("Agent.Listener.ICredentialProvider"));

    exemptions.extend(["Worker.IDiagnosticLogProvider"]);
    assert_eq!(exemptions.len(), 2);
}

#[test]
fn test_exemption_set_serializes_as_sorted_list() {
    let exemptions = ExemptionSet::new().with("Worker.IB").with("Agent.IA");

    let json = serde_json::to_string(&exemptions).expect("serialize");

    assert_eq!(json, r#"["Agent.IA","Worker.IB"]"#);
    let back: ExemptionSet = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, exemptions);
}
