//! Tests for the registry validator

use std::collections::HashSet;

use locator_domain::ports::InterfaceSource;
use locator_domain::{BindingDescriptor, InterfaceDecl, ModuleGroup, Platform, QualifiedName, SlotValue, Slot, TypeKind};
use locator_validate::{BindingViolation, ExemptionSet, InvalidReason, RegistryValidator, ValidationError, ViolationKind};

use crate::fixtures::{foo_catalog, foo_with};

fn ifoo() -> Vec<InterfaceDecl> {
    vec![InterfaceDecl::new("Common.IFoo", ModuleGroup::Common)]
}

fn invalid(slot: Slot, concrete: Option<&str>, reason: InvalidReason) -> BindingViolation {
    BindingViolation::invalid_binding(
        QualifiedName::new("Common.IFoo"),
        ModuleGroup::Common,
        slot,
        concrete.map(QualifiedName::new).as_ref(),
        reason,
    )
}

#[test]
fn test_valid_default_binding_has_no_violations() {
    let catalog = foo_with(BindingDescriptor::new("Common.FooImpl"));

    let violations = RegistryValidator::new(&catalog).validate(&ifoo(), &ExemptionSet::new());

    assert!(violations.is_empty(), "unexpected: {violations:?}");
}

#[test]
fn test_null_default_is_invalid_binding_not_missing() {
    let catalog = foo_with(BindingDescriptor::with_null_default());

    let violations = RegistryValidator::new(&catalog).validate(&ifoo(), &ExemptionSet::new());

    assert_eq!(violations, vec![invalid(Slot::Default, None, InvalidReason::NullType)]);
}

#[test]
fn test_absent_default_is_reported_as_null() {
    let catalog = foo_with(BindingDescriptor::without_default());

    let violations = RegistryValidator::new(&catalog).validate(&ifoo(), &ExemptionSet::new());

    assert_eq!(violations, vec![invalid(Slot::Default, None, InvalidReason::NullType)]);
}

#[test]
fn test_bad_windows_override_reported_alone() {
    let catalog = foo_with(
        BindingDescriptor::new("Common.FooImpl").preferred_on(Platform::Windows, "Common.BarImpl"),
    );

    let violations = RegistryValidator::new(&catalog).validate(&ifoo(), &ExemptionSet::new());

    assert_eq!(
        violations,
        vec![invalid(
            Slot::PreferredOnWindows,
            Some("Common.BarImpl"),
            InvalidReason::DoesNotImplement
        )]
    );
}

#[test]
fn test_missing_descriptor_reported_once() {
    let catalog = foo_catalog();

    let violations = RegistryValidator::new(&catalog).validate(&ifoo(), &ExemptionSet::new());

    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].kind(), ViolationKind::MissingDescriptor);
    assert_eq!(violations[0].interface_name().as_str(), "Common.IFoo");
    assert_eq!(violations[0].reason(), None);
}

#[test]
fn test_interface_bound_to_interface() {
    let catalog = foo_with(BindingDescriptor::new("Common.IBar"));

    let violations = RegistryValidator::new(&catalog).validate(&ifoo(), &ExemptionSet::new());

    assert_eq!(
        violations,
        vec![invalid(Slot::Default, Some("Common.IBar"), InvalidReason::IsInterface)]
    );
}

#[test]
fn test_non_concrete_kinds_rejected() {
    let cases = [
        ("Common.FooBase", TypeKind::AbstractClass),
        ("Common.FooHelpers", TypeKind::StaticClass),
        ("Common.FooValue", TypeKind::Struct),
    ];

    for (concrete, kind) in cases {
        let catalog = foo_with(BindingDescriptor::new(concrete));
        let violations = RegistryValidator::new(&catalog).validate(&ifoo(), &ExemptionSet::new());
        assert_eq!(
            violations,
            vec![invalid(Slot::Default, Some(concrete), InvalidReason::NotAClass(kind))],
            "binding to {concrete}"
        );
    }
}

#[test]
fn test_unknown_type_rejected() {
    let catalog = foo_with(BindingDescriptor::new("Common.Missing"));

    let violations = RegistryValidator::new(&catalog).validate(&ifoo(), &ExemptionSet::new());

    assert_eq!(
        violations,
        vec![invalid(Slot::Default, Some("Common.Missing"), InvalidReason::UnknownType)]
    );
}

#[test]
fn test_implementation_inherited_through_base_class() {
    let catalog = foo_with(BindingDescriptor::new("Common.DerivedFoo"));

    let violations = RegistryValidator::new(&catalog).validate(&ifoo(), &ExemptionSet::new());

    assert!(violations.is_empty(), "unexpected: {violations:?}");
}

#[test]
fn test_null_and_absent_overrides_tolerated() {
    let catalog = foo_with(
        BindingDescriptor::new("Common.FooImpl")
            .with_null_override(Platform::Windows)
            .preferred_on(Platform::Linux, "Common.FooImpl"),
    );

    let violations = RegistryValidator::new(&catalog).validate(&ifoo(), &ExemptionSet::new());

    assert!(violations.is_empty(), "unexpected: {violations:?}");
}

#[test]
fn test_every_bad_slot_reported_in_slot_order() {
    let mut descriptor = BindingDescriptor::with_null_default()
        .preferred_on(Platform::Linux, "Common.IBar")
        .preferred_on(Platform::Windows, "Common.BarImpl");
    descriptor.set(Slot::PreferredOnMacOS, SlotValue::Bound("Common.FooBase".into()));
    let catalog = foo_with(descriptor);

    let violations = RegistryValidator::new(&catalog).validate(&ifoo(), &ExemptionSet::new());

    let slots: Vec<Option<Slot>> = violations
        .iter()
        .map(|v| match v {
            BindingViolation::InvalidBinding { slot, .. } => Some(*slot),
            BindingViolation::MissingDescriptor { .. } => None,
        })
        .collect();
    assert_eq!(
        slots,
        vec![
            Some(Slot::Default),
            Some(Slot::PreferredOnWindows),
            Some(Slot::PreferredOnMacOS),
            Some(Slot::PreferredOnLinux),
        ]
    );
}

#[test]
fn test_exempt_interface_never_reported() {
    let descriptors = [
        None,
        Some(BindingDescriptor::with_null_default()),
        Some(BindingDescriptor::new("Common.IBar")),
    ];
    let exemptions = ExemptionSet::new().with("Common.IFoo");

    for descriptor in descriptors {
        let catalog = match descriptor {
            Some(descriptor) => foo_with(descriptor),
            None => foo_catalog(),
        };
        let outcome = RegistryValidator::new(&catalog).audit(&ifoo(), &exemptions);
        assert!(outcome.violations.is_empty());
        assert_eq!(outcome.exempted, 1);
        assert_eq!(outcome.checked, 0);
    }
}

#[test]
fn test_converter_excluded_without_exemption() {
    let catalog = foo_catalog();
    let interfaces = vec![InterfaceDecl::new("Common.IConverterThing", ModuleGroup::Common)];

    let outcome = RegistryValidator::new(&catalog).audit(&interfaces, &ExemptionSet::new());

    assert!(outcome.violations.is_empty());
    assert_eq!(outcome.excluded, 1);
}

#[test]
fn test_shared_namespace_excluded_without_exemption() {
    let catalog = foo_catalog();
    let interfaces = vec![InterfaceDecl::new(
        "Microsoft.TeamFoundation.DistributedTask.WebApi.ITaskClient",
        ModuleGroup::Agent,
    )];

    let violations = RegistryValidator::new(&catalog).validate(&interfaces, &ExemptionSet::new());

    assert!(violations.is_empty());
}

#[test]
fn test_all_interfaces_scanned_without_stopping() {
    let catalog = foo_catalog();
    let interfaces = vec![
        InterfaceDecl::new("Common.IFoo", ModuleGroup::Common),
        InterfaceDecl::new("Common.IBar", ModuleGroup::Common),
        InterfaceDecl::new("Common.IFoo", ModuleGroup::Common),
    ];

    let violations = RegistryValidator::new(&catalog).validate(&interfaces, &ExemptionSet::new());

    // Duplicates are validated independently
    assert_eq!(violations.len(), 3);
    assert!(violations.iter().all(|v| v.kind() == ViolationKind::MissingDescriptor));
}

#[test]
fn test_validation_is_idempotent() {
    let catalog = foo_with(
        BindingDescriptor::with_null_default().preferred_on(Platform::MacOS, "Common.BarImpl"),
    );
    let validator = RegistryValidator::new(&catalog);
    let interfaces = vec![
        InterfaceDecl::new("Common.IFoo", ModuleGroup::Common),
        InterfaceDecl::new("Common.IBar", ModuleGroup::Common),
    ];

    let first: HashSet<_> = validator.validate(&interfaces, &ExemptionSet::new()).into_iter().collect();
    let second: HashSet<_> = validator.validate(&interfaces, &ExemptionSet::new()).into_iter().collect();

    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
}

#[test]
fn test_validate_unit_reads_universe_from_source() {
    let catalog = foo_with(BindingDescriptor::new("Common.FooImpl"));
    let validator = RegistryValidator::new(&catalog);

    let violations = validator
        .validate_unit(&catalog, "Common", &ExemptionSet::new())
        .expect("unit exists");

    // IFoo is valid, IBar has no descriptor
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].interface_name().as_str(), "Common.IBar");
    assert_eq!(catalog.interfaces("Common").expect("unit exists").len(), 2);
}

#[test]
fn test_unavailable_unit_is_precondition_failure() {
    let catalog = foo_catalog();

    let result = RegistryValidator::new(&catalog).validate_unit(&catalog, "Agent", &ExemptionSet::new());

    assert!(matches!(
        result,
        Err(ValidationError::UniverseUnavailable { ref unit, .. }) if unit == "Agent"
    ));
}

#[test]
fn test_check_binding_directly() {
    let catalog = foo_catalog();
    let validator = RegistryValidator::new(&catalog);
    let ifoo = QualifiedName::new("Common.IFoo");

    assert_eq!(validator.check_binding(&ifoo, &"Common.FooImpl".into()), Ok(()));
    assert_eq!(
        validator.check_binding(&ifoo, &"Common.BarImpl".into()),
        Err(InvalidReason::DoesNotImplement)
    );
}
