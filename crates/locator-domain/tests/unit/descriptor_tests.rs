//! Unit tests for binding descriptors

use locator_domain::binding::{BindingDescriptor, SlotValue};
use locator_domain::value_objects::{Platform, QualifiedName, Slot};

#[test]
fn test_new_descriptor_binds_only_default() {
    let descriptor = BindingDescriptor::new("Agent.Terminal");

    assert_eq!(
        descriptor.slot(Slot::Default),
        &SlotValue::Bound(QualifiedName::new("Agent.Terminal"))
    );
    assert!(descriptor.slot(Slot::PreferredOnWindows).is_absent());
    assert!(descriptor.slot(Slot::PreferredOnMacOS).is_absent());
    assert!(descriptor.slot(Slot::PreferredOnLinux).is_absent());
}

#[test]
fn test_slots_are_independently_queryable() {
    let descriptor = BindingDescriptor::new("Agent.Terminal")
        .preferred_on(Platform::Windows, "Agent.WindowsTerminal")
        .with_null_override(Platform::Linux);

    assert_eq!(descriptor.default_type().map(QualifiedName::as_str), Some("Agent.Terminal"));
    assert_eq!(
        descriptor.preferred_on_windows().map(QualifiedName::as_str),
        Some("Agent.WindowsTerminal")
    );
    assert_eq!(descriptor.preferred_on_macos(), None);
    assert_eq!(descriptor.preferred_on_linux(), None);
    assert!(descriptor.slot(Slot::PreferredOnLinux).is_null());
    assert!(descriptor.slot(Slot::PreferredOnMacOS).is_absent());
}

#[test]
fn test_null_and_missing_default_are_distinct() {
    let null_default = BindingDescriptor::with_null_default();
    let missing_default = BindingDescriptor::without_default();

    assert!(null_default.slot(Slot::Default).is_null());
    assert!(missing_default.slot(Slot::Default).is_absent());
    assert_eq!(null_default.default_type(), None);
    assert_eq!(missing_default.default_type(), None);
}

#[test]
fn test_present_slots_follow_fixed_order() {
    let descriptor = BindingDescriptor::new("Agent.Terminal")
        .preferred_on(Platform::Linux, "Agent.LinuxTerminal")
        .with_null_override(Platform::Windows);

    let slots: Vec<Slot> = descriptor.present_slots().map(|(slot, _)| slot).collect();

    assert_eq!(
        slots,
        vec![Slot::Default, Slot::PreferredOnWindows, Slot::PreferredOnLinux]
    );
}

#[test]
fn test_resolve_prefers_bound_override() {
    let descriptor = BindingDescriptor::new("Agent.Terminal")
        .preferred_on(Platform::MacOS, "Agent.MacTerminal");

    assert_eq!(
        descriptor.resolve(Some(Platform::MacOS)).map(QualifiedName::as_str),
        Some("Agent.MacTerminal")
    );
    assert_eq!(
        descriptor.resolve(Some(Platform::Windows)).map(QualifiedName::as_str),
        Some("Agent.Terminal")
    );
    assert_eq!(descriptor.resolve(None).map(QualifiedName::as_str), Some("Agent.Terminal"));
}

#[test]
fn test_resolve_null_override_falls_back_to_default() {
    let descriptor = BindingDescriptor::new("Agent.Terminal").with_null_override(Platform::Windows);

    assert_eq!(
        descriptor.resolve(Some(Platform::Windows)).map(QualifiedName::as_str),
        Some("Agent.Terminal")
    );
}

#[test]
fn test_resolve_without_default_uses_override_only() {
    let descriptor =
        BindingDescriptor::with_null_default().preferred_on(Platform::Linux, "Agent.LinuxTerminal");

    assert_eq!(
        descriptor.resolve(Some(Platform::Linux)).map(QualifiedName::as_str),
        Some("Agent.LinuxTerminal")
    );
    assert_eq!(descriptor.resolve(Some(Platform::Windows)), None);
}

#[test]
fn test_slot_value_from_presence() {
    assert_eq!(SlotValue::from_presence(None), SlotValue::Absent);
    assert_eq!(SlotValue::from_presence(Some(None)), SlotValue::Null);
    assert_eq!(
        SlotValue::from_presence(Some(Some(QualifiedName::new("A.B")))),
        SlotValue::Bound(QualifiedName::new("A.B"))
    );
}
