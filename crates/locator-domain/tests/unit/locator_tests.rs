//! Unit tests for platform resolution

use locator_domain::binding::{BindingDescriptor, BindingTable};
use locator_domain::error::Error;
use locator_domain::locator::ServiceLocator;
use locator_domain::value_objects::Platform;

fn table() -> BindingTable {
    BindingTable::new()
        .with_binding(
            "Agent.IProcessInvoker",
            BindingDescriptor::new("Agent.ProcessInvoker")
                .preferred_on(Platform::Windows, "Agent.WindowsProcessInvoker")
                .with_null_override(Platform::Linux),
        )
        .and_then(|t| t.with_binding("Agent.IBroken", BindingDescriptor::with_null_default()))
        .expect("bindings should succeed")
}

#[test]
fn test_resolve_uses_platform_override() {
    let table = table();
    let locator = ServiceLocator::for_platform(&table, Some(Platform::Windows));

    let resolved = locator.resolve("Agent.IProcessInvoker").unwrap();

    assert_eq!(resolved.as_str(), "Agent.WindowsProcessInvoker");
}

#[test]
fn test_resolve_falls_back_to_default() {
    let table = table();

    for platform in [Some(Platform::Linux), Some(Platform::MacOS), None] {
        let locator = ServiceLocator::for_platform(&table, platform);
        assert_eq!(
            locator.resolve("Agent.IProcessInvoker").unwrap().as_str(),
            "Agent.ProcessInvoker"
        );
    }
}

#[test]
fn test_resolve_unknown_interface_lists_available() {
    let table = table();
    let locator = ServiceLocator::for_platform(&table, None);

    let err = locator.resolve("Agent.IMissing").unwrap_err();

    match err {
        Error::NotRegistered { interface, available } => {
            assert_eq!(interface, "Agent.IMissing");
            assert_eq!(available, vec!["Agent.IBroken", "Agent.IProcessInvoker"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_resolve_unbound_default_is_an_error() {
    let table = table();
    let locator = ServiceLocator::for_platform(&table, Some(Platform::MacOS));

    let err = locator.resolve("Agent.IBroken").unwrap_err();

    assert!(matches!(err, Error::UnboundDefault { .. }));
}

#[test]
fn test_default_locator_uses_compile_target() {
    let table = table();
    let locator = ServiceLocator::new(&table);

    assert_eq!(locator.platform(), Platform::current());
}
