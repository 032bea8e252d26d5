//! Unit tests for the JSON service manifest

use std::fs;

use locator_domain::error::Error;
use locator_domain::manifest::ServiceManifest;
use locator_domain::ports::{BindingMetadata, InterfaceSource};
use locator_domain::value_objects::{InterfaceDecl, ModuleGroup, Slot};
use tempfile::TempDir;

const MANIFEST: &str = r#"{
  "units": [
    {
      "name": "Agent.Listener",
      "group": "agent",
      "types": [
        { "name": "Agent.Listener.IMessageListener", "kind": "interface" },
        {
          "name": "Agent.Listener.MessageListener",
          "kind": "class",
          "implements": ["Agent.Listener.IMessageListener"]
        }
      ]
    }
  ],
  "bindings": {
    "Agent.Listener.IMessageListener": {
      "default": "Agent.Listener.MessageListener",
      "preferredOnWindows": null
    }
  }
}"#;

#[test]
fn test_null_and_absent_keys_are_preserved() {
    let catalog = ServiceManifest::from_json(MANIFEST)
        .and_then(ServiceManifest::into_catalog)
        .expect("manifest should load");

    let interface = InterfaceDecl::new("Agent.Listener.IMessageListener", ModuleGroup::Agent);
    let descriptor = catalog
        .descriptor_for(&interface)
        .expect("descriptor should be attached");

    assert_eq!(
        descriptor.default_type().map(|n| n.as_str()),
        Some("Agent.Listener.MessageListener")
    );
    assert!(descriptor.slot(Slot::PreferredOnWindows).is_null());
    assert!(descriptor.slot(Slot::PreferredOnLinux).is_absent());
}

#[test]
fn test_manifest_units_become_interface_sources() {
    let catalog = ServiceManifest::from_json(MANIFEST)
        .and_then(ServiceManifest::into_catalog)
        .expect("manifest should load");

    let interfaces = catalog
        .interfaces("Agent.Listener")
        .expect("unit should be known");
    assert_eq!(interfaces.len(), 1);
}

#[test]
fn test_explicit_null_default_is_kept() {
    let json = r#"{
      "units": [],
      "bindings": { "Common.IFoo": { "default": null } }
    }"#;
    let manifest = ServiceManifest::from_json(json).expect("manifest should parse");

    let record = manifest
        .bindings
        .get("Common.IFoo")
        .expect("binding should be present");
    assert_eq!(record.default, Some(None));
    assert!(record.to_descriptor().slot(Slot::Default).is_null());
}

#[test]
fn test_unknown_descriptor_key_is_rejected() {
    let json = r#"{
      "units": [],
      "bindings": { "Common.IFoo": { "default": "Common.Foo", "preferredOnBeOS": "Common.BeFoo" } }
    }"#;

    let result = ServiceManifest::from_json(json);

    assert!(matches!(result, Err(Error::Json { .. })));
}

#[test]
fn test_duplicate_unit_is_rejected() {
    let json = r#"{
      "units": [
        { "name": "Worker", "group": "worker" },
        { "name": "Worker", "group": "worker" }
      ]
    }"#;

    let result = ServiceManifest::from_json(json);

    assert!(matches!(result, Err(Error::InvalidManifest { .. })));
}

#[test]
fn test_manifest_round_trips_through_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("services.json");
    let manifest = ServiceManifest::from_json(MANIFEST).unwrap();
    fs::write(&path, manifest.to_json().unwrap()).unwrap();

    let reloaded = ServiceManifest::from_path(&path).expect("manifest file should load");

    assert_eq!(reloaded, manifest);
}

#[test]
fn test_missing_manifest_file_is_io_error() {
    let temp = TempDir::new().unwrap();

    let result = ServiceManifest::from_path(temp.path().join("absent.json"));

    assert!(matches!(result, Err(Error::Io { .. })));
}
