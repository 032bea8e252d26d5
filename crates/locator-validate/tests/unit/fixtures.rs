//! Shared catalogs for validator tests
//!
//! `agent_worker_common` mirrors a three-group layout where each unit
//! declares a handful of services next to a shared-namespace interface and a
//! converter interface.

use locator_domain::{
    BindingDescriptor, CompiledUnit, ModuleGroup, ServiceCatalog, TypeDecl, TypeKind,
};

/// `Common.IFoo` implemented by `Common.FooImpl`, without any binding
pub fn foo_catalog() -> ServiceCatalog {
    ServiceCatalog::new().with_unit(
        CompiledUnit::new("Common", ModuleGroup::Common)
            .with_type(TypeDecl::interface("Common.IFoo"))
            .with_type(TypeDecl::class("Common.FooImpl").implementing("Common.IFoo"))
            .with_type(TypeDecl::class("Common.BarImpl"))
            .with_type(TypeDecl::interface("Common.IBar"))
            .with_type(TypeDecl::new("Common.FooBase", TypeKind::AbstractClass).implementing("Common.IFoo"))
            .with_type(TypeDecl::new("Common.FooHelpers", TypeKind::StaticClass))
            .with_type(TypeDecl::new("Common.FooValue", TypeKind::Struct).implementing("Common.IFoo"))
            .with_type(TypeDecl::class("Common.DerivedFoo").with_base("Common.FooBase")),
    )
}

/// Catalog with `Common.IFoo` bound to `descriptor`
pub fn foo_with(descriptor: BindingDescriptor) -> ServiceCatalog {
    foo_catalog()
        .with_binding("Common.IFoo", descriptor)
        .expect("single binding")
}

fn group_unit(name: &str, group: ModuleGroup, services: &[&str]) -> CompiledUnit {
    let mut unit = CompiledUnit::new(name, group);
    for service in services {
        unit = unit
            .with_type(TypeDecl::interface(format!("{name}.I{service}")))
            .with_type(TypeDecl::class(format!("{name}.{service}")).implementing(format!("{name}.I{service}")));
    }
    unit.with_type(TypeDecl::interface(format!(
        "Microsoft.TeamFoundation.DistributedTask.{name}.IShared"
    )))
    .with_type(TypeDecl::interface(format!("{name}.IConverterFactory")))
}

/// Three groups; every service is bound except `Agent.Listener.ICredentialProvider`
pub fn agent_worker_common() -> ServiceCatalog {
    let layout: [(&str, ModuleGroup, &[&str]); 3] = [
        ("Agent.Listener", ModuleGroup::Agent, &["MessageListener", "JobDispatcher", "CredentialProvider"]),
        ("Common", ModuleGroup::Common, &["Terminal", "ProcessInvoker", "TaskLogger"]),
        ("Worker", ModuleGroup::Worker, &["JobRunner", "StepsRunner", "ExpressionManager"]),
    ];

    let mut catalog = ServiceCatalog::new();
    for (unit, group, services) in layout {
        catalog.add_unit(group_unit(unit, group, services));
        for service in services.iter().filter(|s| !s.ends_with("Provider")) {
            catalog
                .bind(
                    format!("{unit}.I{service}"),
                    BindingDescriptor::new(format!("{unit}.{service}")),
                )
                .expect("unique interfaces");
        }
    }
    catalog
}
