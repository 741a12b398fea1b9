//! Shared hierarchy fixtures for the resolver behavior tests.

#![allow(dead_code)]

use typebind_resolver::logging::init_test_logging;
use typebind_resolver::{
    MemberSignature, TypeDescriptor, TypeParameterDeclaration, TypeStore, TypeUse,
};

pub const STRING: &str = "java.lang.String";
pub const LONG: &str = "java.lang.Long";
pub const INTEGER: &str = "java.lang.Integer";
pub const OBJECT: &str = "java.lang.Object";
pub const OPTIONAL: &str = "java.util.Optional";
pub const LIST: &str = "java.util.List";
pub const SET: &str = "java.util.Set";
pub const STREAM: &str = "java.util.stream.Stream";

pub fn concrete(name: &str) -> TypeUse {
    TypeUse::concrete(name)
}

pub fn var(name: &str) -> TypeUse {
    TypeUse::variable(name)
}

pub fn generic(name: &str, args: Vec<TypeUse>) -> TypeUse {
    TypeUse::parameterized(name, args)
}

pub fn param(name: &str) -> TypeParameterDeclaration {
    TypeParameterDeclaration::new(name)
}

pub fn bounded(name: &str, bound: TypeUse) -> TypeParameterDeclaration {
    TypeParameterDeclaration::new(name).bounded_by(bound)
}

/// Build a validated store and install test logging.
pub fn store(types: Vec<TypeDescriptor>) -> TypeStore {
    init_test_logging();
    TypeStore::from_descriptors(types).expect("fixture hierarchy should be valid")
}

/// The member of `owner` named `name` (first match).
pub fn member<'a>(store: &'a TypeStore, owner: &str, name: &str) -> &'a MemberSignature {
    use typebind_resolver::TypeProvider;
    store
        .get_type(owner)
        .and_then(|t| t.members_named(name).next())
        .unwrap_or_else(|| panic!("{owner} should declare {name}"))
}

/// Role-interface hierarchy used across suites:
///
/// ```text
/// interface RoleInterface<T>
/// interface ReadModel
/// class MyReadModel implements ReadModel
/// interface Identity<ID>
/// class IdentityType implements Identity<Long> { Long id; }
/// class Base<X> implements RoleInterface<X>
/// class Sub extends Base<Foo>
/// interface Interface<R extends ReadModel> extends RoleInterface<R>
/// class Impl implements Interface<MyReadModel>
/// class Generic<T extends ReadModel> implements RoleInterface<T>
/// class BoundSub extends Generic<ReadModel>
/// class RawSub extends Generic
/// ```
pub fn role_hierarchy() -> TypeStore {
    store(vec![
        TypeDescriptor::interface("RoleInterface").with_type_parameter(param("T")),
        TypeDescriptor::interface("ReadModel"),
        TypeDescriptor::class("MyReadModel").implements(concrete("ReadModel")),
        TypeDescriptor::class("Foo"),
        TypeDescriptor::interface("Identity").with_type_parameter(param("ID")),
        TypeDescriptor::class("IdentityType")
            .implements(generic("Identity", vec![concrete(LONG)]))
            .with_field("id", concrete(LONG)),
        TypeDescriptor::class("Base")
            .with_type_parameter(param("X"))
            .implements(generic("RoleInterface", vec![var("X")])),
        TypeDescriptor::class("Sub").extends(generic("Base", vec![concrete("Foo")])),
        TypeDescriptor::interface("Interface")
            .with_type_parameter(bounded("R", concrete("ReadModel")))
            .implements(generic("RoleInterface", vec![var("R")])),
        TypeDescriptor::class("Impl").implements(generic("Interface", vec![concrete("MyReadModel")])),
        TypeDescriptor::class("Generic")
            .with_type_parameter(bounded("T", concrete("ReadModel")))
            .implements(generic("RoleInterface", vec![var("T")])),
        TypeDescriptor::class("BoundSub").extends(generic("Generic", vec![concrete("ReadModel")])),
        TypeDescriptor::class("RawSub").extends(concrete("Generic")),
    ])
}

/// Minimal JDK-like container interfaces.
pub fn jdk_containers() -> Vec<TypeDescriptor> {
    vec![
        TypeDescriptor::class(OPTIONAL).with_type_parameter(param("T")),
        TypeDescriptor::interface("java.lang.Iterable").with_type_parameter(param("T")),
        TypeDescriptor::interface("java.util.Collection")
            .with_type_parameter(param("E"))
            .implements(generic("java.lang.Iterable", vec![var("E")])),
        TypeDescriptor::interface(LIST)
            .with_type_parameter(param("E"))
            .implements(generic("java.util.Collection", vec![var("E")])),
        TypeDescriptor::interface(SET)
            .with_type_parameter(param("E"))
            .implements(generic("java.util.Collection", vec![var("E")])),
        TypeDescriptor::interface(STREAM).with_type_parameter(param("T")),
    ]
}
