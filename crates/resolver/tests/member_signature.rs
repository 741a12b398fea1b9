mod common;

use common::*;
use typebind_resolver::{
    ContainerKind, MemberKind, MemberSignature, ResolveError, ResolvedType, SubstitutionResolver,
    TypeDescriptor, TypeUse,
};

/// ```text
/// class Base<T> { T f; List<T> items; T get(); void put(int, T); }
/// class Sub extends Base<String> { Integer f; }
/// class Leaf extends Sub
/// ```
fn hiding_hierarchy() -> typebind_resolver::TypeStore {
    store(vec![
        TypeDescriptor::class("Base")
            .with_type_parameter(param("T"))
            .with_field("f", var("T"))
            .with_field("items", generic(LIST, vec![var("T")]))
            .with_member(MemberSignature::method_return("get", "Base", var("T")))
            .with_member(MemberSignature::method_parameter("put", 0, "Base", concrete("int")))
            .with_member(MemberSignature::method_parameter("put", 1, "Base", var("T"))),
        TypeDescriptor::class("Sub")
            .extends(generic("Base", vec![concrete(STRING)]))
            .with_field("f", concrete(INTEGER)),
        TypeDescriptor::class("Leaf").extends(concrete("Sub")),
    ])
}

#[test]
fn hidden_fields_resolve_independently() {
    let store = hiding_hierarchy();
    let resolver = SubstitutionResolver::new(&store);
    let f_on_base = member(&store, "Base", "f");
    let f_on_sub = member(&store, "Sub", "f");

    let base_view = resolver.resolve_member("Sub", f_on_base).unwrap();
    let sub_view = resolver.resolve_member("Sub", f_on_sub).unwrap();
    assert!(base_view.is_exactly(STRING));
    assert!(sub_view.is_exactly(INTEGER));

    // Resolving in the other order changes nothing.
    assert_eq!(resolver.resolve_member("Sub", f_on_sub).unwrap(), sub_view);
    assert_eq!(resolver.resolve_member("Sub", f_on_base).unwrap(), base_view);
}

#[test]
fn inherited_member_resolves_through_intermediate_type() {
    let store = hiding_hierarchy();
    let resolver = SubstitutionResolver::new(&store);

    let items = resolver.resolve_member("Leaf", member(&store, "Base", "items")).unwrap();
    assert_eq!(items.container, ContainerKind::Collection);
    assert_eq!(items.element(), Some(&ResolvedType::named(STRING)));
}

#[test]
fn member_seen_from_its_declaring_type_uses_bounds() {
    let store = hiding_hierarchy();
    let resolver = SubstitutionResolver::new(&store);

    let f = resolver.resolve_member("Base", member(&store, "Base", "f")).unwrap();
    assert!(f.is_exactly(OBJECT));
}

#[test]
fn method_return_and_parameters_are_substituted() {
    let store = hiding_hierarchy();
    let resolver = SubstitutionResolver::new(&store);
    let base = typebind_resolver::TypeProvider::require(&store, "Base").unwrap();

    let get = base
        .members
        .iter()
        .find(|m| m.kind == MemberKind::MethodReturn)
        .unwrap();
    assert!(resolver.resolve_member("Leaf", get).unwrap().is_exactly(STRING));

    let params: Vec<_> = base
        .members
        .iter()
        .filter(|m| matches!(m.kind, MemberKind::MethodParameter { .. }))
        .map(|m| resolver.resolve_member("Leaf", m).unwrap().to_string())
        .collect();
    assert_eq!(params, vec!["int".to_string(), STRING.to_string()]);
}

#[test]
fn method_type_parameters_shadow_and_fall_back_to_their_bound() {
    // class Repo<T> { <T extends Number> T max(); <E extends T> List<E> subset(); }
    let store = store(vec![
        TypeDescriptor::class("java.lang.Number"),
        TypeDescriptor::class("Repo")
            .with_type_parameter(param("T"))
            .with_member(
                MemberSignature::method_return("max", "Repo", var("T"))
                    .with_type_parameter(bounded("T", concrete("java.lang.Number"))),
            )
            .with_member(
                MemberSignature::method_return("subset", "Repo", generic(LIST, vec![var("E")]))
                    .with_type_parameter(bounded("E", var("T"))),
            ),
        TypeDescriptor::class("Orders").extends(generic("Repo", vec![concrete("Order")])),
        TypeDescriptor::class("Order"),
    ]);
    let resolver = SubstitutionResolver::new(&store);

    let max = resolver.resolve_member("Orders", member(&store, "Repo", "max")).unwrap();
    assert!(max.is_exactly("java.lang.Number"));

    // E's bound refers to the class parameter, which Orders binds.
    let subset = resolver.resolve_member("Orders", member(&store, "Repo", "subset")).unwrap();
    assert_eq!(subset.element(), Some(&ResolvedType::named("Order")));
}

#[test]
fn optional_of_array_field_marks_the_element() {
    let store = store(vec![TypeDescriptor::class("Holder").with_field(
        "names",
        generic(OPTIONAL, vec![TypeUse::array_of(concrete(STRING))]),
    )]);
    let resolver = SubstitutionResolver::new(&store);

    let names = resolver.resolve_member("Holder", member(&store, "Holder", "names")).unwrap();
    assert_eq!(names.name, OPTIONAL);
    assert_eq!(names.container, ContainerKind::Optional);
    assert!(!names.is_array());
    let element = names.element().unwrap();
    assert_eq!(element.name, STRING);
    assert!(element.is_array());
}

#[test]
fn identity_field_resolves_to_long() {
    let store = role_hierarchy();
    let resolver = SubstitutionResolver::new(&store);

    let id = resolver
        .resolve_member("IdentityType", member(&store, "IdentityType", "id"))
        .unwrap();
    assert!(id.is_exactly(LONG));
}

#[test]
fn resolve_members_lists_hidden_members_once_per_declaring_type() {
    let store = hiding_hierarchy();
    let resolver = SubstitutionResolver::new(&store);

    let members = resolver.resolve_members("Leaf").unwrap();
    let fields: Vec<_> = members
        .iter()
        .filter(|m| m.signature.name == "f")
        .map(|m| (m.signature.declaring_type.as_str(), m.resolved.to_string()))
        .collect();
    assert_eq!(
        fields,
        vec![("Sub", INTEGER.to_string()), ("Base", STRING.to_string())]
    );
    assert_eq!(members.len(), 6);
}

#[test]
fn member_of_unrelated_type_is_unreachable() {
    let store = hiding_hierarchy();
    let resolver = SubstitutionResolver::new(&store);

    let err = resolver
        .resolve_member("Base", member(&store, "Sub", "f"))
        .unwrap_err();
    assert_eq!(
        err,
        ResolveError::UnreachableType {
            context: "Base".into(),
            target: "Sub".into()
        }
    );
}

#[test]
fn member_with_unknown_declaring_type_is_not_found() {
    let store = hiding_hierarchy();
    let resolver = SubstitutionResolver::new(&store);
    let orphan = MemberSignature::field("x", "Ghost", concrete(STRING));

    assert_eq!(
        resolver.resolve_member("Leaf", &orphan).unwrap_err(),
        ResolveError::TypeNotFound("Ghost".into())
    );
}

#[test]
fn undeclared_variable_in_member_is_reported() {
    let store = store(vec![
        TypeDescriptor::class("Plain").with_field("broken", generic(LIST, vec![var("Q")])),
    ]);
    let resolver = SubstitutionResolver::new(&store);

    let err = resolver
        .resolve_member("Plain", member(&store, "Plain", "broken"))
        .unwrap_err();
    assert_eq!(
        err,
        ResolveError::UnknownTypeVariable {
            variable: "Q".into(),
            scope: "Plain#broken".into()
        }
    );
}

#[test]
fn method_type_parameter_does_not_leak_into_class_bounds() {
    // class Repo<T, U extends List<T>> { <T extends Number> U get(); }
    let store = store(vec![
        TypeDescriptor::class("java.lang.Number"),
        TypeDescriptor::class("Repo")
            .with_type_parameter(param("T"))
            .with_type_parameter(bounded("U", generic(LIST, vec![var("T")])))
            .with_member(
                MemberSignature::method_return("get", "Repo", var("U"))
                    .with_type_parameter(bounded("T", concrete("java.lang.Number"))),
            ),
        TypeDescriptor::class("StringRepo").extends(generic("Repo", vec![concrete(STRING)])),
    ]);
    let resolver = SubstitutionResolver::new(&store);
    let get = member(&store, "Repo", "get");

    let own = resolver.resolve_member("Repo", get).unwrap();
    assert_eq!(own.to_string(), "java.util.List<java.lang.Object>");

    // U stays unbound but its bound now sees the class-level T binding.
    let bound = resolver.resolve_member("StringRepo", get).unwrap();
    assert_eq!(bound.element(), Some(&ResolvedType::named(STRING)));
}
