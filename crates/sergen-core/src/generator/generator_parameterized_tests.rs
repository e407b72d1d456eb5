#![allow(non_snake_case)]

use super::*;
use crate::config::Flavor;
use test_case::test_case;

// ============================================================================
// Namespace guard token
// ============================================================================

#[test_case(Flavor::Boost, None, "BOOSTSERIALIZATION" ; "boost without namespace")]
#[test_case(Flavor::Hpx, None, "HPXSERIALIZATION" ; "hpx without namespace")]
#[test_case(Flavor::Boost, Some("LibGeoDecomp"), "LIBGEODECOMP_BOOSTSERIALIZATION_" ; "boost with namespace")]
#[test_case(Flavor::Hpx, Some("sim"), "SIM_HPXSERIALIZATION_" ; "hpx with namespace")]
fn HeaderGenerator___new___derives_namespace_guard(
    flavor: Flavor,
    namespace: Option<&str>,
    expected: &str,
) {
    let mut config = GeneratorConfig::for_flavor(flavor);
    if let Some(namespace) = namespace {
        config = config.with_namespace(namespace);
    }

    let generator = HeaderGenerator::new(config);

    assert_eq!(generator.namespace_guard(), expected);
}

// ============================================================================
// Template parameter rendering in both generated blocks
// ============================================================================

#[test_case(&[], "template<typename ARCHIVE>", "Foo& object" ; "no parameters")]
#[test_case(&[("typename", "T")], "template<typename ARCHIVE, typename T>", "Foo<T>& object" ; "one parameter")]
#[test_case(
    &[("int", "DIM"), ("typename", "CELL")],
    "template<typename ARCHIVE, int DIM, typename CELL>",
    "Foo<DIM, CELL>& object"
    ; "declaration order kept"
)]
fn HeaderGenerator___serialize_function___renders_template_parameters(
    params: &[(&str, &str)],
    expected_head: &str,
    expected_object: &str,
) {
    let class = params
        .iter()
        .fold(ClassDescription::new("Foo"), |class, (kind, name)| {
            class.with_template_parameter(*kind, *name)
        });
    let generator = HeaderGenerator::new(GeneratorConfig::for_flavor(Flavor::Boost));

    let code = generator.serialize_function(&class);

    assert!(code.starts_with(&format!("    {expected_head}\n")));
    assert!(code.contains(expected_object));
    assert!(!code.contains("<>"));
}

#[test_case(&[], "template<class ARCHIVE>", "Foo& object" ; "no parameters")]
#[test_case(
    &[("typename", "A"), ("typename", "B")],
    "template<class ARCHIVE, typename A, typename B>",
    "Foo<A, B>& object"
    ; "two parameters"
)]
fn HeaderGenerator___namespace_link___renders_template_parameters(
    params: &[(&str, &str)],
    expected_head: &str,
    expected_object: &str,
) {
    let class = params
        .iter()
        .fold(ClassDescription::new("Foo"), |class, (kind, name)| {
            class.with_template_parameter(*kind, *name)
        });
    let generator = HeaderGenerator::new(GeneratorConfig::for_flavor(Flavor::Boost));

    let code = generator.namespace_link(&class);

    assert!(code.starts_with(&format!("{expected_head}\n")));
    assert!(code.contains(expected_object));
}

// ============================================================================
// Macro guard wrapping
// ============================================================================

#[test_case(None, "body" ; "no macro guard")]
#[test_case(Some("WITH_HPX"), "#include<config.h>\n#ifdef WITH_HPX\nbody\n#endif\n" ; "macro guard")]
fn HeaderGenerator___guard___wraps_only_when_configured(macro_guard: Option<&str>, expected: &str) {
    let mut config = GeneratorConfig::for_flavor(Flavor::Hpx);
    if let Some(macro_guard) = macro_guard {
        config = config.with_macro_guard(macro_guard);
    }

    let generator = HeaderGenerator::new(config);

    assert_eq!(generator.guard("body".to_string()), expected);
}
