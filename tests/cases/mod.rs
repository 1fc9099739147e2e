// Table-driven container cases.
//
// `test_case!` generates one module per case with an `input()` constructor
// and one test function per assertion field.

// Helper macro to distinguish between patterns and expressions
#[macro_export]
macro_rules! assert_case {
    // Guard patterns - patterns with if conditions
    ($result:expr, { $pattern:pat if $guard:expr }) => {
        match $result {
            $pattern if $guard => {},
            other => panic!("Expected {} if {} but got {:?}", stringify!($pattern), stringify!($guard), other),
        }
    };

    ($result:expr, { Err($($pattern:tt)*) }) => {
        match $result {
            Err($($pattern)*) => {},
            other => panic!("Expected Err({}) but got {:#?}", stringify!($($pattern)*), other),
        }
    };

    // Default case - treat as expression for equality comparison
    ($result:expr, { $expected:expr }) => {
        match $result {
            Ok(actual) => {
                pretty_assertions::assert_eq!($expected, actual, "Expected {:#?} but got {:#?}\n\n< expected / got >", $expected, actual);
            },
            other => panic!("Expected Ok(...) but got {:?}", other),
        }
    };
}

// Helper macro to generate test functions based on field names
#[macro_export]
macro_rules! handle_case {
    // Every element, in order, through each read path.
    ([$($attrs:meta)*] elements, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_elements() {
            let container = input();
            let expected = $expected;

            let mut visited = Vec::new();
            indexed::for_each(Some(&container), Some(|e: &_| visited.push(Clone::clone(e)))).unwrap();
            pretty_assertions::assert_eq!(visited, expected);

            let mut positions = Vec::new();
            indexed::for_each_indexed(Some(&container), Some(|_: &_, i: usize| positions.push(i)))
                .unwrap();
            pretty_assertions::assert_eq!(positions, (0..expected.len()).collect::<Vec<_>>());

            for (index, element) in expected.iter().enumerate() {
                let index = index as isize;
                let owned = element.clone();
                assert_case!(indexed::get(Some(&container), index), { element });
                assert_case!(
                    indexed::get_or_else_with(
                        Some(&container),
                        index,
                        Some(|| panic!("fallback must stay lazy")),
                    ),
                    { owned }
                );
            }
        }
    };

    // Indices just outside the container fall back.
    ([$($attrs:meta)*] fallback, $fallback:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_fallback() {
            let container = input();
            let len = container.length() as isize;

            for index in [-1, len, len + 10] {
                assert_case!(
                    indexed::get(Some(&container), index),
                    { Err(Error::IndexOutOfRange { name: "index", .. }) }
                );
                assert_case!(indexed::get_or_else(Some(&container), index, $fallback), $fallback);
                assert_case!(
                    indexed::get_or_else_with(Some(&container), index, Some(|| $fallback)),
                    $fallback
                );
            }
        }
    };

    ([$($attrs:meta)*] empty, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_empty() {
            let container = input();
            assert_case!(is_empty(Some(&container)), $expected);
            assert_case!(is_not_empty(Some(&container)).map(|b| !b), $expected);
        }
    };

    // Entry set of a keyed mapping, order-independent.
    ([$($attrs:meta)*] entries, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_entries() {
            let container = input();
            let expected = std::collections::BTreeMap::from($expected);
            let mut visited = std::collections::BTreeMap::new();
            let result = mapping::for_each(
                Some(&container),
                Some(|k: &_, v: &_| {
                    assert!(visited.insert(Clone::clone(k), Clone::clone(v)).is_none(), "duplicate entry");
                }),
            );
            assert_case!(result.map(|()| visited), { expected });
        }
    };

    // Parameter name reported for an absent container of this type.
    ([$($attrs:meta)*] absent, $name:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_absent() {
            fn absent<C>(_: &C) -> Option<&C> {
                None
            }

            let container = input();
            let missing = Error::MissingArgument { name: $name };
            assert_case!(is_empty(absent(&container)), { Err(ref e) if *e == missing });
            assert_case!(is_not_empty(absent(&container)), { Err(ref e) if *e == missing });
        }
    };

    // Generic case for unknown field names
    ([$($attrs:meta)*] $field_name:ident, $expected:tt) => {
        compile_error!(concat!("Unknown test case field: ", stringify!($field_name)));
    };
}

// Helper macro to recursively parse assertion fields (now correctly capturing braces)
#[macro_export]
macro_rules! parse_assertions {
    // Base case: no more fields to parse
    (@parse [$($test_functions:tt)*]) => {
        $($test_functions)*
    };

    // Parse assertion field with potential attributes (handles both cases)
    (@parse [$($test_functions:tt)*] $(#[$attr:meta])* $field_name:ident: $field_value:tt, $($rest:tt)*) => {
        parse_assertions! {@parse [
            $($test_functions)*
            handle_case! {[$($attr)*] $field_name, $field_value}
        ] $($rest)*}
    };
}

// Main macro - name first, input and its type second, then any order for assertions
#[macro_export]
macro_rules! test_case {
    (
        name: $name:ident,
        input: $input:expr,
        ty: $ty:ty,
        $($assertion_fields:tt)*
    ) => {
        mod $name {
            #![allow(unused_imports, dead_code)]

            use super::*;
            use konvenience::containers::{indexed, is_empty, is_not_empty, mapping};
            use konvenience::prelude::*;

            // Fresh container for every test function
            fn input() -> $ty {
                $input
            }

            // Generate all test functions
            parse_assertions! {@parse [] $($assertion_fields)*}
        }
    };
}
