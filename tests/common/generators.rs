/// Tree generators for property tests.
use lumen_core::types::{Node, PropValue};
use proptest::prelude::*;

const TAGS: &[&str] = &[
    "div", "span", "p", "img", "a", "button", "input", "select", "label", "table", "thead",
    "tbody", "main", "nav", "header", "footer", "aside", "h1", "h2", "h3", "h4", "h5", "h6",
];

/// Props that the built-in rules read, with values that make them pass or fail.
fn arb_prop() -> impl Strategy<Value = (String, PropValue)> {
    prop_oneof![
        prop::sample::select(vec!["", "A photo"]).prop_map(|v| ("alt".to_string(), PropValue::from(v))),
        prop::sample::select(vec!["button", "nav", "dialog", "status", "sidebar"])
            .prop_map(|v| ("role".to_string(), PropValue::from(v))),
        Just(("onClick".to_string(), PropValue::Handler)),
        Just(("aria-label".to_string(), PropValue::from("Label"))),
        Just(("aria-live".to_string(), PropValue::from("polite"))),
        Just(("aria-hidden".to_string(), PropValue::Bool(true))),
        (-1i32..2).prop_map(|v| ("tabIndex".to_string(), PropValue::from(v))),
        Just(("aria-invalid".to_string(), PropValue::from("true"))),
        Just(("aria-busy".to_string(), PropValue::Bool(true))),
    ]
}

fn arb_leaf() -> impl Strategy<Value = Node> {
    let element = (
        prop::sample::select(TAGS.to_vec()),
        prop::collection::vec(arb_prop(), 0..3),
        prop::option::of(prop::sample::select(vec!["Read more", "Account settings", ""])),
    )
        .prop_map(|(tag, props, text)| {
            let mut node = Node::element(tag);
            for (key, value) in props {
                node = node.prop(&key, value);
            }
            match text {
                Some(t) => node.text(t),
                None => node,
            }
        });
    prop_oneof![
        8 => element,
        1 => prop::sample::select(vec!["Modal", "Card"]).prop_map(Node::component),
    ]
}

/// Arbitrary trees up to a few levels deep.
#[allow(dead_code)]
pub fn arb_tree() -> impl Strategy<Value = Node> {
    arb_leaf().prop_recursive(4, 48, 4, |inner| {
        (arb_leaf(), prop::collection::vec(inner, 0..4)).prop_map(|(mut parent, kids)| {
            for kid in kids {
                parent = parent.child(kid);
            }
            parent
        })
    })
}

/// Rule ids a generated ignore list draws from, including one that matches
/// no rule.
#[allow(dead_code)]
pub fn arb_ignore_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::sample::select(vec![
            "img-alt",
            "aria-label",
            "heading-order",
            "button-role",
            "landmarks",
            "focus-management",
            "no-such-rule",
        ])
        .prop_map(str::to_string),
        0..4,
    )
}
