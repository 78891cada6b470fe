use super::*;
use crate::descriptor::ChoiceKey;
use crate::match_tree::MatchTree;

#[test]
fn test_rules_compile() {
    let rules = rules();
    assert!(rules.iter().all(|rule| !rule.chain.is_empty()));

    let tree = MatchTree::build(&rules).expect("preset rules compile");
    assert_eq!(tree.rule_count(), rules.len());
}

#[test]
fn test_docstring_chains_share_a_prefix() {
    let tree = MatchTree::build(&rules()).unwrap();

    let statement = tree
        .root()
        .get(&ChoiceKey::named("string"))
        .and_then(|n| n.get(&ChoiceKey::named("expression_statement")))
        .expect("docstring prefix");

    // module-, class- and function-level docstrings branch here.
    assert_eq!(
        statement.get(&ChoiceKey::named("module")).unwrap().label(),
        Some("DocString")
    );
    let block = statement.get(&ChoiceKey::named("block")).unwrap();
    assert_eq!(
        block.get(&ChoiceKey::named("class_definition")).unwrap().label(),
        Some("DocString")
    );
    assert_eq!(
        block
            .get(&ChoiceKey::named("function_definition"))
            .unwrap()
            .label(),
        Some("DocString")
    );
}

#[test]
fn test_method_chain_extends_function_chain() {
    let tree = MatchTree::build(&rules()).unwrap();

    let function = tree
        .root()
        .get(&ChoiceKey::fielded("name", "identifier"))
        .and_then(|n| n.get(&ChoiceKey::named("function_definition")))
        .expect("function name chain");
    assert_eq!(function.label(), Some("FunctionName"));

    let method = function
        .get(&ChoiceKey::named("block"))
        .and_then(|n| n.get(&ChoiceKey::named("class_definition")))
        .expect("method name chain");
    assert_eq!(method.label(), Some("MethodName"));
}

#[test]
fn test_called_method_attribute_hop_repeats() {
    let tree = MatchTree::build(&rules()).unwrap();

    let attribute = tree
        .root()
        .get(&ChoiceKey::named("identifier"))
        .and_then(|n| n.get(&ChoiceKey::named("attribute")))
        .expect("attribute hop");
    assert!(attribute.repeat());
    assert_eq!(
        attribute.get(&ChoiceKey::named("call")).unwrap().label(),
        Some("CalledMethod")
    );
}
