//! End-to-end chain-walk scenarios over real directory trees.

use pretty_assertions::assert_eq;
use props_core::{EXTERNAL_PROPERTIES, Error, ScopeNode, resolution};
use props_test_utils::PropsDir;
use std::fs;

#[test]
fn child_inherits_from_root_conventional_file() {
    let tree = PropsDir::new();
    tree.write_properties("gradle.properties", &[("foo", "bar")]);
    let child_dir = tree.subdir("app");

    let root = ScopeNode::root(tree.root());
    let child = root.child(child_dir);

    assert_eq!(resolution::get(&child, "foo").unwrap(), "bar");
    assert_eq!(
        resolution::get_or(&child, "baz", "fallback").unwrap(),
        "fallback"
    );
    assert!(!resolution::exists(&child, "baz").unwrap());
}

#[test]
fn external_properties_precede_the_conventional_file() {
    let tree = PropsDir::new();
    tree.write_properties("gradle.properties", &[("x", "2")]);
    let ext = tree.write_properties("ext.properties", &[("x", "1")]);

    let root = ScopeNode::root(tree.root());
    root.set_bag_entry(EXTERNAL_PROPERTIES, ext.to_str().unwrap());

    assert_eq!(resolution::get(&root, "x").unwrap(), "1");
    // Names only in the conventional file still resolve through the second
    // default resolver.
    tree.write_properties("gradle.properties", &[("x", "2"), ("y", "3")]);
    let fresh = ScopeNode::root(tree.root());
    fresh.set_bag_entry(EXTERNAL_PROPERTIES, ext.to_str().unwrap());
    assert_eq!(resolution::get(&fresh, "y").unwrap(), "3");
}

#[test]
fn external_properties_apply_per_scope_bag() {
    let tree = PropsDir::new();
    tree.write_properties("gradle.properties", &[("x", "root")]);
    let ext = tree.write_properties("child-ext.properties", &[("x", "child")]);
    let child_dir = tree.subdir("app");

    let root = ScopeNode::root(tree.root());
    let child = root.child(child_dir);
    child.set_bag_entry(EXTERNAL_PROPERTIES, ext.to_str().unwrap());

    // The child's bag drives the child's default indirection resolver; the
    // root is unaffected.
    assert_eq!(resolution::get(&child, "x").unwrap(), "child");
    assert_eq!(resolution::get(&root, "x").unwrap(), "root");
}

#[test]
fn explicit_resolver_list_disables_defaults_entirely() {
    let tree = PropsDir::new();
    tree.write_properties("gradle.properties", &[("foo", "conventional")]);
    let custom = tree.write_properties("custom.properties", &[("foo", "custom")]);

    let root = ScopeNode::root(tree.root());
    root.resolver_config().unwrap().add_file(custom);

    assert_eq!(resolution::get(&root, "foo").unwrap(), "custom");
}

#[test]
fn non_matching_explicit_list_still_falls_back_to_ancestors() {
    let tree = PropsDir::new();
    tree.write_properties("gradle.properties", &[("foo", "bar")]);
    let unrelated = tree.write_properties("unrelated.properties", &[("other", "x")]);
    let child_dir = tree.subdir("app");

    let root = ScopeNode::root(tree.root());
    let child = root.child(child_dir);
    // The child's explicit list disables its own defaults but not the
    // ancestor walk.
    child.resolver_config().unwrap().add_file(unrelated);

    assert_eq!(resolution::get(&child, "foo").unwrap(), "bar");
    match resolution::get(&child, "absent") {
        Err(Error::MissingProperty { name }) => assert_eq!(name, "absent"),
        other => panic!("expected MissingProperty, got: {other:?}"),
    }
}

#[test]
fn registration_via_bag_key_resolves_end_to_end() {
    let tree = PropsDir::new();
    let shared = tree.write_properties("shared.properties", &[("team", "platform")]);

    let root = ScopeNode::root(tree.root());
    root.set_bag_entry("SHARED_PROPS", shared.to_str().unwrap());

    let config = root.resolver_config().unwrap();
    config.add_bag_key(root.memory_bag(), "SHARED_PROPS");

    assert_eq!(resolution::get(&root, "team").unwrap(), "platform");
}

#[test]
fn chain_walks_through_container_less_scopes() {
    let tree = PropsDir::new();
    tree.write_properties("gradle.properties", &[("foo", "bar")]);
    let mid_dir = tree.subdir("mid");
    let leaf_dir = tree.subdir("mid/leaf");

    let root = ScopeNode::root(tree.root());
    let mid = root.child(mid_dir).without_container();
    let leaf = mid.child(leaf_dir);

    assert_eq!(resolution::get(&leaf, "foo").unwrap(), "bar");
}

#[test]
fn container_less_leaf_resolves_through_mid_scope_explicit_file() {
    let tree = PropsDir::new();
    tree.write_properties("gradle.properties", &[("region", "root"), ("zone", "a")]);
    let mid_props = tree.write_properties("mid/mid.properties", &[("region", "mid")]);
    let mid_dir = tree.subdir("mid");
    let leaf_dir = tree.subdir("mid/leaf");

    let root = ScopeNode::root(tree.root());
    let mid = root.child(mid_dir);
    mid.resolver_config().unwrap().add_file(mid_props);
    let leaf = mid.child(leaf_dir).without_container();

    // The leaf is skipped, so the mid scope's explicit file wins; names the
    // mid file misses fall through to the root's conventional file.
    assert_eq!(resolution::get(&leaf, "region").unwrap(), "mid");
    assert_eq!(resolution::get(&leaf, "zone").unwrap(), "a");
}

#[test]
fn default_carrying_leaf_reads_the_root_file_before_ancestors() {
    let tree = PropsDir::new();
    tree.write_properties("gradle.properties", &[("region", "root")]);
    let mid_props = tree.write_properties("mid/mid.properties", &[("region", "mid")]);
    let mid_dir = tree.subdir("mid");
    let leaf_dir = tree.subdir("mid/leaf");

    let root = ScopeNode::root(tree.root());
    let mid = root.child(mid_dir);
    mid.resolver_config().unwrap().add_file(mid_props);
    let leaf = mid.child(leaf_dir);

    // A leaf with its own (default) resolvers consults the root-directory
    // conventional file before any ancestor scope is reached, so the mid
    // scope's value does not shadow it.
    assert_eq!(resolution::get(&leaf, "region").unwrap(), "root");
}

#[test]
fn values_are_stable_after_first_load_even_if_the_file_changes() {
    let tree = PropsDir::new();
    let path = tree.write_properties("gradle.properties", &[("foo", "before")]);

    let root = ScopeNode::root(tree.root());
    assert_eq!(resolution::get(&root, "foo").unwrap(), "before");

    fs::write(&path, "foo=after\n").unwrap();
    assert_eq!(resolution::get(&root, "foo").unwrap(), "before");
}

#[test]
fn full_properties_syntax_flows_through_resolution() {
    let tree = PropsDir::new();
    tree.write_raw(
        "gradle.properties",
        "# deployment\n\
         servers=alpha,\\\n\
                 beta\n\
         greeting=caf\\u00e9\n",
    );

    let root = ScopeNode::root(tree.root());
    assert_eq!(resolution::get(&root, "servers").unwrap(), "alpha,beta");
    assert_eq!(resolution::get(&root, "greeting").unwrap(), "café");
}

#[test]
fn missing_conventional_file_degrades_to_missing_property() {
    let tree = PropsDir::new();
    let root = ScopeNode::root(tree.root());

    assert!(!resolution::exists(&root, "anything").unwrap());
    assert!(matches!(
        resolution::get(&root, "anything"),
        Err(Error::MissingProperty { .. })
    ));
}
