use std::path::PathBuf;

use clap::Parser;
use typegraph_core::PrimitivePolicy;

use crate::cli::{Cli, Command, PrimitivesArg};

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn test_resolve_minimal() {
    let cli = parse(&["typegraph", "resolve", "demo.Box", "--catalog", "types.json"]);
    let Command::Resolve(args) = cli.command else {
        panic!("expected resolve");
    };

    assert_eq!(args.roots, vec!["demo.Box"]);
    assert_eq!(args.catalogs, vec![PathBuf::from("types.json")]);
    assert!(args.patterns.is_empty());
    assert!(args.primitives.is_none());
    assert!(args.max_types.is_none());
    assert!(!args.pretty);
}

#[test]
fn test_resolve_all_options() {
    let cli = parse(&[
        "typegraph",
        "resolve",
        "demo.Box",
        "demo.Node",
        "-c",
        "a.json",
        "--catalog",
        "b.toml",
        "-p",
        "demo.model.*",
        "--pre-resolved",
        "demo.Item,demo.Other",
        "-o",
        "closure.json",
        "--primitives",
        "drop",
        "--max-types",
        "500",
        "--pretty",
        "--config",
        "ci.toml",
    ]);
    let Command::Resolve(args) = cli.command else {
        panic!("expected resolve");
    };

    assert_eq!(args.roots, vec!["demo.Box", "demo.Node"]);
    assert_eq!(args.catalogs.len(), 2);
    assert_eq!(args.patterns, vec!["demo.model.*"]);
    assert_eq!(args.pre_resolved, vec!["demo.Item", "demo.Other"]);
    assert_eq!(args.output, Some(PathBuf::from("closure.json")));
    assert_eq!(args.primitives, Some(PrimitivesArg::Drop));
    assert_eq!(args.max_types, Some(500));
    assert!(args.pretty);
    assert_eq!(args.config, Some(PathBuf::from("ci.toml")));
}

#[test]
fn test_resolve_accepts_no_roots() {
    // Roots may come from the config file.
    let cli = parse(&["typegraph", "resolve"]);
    assert!(matches!(cli.command, Command::Resolve(args) if args.roots.is_empty()));
}

#[test]
fn test_invalid_primitives_rejected() {
    let result = Cli::try_parse_from(["typegraph", "resolve", "--primitives", "keep"]);
    assert!(result.is_err());
}

#[test]
fn test_invalid_max_types_rejected() {
    let result = Cli::try_parse_from(["typegraph", "resolve", "--max-types", "many"]);
    assert!(result.is_err());
}

#[test]
fn test_list_requires_catalog() {
    assert!(Cli::try_parse_from(["typegraph", "list"]).is_err());

    let cli = parse(&["typegraph", "list", "-c", "types.json", "demo.*", "java.*"]);
    let Command::List(args) = cli.command else {
        panic!("expected list");
    };
    assert_eq!(args.patterns, vec!["demo.*", "java.*"]);
}

#[test]
fn test_global_flags() {
    let cli = parse(&["typegraph", "list", "-c", "t.json", "--verbose", "--no-color"]);
    assert!(cli.verbose);
    assert!(cli.no_color);
    assert!(!cli.quiet);

    assert!(Cli::try_parse_from(["typegraph", "-v", "-q", "list", "-c", "t.json"]).is_err());
}

#[test]
fn test_primitives_map_to_policy() {
    assert_eq!(PrimitivePolicy::from(PrimitivesArg::Box), PrimitivePolicy::Boxed);
    assert_eq!(PrimitivePolicy::from(PrimitivesArg::Drop), PrimitivePolicy::Dropped);
}

#[test]
fn test_cli_definition_is_consistent() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
