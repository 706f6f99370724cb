//! Library-level tests for the replacement pass, without the CLI.

mod common;

use common::*;
use std::fs;
use template_rename::rewrite::{FileOutcome, apply_rules, derive_rules};
use template_rename::steps::Replacer;
use template_rename::verify::ProjectName;

const ALL_FORMS: &str = "a=cpp-template\n\
                         b=cpp_template\n\
                         c=CPP-TEMPLATE\n\
                         d=CPP_TEMPLATE\n\
                         e=CppTemplate\n\
                         f=https://github.com/your-username/cpp-template\n";

#[test]
fn test_every_placeholder_form_is_replaced() {
    let rules = derive_rules("my-project");

    assert_eq!(
        apply_rules(ALL_FORMS, &rules),
        "a=my-project\n\
         b=my_project\n\
         c=MY-PROJECT\n\
         d=MY_PROJECT\n\
         e=MyProject\n\
         f=https://github.com/your-username/my-project\n"
    );
}

#[test]
fn test_replacement_output_is_stable() {
    let rules = derive_rules("Game_Engine-2");

    let first = apply_rules(ALL_FORMS, &rules);
    let second = apply_rules(ALL_FORMS, &rules);

    assert_eq!(first, second);
    assert_eq!(apply_rules(&first, &rules), first);
}

#[test]
fn test_replacer_run_reports_outcomes() {
    let temp = create_template_project();
    let root = temp.path();
    fs::remove_file(root.join("README.md")).unwrap();

    let name = ProjectName::parse("engine").unwrap();
    let summary = Replacer::new(root, name, true).run().unwrap();

    assert_eq!(summary.backed_up.as_ref().map(Vec::len), Some(8));
    assert_eq!(summary.stats.processed, 9);
    assert_eq!(summary.stats.updated, 7);
    assert_eq!(summary.stats.errors, 0);
    assert_eq!(summary.stats.missing(), 1);
    assert_eq!(summary.stats.unchanged(), 1);

    let readme = summary
        .stats
        .files
        .iter()
        .find(|(path, _)| path.ends_with("README.md"))
        .unwrap();
    assert_eq!(readme.1, FileOutcome::Missing);

    assert_eq!(summary.relocation.updated(), 1);
    assert_eq!(summary.relocation.errors(), 0);
}
