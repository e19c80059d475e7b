//! Exhaustive checks of the ignore decision over every combination of the
//! inputs it reads.

use axlens_core::ui::{HostView, Importance};
use axlens_descriptor::{IgnoreVerdict, classify, explain_ignored, is_ignored};
use axlens_host_mock::{MockTree, ViewSpec};
use rstest::rstest;

const IMPORTANCES: [Importance; 4] =
    [Importance::Auto, Importance::Yes, Importance::No, Importance::NoHideDescendants];

const IGNORED_REASONS: [&str; 7] = [
    "View has importantForAccessibility set to 'NO'.",
    "View has importantForAccessibility set to 'NO_HIDE_DESCENDANTS'.",
    "An ancestor View has importantForAccessibility set to 'NO_HIDE_DESCENDANTS'.",
    "View is not visible.",
    "View is actionable, but has no description.",
    "View is not actionable, and an ancestor View has co-opted its description.",
    "View is not actionable and has no description.",
];

#[derive(Clone, Copy, Debug)]
struct Case {
    importance: Importance,
    ancestor_importance: Importance,
    ancestor_focusable: bool,
    visible: bool,
    focusable: bool,
    children: usize,
    speaking: bool,
    text: bool,
}

fn all_cases() -> Vec<Case> {
    let flags = [false, true];
    let mut cases = Vec::new();
    for importance in IMPORTANCES {
        for ancestor_importance in IMPORTANCES {
            for ancestor_focusable in flags {
                for visible in flags {
                    for focusable in flags {
                        for children in [0, 2] {
                            for speaking in flags {
                                for text in flags {
                                    cases.push(Case {
                                        importance,
                                        ancestor_importance,
                                        ancestor_focusable,
                                        visible,
                                        focusable,
                                        children,
                                        speaking,
                                        text,
                                    });
                                }
                            }
                        }
                    }
                }
            }
        }
    }
    cases
}

fn build(case: Case) -> MockTree {
    let mut target = ViewSpec::new("target", "View")
        .importance(case.importance)
        .visible(case.visible)
        .accessibility_focusable(case.focusable)
        .speaking(case.speaking)
        .child_count(case.children);
    if case.text {
        target = target.text("label");
    }
    MockTree::new(
        ViewSpec::container("grandparent", "Frame").with_child(
            ViewSpec::container("parent", "Frame")
                .importance(case.ancestor_importance)
                .accessibility_focusable(case.ancestor_focusable)
                .with_child(target),
        ),
    )
}

/// The decision written out as plain rules, independent of the verdict enum.
fn expected_ignored(case: Case) -> bool {
    if matches!(case.importance, Importance::No | Importance::NoHideDescendants) {
        return true;
    }
    if case.ancestor_importance == Importance::NoHideDescendants {
        return true;
    }
    if !case.visible {
        return true;
    }
    if case.focusable {
        return !(case.children == 0 || case.speaking);
    }
    !(case.text && !case.ancestor_focusable)
}

#[rstest]
fn decision_matches_rules_for_every_input() {
    for case in all_cases() {
        let host = build(case).instantiate();
        let view = host.view("target").expect("target");
        let node = view.accessibility_node();
        assert_eq!(is_ignored(&*node, &*view), expected_ignored(case), "{case:?}");
    }
}

#[rstest]
fn explanation_tracks_decision_for_every_input() {
    for case in all_cases() {
        let host = build(case).instantiate();
        let view = host.view("target").expect("target");
        let node = view.accessibility_node();
        let verdict = classify(&*node, &*view);
        let reason = explain_ignored(&*node, &*view);

        assert_eq!(reason, verdict.reason(), "{case:?}");
        assert_eq!(is_ignored(&*node, &*view), verdict.is_ignored(), "{case:?}");
        assert_eq!(IGNORED_REASONS.contains(&reason), verdict.is_ignored(), "{case:?}");
    }
}

#[rstest]
#[case(Importance::No, IgnoreVerdict::ImportanceNo)]
#[case(Importance::NoHideDescendants, IgnoreVerdict::ImportanceNoHideDescendants)]
fn own_importance_is_checked_before_ancestors(
    #[case] importance: Importance,
    #[case] expected: IgnoreVerdict,
) {
    let host = build(Case {
        importance,
        ancestor_importance: Importance::NoHideDescendants,
        ancestor_focusable: false,
        visible: false,
        focusable: true,
        children: 0,
        speaking: true,
        text: true,
    })
    .instantiate();
    let view = host.view("target").expect("target");
    assert_eq!(classify(&*view.accessibility_node(), &*view), expected);
}

#[rstest]
fn focusable_leaf_without_text_is_surfaced() {
    let host = build(Case {
        importance: Importance::Auto,
        ancestor_importance: Importance::Auto,
        ancestor_focusable: true,
        visible: true,
        focusable: true,
        children: 0,
        speaking: false,
        text: false,
    })
    .instantiate();
    let view = host.view("target").expect("target");
    assert_eq!(view.class_name(), "View");
    assert_eq!(classify(&*view.accessibility_node(), &*view), IgnoreVerdict::FocusableLeaf);
}
