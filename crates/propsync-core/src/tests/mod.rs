//! Planner tests exercising whole reconciliation passes over fixtures.

#![expect(clippy::expect_used, reason = "tests use expect for clarity")]

use crate::outline::{Outline, Symbol};
use crate::reconcile::{self, Outcome, SkipReason};
use crate::span::Span;

/// Builds the outline a symbol provider would produce for a fixture with
/// one props interface and one component function.
fn outline_for(text: &str, interface_name: &str, props: &[&str], component_name: &str) -> Outline {
    let iface_start = text.find("interface ").expect("interface keyword");
    let iface_close = text
        .get(iface_start..)
        .and_then(|rest| rest.find('}'))
        .map(|rel| iface_start + rel)
        .expect("interface close");
    let name_at = text
        .get(iface_start..)
        .and_then(|rest| rest.find(interface_name))
        .map(|rel| iface_start + rel)
        .expect("interface name");

    let children = props
        .iter()
        .map(|prop| {
            let at = text
                .get(iface_start..)
                .and_then(|rest| rest.find(&format!("{prop}:")))
                .map(|rel| iface_start + rel)
                .expect("prop declaration");
            Symbol::new(*prop, Span::new(at, at + prop.len()), Span::new(at, at + prop.len()))
        })
        .collect();

    let interface = Symbol::with_children(
        interface_name,
        Span::new(iface_start, iface_close + 1),
        Span::new(name_at, name_at + interface_name.len()),
        children,
    );

    let marker = format!("function {component_name}(");
    let comp_name_at = text.find(&marker).expect("component definition") + "function ".len();
    let component = Symbol::new(
        component_name,
        Span::new(comp_name_at, text.len()),
        Span::new(comp_name_at, comp_name_at + component_name.len()),
    );

    Outline::new(vec![interface, component])
}

/// Offset of some position inside the interface body, safe as a trigger.
fn inside_interface(text: &str) -> usize {
    text.find("interface ").expect("interface keyword") + "interface ".len() + 1
}

#[test]
fn in_sync_lists_produce_no_edits() {
    let text = "interface CardProps {\n  title: string;\n  count: number;\n}\n\nexport default function Card({ title, count }: CardProps) {}\n";
    let outline = outline_for(text, "CardProps", &["title", "count"], "Card");

    let outcome = reconcile::plan(text, &outline, inside_interface(text), "Props");
    assert_eq!(outcome, Outcome::InSync);
}

#[test]
fn missing_field_is_appended_with_leading_separator() {
    let text = "interface CardProps {\n  a: string;\n  b: string;\n  c: string;\n}\n\nexport default function Card({ a, c }: CardProps) {}\n";
    let outline = outline_for(text, "CardProps", &["a", "b", "c"], "Card");

    let Outcome::Plan(plan) = reconcile::plan(text, &outline, inside_interface(text), "Props")
    else {
        panic!("expected a plan");
    };
    assert_eq!(plan.added(), ["b"]);
    assert!(plan.removed().is_empty());

    let applied = plan.batch().apply(text);
    assert!(applied.contains("{ a, c,b, }"), "got: {applied}");
}

#[test]
fn trailing_separator_suppresses_leading_comma() {
    let text = "interface CardProps {\n  a: string;\n  b: string;\n}\n\nexport default function Card({ a, }: CardProps) {}\n";
    let outline = outline_for(text, "CardProps", &["a", "b"], "Card");

    let Outcome::Plan(plan) = reconcile::plan(text, &outline, inside_interface(text), "Props")
    else {
        panic!("expected a plan");
    };

    let applied = plan.batch().apply(text);
    assert!(applied.contains("{ a, b, }"), "got: {applied}");
}

#[test]
fn several_missing_fields_insert_in_declaration_order() {
    let text = "interface CardProps {\n  a: string;\n  b: string;\n  c: string;\n}\n\nexport default function Card({ }: CardProps) {}\n";
    let outline = outline_for(text, "CardProps", &["a", "b", "c"], "Card");

    let Outcome::Plan(plan) = reconcile::plan(text, &outline, inside_interface(text), "Props")
    else {
        panic!("expected a plan");
    };
    assert_eq!(plan.added(), ["a", "b", "c"]);

    // `{ }` counts as having a separator, so no leading comma appears.
    let applied = plan.batch().apply(text);
    assert!(applied.contains("{ a, b, c, }"), "got: {applied}");
}

#[test]
fn stale_field_is_deleted_and_kept_fields_survive() {
    let text = "interface CardProps {\n  x: string;\n}\n\nexport default function Card({ x, y }: CardProps) {}\n";
    let outline = outline_for(text, "CardProps", &["x"], "Card");

    let Outcome::Plan(plan) = reconcile::plan(text, &outline, inside_interface(text), "Props")
    else {
        panic!("expected a plan");
    };
    assert_eq!(plan.removed(), ["y"]);

    let applied = plan.batch().apply(text);
    assert!(applied.contains("{ x, }"), "got: {applied}");
    assert!(applied.contains("x,"), "x and its separator survive");
}

#[test]
fn deletion_respects_identifier_boundaries() {
    // `id` is a lexical substring of `userId`; removing `id` must never
    // corrupt `userId`.
    let text = "interface CardProps {\n  userId: string;\n}\n\nexport default function Card({ userId, id }: CardProps) {}\n";
    let outline = outline_for(text, "CardProps", &["userId"], "Card");

    let Outcome::Plan(plan) = reconcile::plan(text, &outline, inside_interface(text), "Props")
    else {
        panic!("expected a plan");
    };
    assert_eq!(plan.removed(), ["id"]);

    let applied = plan.batch().apply(text);
    assert!(applied.contains("userId"), "got: {applied}");
    assert!(applied.contains("{ userId, }"), "got: {applied}");
}

#[test]
fn field_alone_on_its_line_takes_the_line_break_with_it() {
    let text = "interface CardProps {\n  a: string;\n}\n\nexport default function Card({\n  a,\n  b\n}: CardProps) {}\n";
    let outline = outline_for(text, "CardProps", &["a"], "Card");

    let Outcome::Plan(plan) = reconcile::plan(text, &outline, inside_interface(text), "Props")
    else {
        panic!("expected a plan");
    };

    // The line break and indentation travel with the deleted field; the
    // formatting phase tidies the remainder.
    let applied = plan.batch().apply(text);
    assert!(applied.contains("{\n  a,}: CardProps"), "got: {applied}");
}

#[test]
fn edit_outside_interface_never_triggers() {
    // Lists are desynchronized, but the edit happened in the component
    // body, so nothing may change.
    let text = "interface CardProps {\n  a: string;\n}\n\nexport default function Card({ a, b }: CardProps) {}\n";
    let outline = outline_for(text, "CardProps", &["a"], "Card");
    let body_offset = text.find("}: CardProps").expect("component body");

    let outcome = reconcile::plan(text, &outline, body_offset, "Props");
    assert_eq!(outcome, Outcome::Skipped(SkipReason::EditOutsideInterface));
}

#[test]
fn edits_exactly_on_the_interface_bounds_do_not_trigger() {
    let text = "interface CardProps {\n  a: string;\n}\n\nexport default function Card({ }: CardProps) {}\n";
    let outline = outline_for(text, "CardProps", &["a"], "Card");
    let range = outline.props_interface("Props").expect("interface").range();

    for offset in [range.start(), range.end()] {
        let outcome = reconcile::plan(text, &outline, offset, "Props");
        assert_eq!(outcome, Outcome::Skipped(SkipReason::EditOutsideInterface));
    }
}

#[test]
fn missing_interface_skips() {
    let text = "export default function Card({ a }: CardProps) {}\n";
    let outline = Outline::new(vec![Symbol::new("Card", Span::new(0, text.len()), Span::new(24, 28))]);

    let outcome = reconcile::plan(text, &outline, 10, "Props");
    assert_eq!(outcome, Outcome::Skipped(SkipReason::NoPropsInterface));
}

#[test]
fn missing_component_symbol_skips() {
    let text = "interface CardProps {\n  a: string;\n}\n";
    let iface = Symbol::with_children(
        "CardProps",
        Span::new(0, text.len()),
        Span::new(10, 19),
        vec![Symbol::new("a", Span::new(24, 25), Span::new(24, 25))],
    );
    let outline = Outline::new(vec![iface]);

    let outcome = reconcile::plan(text, &outline, 24, "Props");
    assert_eq!(outcome, Outcome::Skipped(SkipReason::NoComponentSymbol));
}

#[test]
fn missing_parameter_braces_skip() {
    let text = "interface CardProps {\n  a: string;\n}\n\nexport default function Card(props) ()\n";
    let outline = outline_for(text, "CardProps", &["a"], "Card");

    let outcome = reconcile::plan(text, &outline, inside_interface(text), "Props");
    assert_eq!(outcome, Outcome::Skipped(SkipReason::NoParameterList));
}

#[test]
fn planning_twice_is_idempotent() {
    let text = "interface CardProps {\n  a: string;\n  b: string;\n}\n\nexport default function Card({ a }: CardProps) {}\n";
    let outline = outline_for(text, "CardProps", &["a", "b"], "Card");

    let Outcome::Plan(plan) = reconcile::plan(text, &outline, inside_interface(text), "Props")
    else {
        panic!("expected a plan");
    };
    let applied = plan.batch().apply(text);

    // A fresh outline over the edited snapshot finds nothing left to do.
    let fresh_outline = outline_for(&applied, "CardProps", &["a", "b"], "Card");
    let second = reconcile::plan(&applied, &fresh_outline, inside_interface(&applied), "Props");
    assert_eq!(second, Outcome::InSync);
}

#[test]
fn format_span_covers_the_braces_after_apply() {
    let text = "interface CardProps {\n  a: string;\n  b: string;\n}\n\nexport default function Card({ a }: CardProps) {}\n";
    let outline = outline_for(text, "CardProps", &["a", "b"], "Card");

    let Outcome::Plan(plan) = reconcile::plan(text, &outline, inside_interface(text), "Props")
    else {
        panic!("expected a plan");
    };
    let applied = plan.batch().apply(text);

    let span = reconcile::format_span_after(&applied, plan.props_list_start()).expect("span");
    let region = applied.get(span.start()..span.end()).expect("region");
    assert!(region.starts_with('{') && region.ends_with('}'), "got: {region}");
    assert!(region.contains('a') && region.contains('b'));
}
