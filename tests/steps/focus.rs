//! Step definitions for focus cycling

use crate::common::world::{parse_region, ReqlineWorld};
use crossterm::event::{KeyCode, KeyModifiers};
use cucumber::{given, then, when};
use reqline::Region;

#[given("the console has just started")]
fn given_console_started(world: &mut ReqlineWorld) {
    assert_eq!(world.focused_region(), Region::Method);
}

#[given(expr = "the {word} region is focused")]
fn given_region_focused(world: &mut ReqlineWorld, region: String) {
    world.focus(parse_region(&region));
}

#[when(expr = "I press Tab {int} time(s)")]
fn when_press_tab(world: &mut ReqlineWorld, times: usize) {
    for _ in 0..times {
        world.press_tab();
    }
}

#[when("I press Ctrl+C")]
fn when_press_ctrl_c(world: &mut ReqlineWorld) {
    world.send_key_event(KeyCode::Char('c'), KeyModifiers::CONTROL);
}

#[then(expr = "the {word} region should be focused")]
fn then_region_focused(world: &mut ReqlineWorld, region: String) {
    assert_eq!(world.focused_region(), parse_region(&region));
}

#[then(expr = "only the {word} region should report focus")]
fn then_only_region_reports_focus(world: &mut ReqlineWorld, region: String) {
    assert_eq!(
        world.controller.regions().focused_regions(),
        vec![parse_region(&region)]
    );
}

#[then(expr = "the {word} label should be highlighted")]
fn then_label_highlighted(world: &mut ReqlineWorld, region: String) {
    use crossterm::style::Attribute;

    let label = parse_region(&region).label();
    let screen = world.controller.screen();
    let highlighted: Vec<&str> = screen
        .rows
        .iter()
        .flatten()
        .filter(|span| span.style().attributes.has(Attribute::Bold))
        .map(|span| span.content().as_str())
        .collect();
    assert_eq!(highlighted, vec![label]);
}

#[then("the console should have quit")]
fn then_console_quit(world: &mut ReqlineWorld) {
    assert!(world.controller.should_quit());
}

#[then("the console should still be running")]
fn then_console_running(world: &mut ReqlineWorld) {
    assert!(!world.controller.should_quit());
}
