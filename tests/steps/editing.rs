//! Step definitions for typing and pasting

use crate::common::world::{parse_region, ReqlineWorld};
use cucumber::{then, when};

#[when(expr = "I type {string}")]
fn when_type(world: &mut ReqlineWorld, text: String) {
    world.type_text(&text);
}

#[when(expr = "I paste {string}")]
fn when_paste(world: &mut ReqlineWorld, text: String) {
    world.paste(&text);
}

#[then(expr = "the {word} region should contain {string}")]
fn then_region_contains(world: &mut ReqlineWorld, region: String, expected: String) {
    assert_eq!(world.region_text(parse_region(&region)), expected);
}

#[then(expr = "the {word} region should be empty")]
fn then_region_empty(world: &mut ReqlineWorld, region: String) {
    assert_eq!(world.region_text(parse_region(&region)), "");
}

#[then("every region should be empty")]
fn then_every_region_empty(world: &mut ReqlineWorld) {
    for region in reqline::Region::ALL {
        assert_eq!(world.region_text(region), "", "{region:?}");
    }
}

#[then(expr = "the screen should show {string}")]
fn then_screen_shows(world: &mut ReqlineWorld, text: String) {
    assert!(
        world.screen_contains(&text),
        "screen does not show {text:?}:\n{}",
        world.controller.screen().plain_rows().join("\n")
    );
}

#[then(expr = "the {word} region should start with {string}")]
fn then_region_starts_with(world: &mut ReqlineWorld, region: String, prefix: String) {
    let text = world.region_text(parse_region(&region));
    assert!(text.starts_with(&prefix), "{text:?} does not start with {prefix:?}");
}
