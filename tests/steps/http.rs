//! Step definitions for request dispatch
//!
//! - Mock servers
//! - Filling in and sending requests
//! - Checking outcomes

use crate::common::world::ReqlineWorld;
use cucumber::{given, then, when};
use reqline::config::{ConsoleConfig, StatusPolicy};
use reqline::console::services::DispatchOutcome;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

/// Answers with the request body it received
struct EchoBody;

impl Respond for EchoBody {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_bytes(request.body.clone())
    }
}

async fn mock_server(world: &mut ReqlineWorld) -> &MockServer {
    if world.mock_server.is_none() {
        world.mock_server = Some(MockServer::start().await);
    }
    world.mock_server.as_ref().expect("mock server")
}

#[given(expr = "a server answering {word} {string} with status {int} and body {string}")]
async fn given_server_answering(
    world: &mut ReqlineWorld,
    verb: String,
    route: String,
    status: u16,
    body: String,
) {
    let server = mock_server(world).await;
    Mock::given(method(verb.as_str()))
        .and(path(route.as_str()))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

#[given(expr = "a server echoing {word} {string}")]
async fn given_server_echoing(world: &mut ReqlineWorld, verb: String, route: String) {
    let server = mock_server(world).await;
    Mock::given(method(verb.as_str()))
        .and(path(route.as_str()))
        .respond_with(EchoBody)
        .mount(server)
        .await;
}

#[given("the console classifies HTTP statuses")]
fn given_classify_policy(world: &mut ReqlineWorld) {
    world.restart_with(&ConsoleConfig {
        status_policy: StatusPolicy::Classify,
        ..ConsoleConfig::default()
    });
}

#[when(expr = "I enter method {string} for server path {string} with body {string}")]
fn when_enter_server_request(world: &mut ReqlineWorld, verb: String, route: String, body: String) {
    let url = world.mock_url(&route);
    world.fill_request(&verb, &url, &body);
}

#[when(expr = "I enter method {string} for URL {string} with body {string}")]
fn when_enter_request(world: &mut ReqlineWorld, verb: String, url: String, body: String) {
    world.fill_request(&verb, &url, &body);
}

#[when("I send the request")]
async fn when_send_request(world: &mut ReqlineWorld) {
    world.send_request().await;
}

#[then("the Response region should show a failure")]
fn then_response_failure(world: &mut ReqlineWorld) {
    assert!(matches!(
        world.last_response(),
        Some(DispatchOutcome::Failure(_))
    ));
    assert!(!world.region_text(reqline::Region::Response).is_empty());
}

#[then("the focus should be unchanged by the send")]
fn then_focus_unchanged(world: &mut ReqlineWorld) {
    assert_eq!(Some(world.focused_region()), world.focus_before_send);
}

#[then(expr = "the server should have received {int} request(s)")]
async fn then_server_received(world: &mut ReqlineWorld, count: usize) {
    let received = match &world.mock_server {
        Some(server) => server.received_requests().await.unwrap_or_default().len(),
        None => 0,
    };
    assert_eq!(received, count);
}

#[then(expr = "the last request body should be {string}")]
async fn then_last_request_body(world: &mut ReqlineWorld, expected: String) {
    let server = world.mock_server.as_ref().expect("mock server");
    let requests = server.received_requests().await.unwrap_or_default();
    let last = requests.last().expect("no request received");
    assert_eq!(String::from_utf8_lossy(&last.body), expected);
}
