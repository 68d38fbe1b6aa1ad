//! In-memory integration tests for degraded answers when discovery fails.

use std::time::Duration;

use agent_information::{
    discovery::{adapters::memory::InMemoryDiscoService, ports::IqHandler},
    stanza::{Element, ErrorCondition, IqType},
};
use rstest::rstest;
use tokio::time::Instant;

use super::helpers::{SERVER_DOMAIN, TestHost, agent_addresses, agents_of, agents_request};

const TIMEOUT: Duration = Duration::from_secs(5);

fn host_listing_gateway() -> TestHost {
    let local =
        InMemoryDiscoService::new().with_item(SERVER_DOMAIN, "irc.remote.org", Some("IRC"));
    TestHost::new(local, TIMEOUT)
}

fn assert_minimal_record(agent: Option<&Element>) {
    let record = agent.expect("the item is still listed");
    assert_eq!(record.attribute("jid"), Some("irc.remote.org"));
    assert_eq!(
        record.children().iter().map(Element::name).collect::<Vec<_>>(),
        vec!["name"]
    );
}

#[tokio::test(start_paused = true)]
async fn silent_component_yields_minimal_record_after_timeout() {
    let host = host_listing_gateway();
    host.connect_component(
        "irc.remote.org",
        InMemoryDiscoService::new().with_silence("irc.remote.org"),
    );
    let started = Instant::now();

    let answer = host
        .handler
        .handle_iq(agents_request(IqType::Get, Some(SERVER_DOMAIN)))
        .await
        .expect("requests are answered");

    assert!(started.elapsed() >= TIMEOUT);
    assert_minimal_record(agents_of(&answer).first());
    assert!(host.handler.walker().correlator().exchanges().is_empty());
}

#[tokio::test(start_paused = true)]
async fn late_answer_is_dropped() {
    let host = host_listing_gateway();
    host.connect_component(
        "irc.remote.org",
        InMemoryDiscoService::new().with_identity("irc.remote.org", "gateway", "irc"),
    );
    host.router.set_response_delay(TIMEOUT * 2);

    let answer = host
        .handler
        .handle_iq(agents_request(IqType::Get, Some(SERVER_DOMAIN)))
        .await
        .expect("requests are answered");
    tokio::time::sleep(TIMEOUT * 2).await;

    assert_minimal_record(agents_of(&answer).first());
    assert!(host.handler.walker().correlator().exchanges().is_empty());
}

#[rstest]
#[case(InMemoryDiscoService::new().with_error("irc.remote.org", ErrorCondition::ServiceUnavailable))]
#[case(InMemoryDiscoService::new().with_unexpected_payload("irc.remote.org"))]
#[case(InMemoryDiscoService::new())]
#[tokio::test(flavor = "multi_thread")]
async fn unusable_probe_answer_yields_minimal_record(#[case] component: InMemoryDiscoService) {
    let host = host_listing_gateway();
    host.connect_component("irc.remote.org", component);

    let answer = host
        .handler
        .handle_iq(agents_request(IqType::Get, Some(SERVER_DOMAIN)))
        .await
        .expect("requests are answered");

    assert_minimal_record(agents_of(&answer).first());
}

#[rstest]
#[case(InMemoryDiscoService::new().with_error(SERVER_DOMAIN, ErrorCondition::InternalServerError))]
#[case(InMemoryDiscoService::new().with_unexpected_payload(SERVER_DOMAIN))]
#[case(InMemoryDiscoService::new())]
#[tokio::test(flavor = "multi_thread")]
async fn failed_enumeration_yields_empty_answer(#[case] local: InMemoryDiscoService) {
    let host = TestHost::new(local, TIMEOUT);

    let answer = host
        .handler
        .handle_iq(agents_request(IqType::Get, Some(SERVER_DOMAIN)))
        .await
        .expect("requests are answered");

    assert_eq!(answer.kind(), IqType::Result);
    assert!(agents_of(&answer).is_empty());
}

#[tokio::test(start_paused = true)]
async fn unanswered_remote_enumeration_yields_empty_answer() {
    let host = TestHost::new(InMemoryDiscoService::new(), TIMEOUT);
    host.connect_component(
        "gw.remote.org",
        InMemoryDiscoService::new().with_silence("gw.remote.org"),
    );

    let answer = host
        .handler
        .handle_iq(agents_request(IqType::Get, Some("gw.remote.org")))
        .await
        .expect("requests are answered");

    assert_eq!(answer.kind(), IqType::Result);
    assert!(agents_of(&answer).is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn malformed_item_addresses_are_skipped() {
    let local = InMemoryDiscoService::new()
        .with_item(SERVER_DOMAIN, "bad@", None)
        .with_item(SERVER_DOMAIN, "two words.example.org", None)
        .with_item(SERVER_DOMAIN, "good.example.org", None);
    let host = TestHost::new(local, TIMEOUT);

    let answer = host
        .handler
        .handle_iq(agents_request(IqType::Get, Some(SERVER_DOMAIN)))
        .await
        .expect("requests are answered");

    assert_eq!(agent_addresses(&answer), vec!["good.example.org"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn identical_items_collapse_into_one_agent() {
    let local = InMemoryDiscoService::new()
        .with_item(SERVER_DOMAIN, "muc.example.org", Some("Rooms"))
        .with_item(SERVER_DOMAIN, "MUC.example.org", Some("Rooms"))
        .with_item(SERVER_DOMAIN, "muc.example.org", Some("Other rooms"))
        .with_identity("muc.example.org", "conference", "text");
    let host = TestHost::new(local, TIMEOUT);

    let answer = host
        .handler
        .handle_iq(agents_request(IqType::Get, Some(SERVER_DOMAIN)))
        .await
        .expect("requests are answered");

    let names: Vec<_> = agents_of(&answer)
        .iter()
        .filter_map(|agent| agent.child("name").and_then(Element::text).map(str::to_owned))
        .collect();
    assert_eq!(names.len(), 2);
    assert!(names.contains(&"Rooms".to_owned()));
    assert!(names.contains(&"Other rooms".to_owned()));
}
