//! In-memory integration tests for probes answered by external components.

use std::time::Duration;

use agent_information::{
    discovery::{adapters::memory::InMemoryDiscoService, ports::IqHandler},
    stanza::{Element, IqType},
};
use rstest::rstest;

use super::helpers::{SERVER_DOMAIN, TestHost, agent_addresses, agents_of, agents_request};

fn irc_component() -> InMemoryDiscoService {
    InMemoryDiscoService::new()
        .with_identity("irc.remote.org", "gateway", "irc")
        .with_feature("irc.remote.org", "jabber:iq:register")
}

fn host_listing(address: &str) -> TestHost {
    let local = InMemoryDiscoService::new().with_item(SERVER_DOMAIN, address, Some("Gateway"));
    TestHost::new(local, Duration::from_secs(5))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn component_items_are_probed_over_the_router() {
    let host = host_listing("irc.remote.org");
    host.connect_component("irc.remote.org", irc_component());
    let request = agents_request(IqType::Get, Some(SERVER_DOMAIN));

    let answer = host
        .handler
        .handle_iq(request.clone())
        .await
        .expect("requests are answered");

    let agents = agents_of(&answer);
    let gateway = agents.first().expect("one agent");
    assert_eq!(agents.len(), 1);
    assert!(gateway.child("transport").is_some());
    assert!(gateway.child("register").is_some());
    assert_eq!(gateway.child("service").and_then(Element::text), Some("irc"));
    assert_eq!(
        gateway.child("description").and_then(Element::text),
        Some("Gateway to IRC")
    );

    let routed = host.router.routed();
    assert_eq!(routed.len(), 1);
    assert_eq!(
        routed.first().and_then(|probe| probe.from()),
        request.from(),
        "probes are sent on behalf of the requester"
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn agents_of_a_component_are_enumerated_remotely() {
    let host = TestHost::new(InMemoryDiscoService::new(), Duration::from_secs(5));
    host.connect_component(
        "gw.remote.org",
        InMemoryDiscoService::new()
            .with_item("gw.remote.org", "alerts@gw.remote.org", Some("Alerts"))
            .with_identity("alerts@gw.remote.org", "gateway", "sms"),
    );

    let answer = host
        .handler
        .handle_iq(agents_request(IqType::Get, Some("gw.remote.org")))
        .await
        .expect("requests are answered");

    assert_eq!(agent_addresses(&answer), vec!["alerts@gw.remote.org"]);
    assert_eq!(
        agents_of(&answer)
            .first()
            .and_then(|agent| agent.child("service"))
            .and_then(Element::text),
        Some("sms")
    );
    assert_eq!(host.router.routed().len(), 2);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn closed_session_falls_back_to_local_probe() {
    let host = host_listing("irc.remote.org");
    host.connect_component("irc.remote.org", irc_component());
    host.sessions.close_session("irc.remote.org");

    let answer = host
        .handler
        .handle_iq(agents_request(IqType::Get, Some(SERVER_DOMAIN)))
        .await
        .expect("requests are answered");

    let agents = agents_of(&answer);
    let gateway = agents.first().expect("one agent");
    assert!(host.router.routed().is_empty());
    assert!(gateway.child("transport").is_none());
    assert_eq!(gateway.child("name").and_then(Element::text), Some("Gateway"));
}
