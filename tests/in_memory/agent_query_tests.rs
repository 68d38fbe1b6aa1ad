//! In-memory integration tests for answering Agent Information requests.

use std::time::Duration;

use agent_information::{
    discovery::{
        adapters::memory::InMemoryDiscoService,
        domain::NAMESPACE_AGENTS,
        ports::IqHandler,
    },
    stanza::{Element, ErrorCondition, ErrorType, Iq, IqType},
};
use rstest::{fixture, rstest};

use super::helpers::{SERVER_DOMAIN, TestHost, agent_addresses, agents_of, agents_request, jid};

#[fixture]
fn host() -> TestHost {
    let local = InMemoryDiscoService::new()
        .with_item(SERVER_DOMAIN, "search.example.org", Some("User Directory"))
        .with_item(SERVER_DOMAIN, "conference.example.org", Some("Chatrooms"))
        .with_item(SERVER_DOMAIN, "pubsub.example.org", None)
        .with_identity("conference.example.org", "conference", "text")
        .with_feature("conference.example.org", "http://jabber.org/protocol/muc")
        .with_identity("search.example.org", "directory", "user")
        .with_feature("search.example.org", "jabber:iq:search")
        .with_identity("pubsub.example.org", "pubsub", "service");
    TestHost::new(local, Duration::from_secs(5))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_request_lists_agents_of_the_server(host: TestHost) {
    let request = agents_request(IqType::Get, Some(SERVER_DOMAIN));

    let answer = host
        .handler
        .handle_iq(request.clone())
        .await
        .expect("requests are answered");

    assert_eq!(answer.kind(), IqType::Result);
    assert_eq!(answer.id(), request.id());
    assert_eq!(answer.to(), request.from());
    assert_eq!(answer.from(), request.to());
    assert!(
        answer
            .child()
            .is_some_and(|query| query.is("query", NAMESPACE_AGENTS))
    );
    assert_eq!(
        agent_addresses(&answer),
        vec![
            "conference.example.org",
            "pubsub.example.org",
            "search.example.org"
        ]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn agents_carry_legacy_markers(host: TestHost) {
    let answer = host
        .handler
        .handle_iq(agents_request(IqType::Get, Some(SERVER_DOMAIN)))
        .await
        .expect("requests are answered");
    let agents = agents_of(&answer);
    let find = |address: &str| {
        agents
            .iter()
            .find(|agent| agent.attribute("jid") == Some(address))
            .cloned()
            .expect("agent should be listed")
    };

    let directory = find("search.example.org");
    assert_eq!(
        directory.child("name").and_then(Element::text),
        Some("User Directory")
    );
    assert_eq!(
        directory.child("service").and_then(Element::text),
        Some("jud")
    );
    assert!(directory.child("search").is_some());
    assert!(directory.child("register").is_none());
    assert!(directory.child("transport").is_none());

    let conference = find("conference.example.org");
    assert!(conference.child("groupchat").is_some());
    assert!(conference.child("service").is_none());
    assert_eq!(
        conference.child("description").and_then(Element::text),
        Some("Text conferencing service")
    );

    let pubsub = find("pubsub.example.org");
    assert!(pubsub.child("name").is_none());
    assert_eq!(
        pubsub.child("description").and_then(Element::text),
        Some("A pubsub service that supports the functionality defined in XEP-0060.")
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn request_without_recipient_targets_the_server(host: TestHost) {
    let answer = host
        .handler
        .handle_iq(agents_request(IqType::Get, None))
        .await
        .expect("requests are answered");

    assert_eq!(agent_addresses(&answer).len(), 3);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn request_without_payload_gets_a_fresh_query(host: TestHost) {
    let request = Iq::new(IqType::Get).with_to(jid(SERVER_DOMAIN));

    let answer = host
        .handler
        .handle_iq(request)
        .await
        .expect("requests are answered");

    assert!(
        answer
            .child()
            .is_some_and(|query| query.is("query", NAMESPACE_AGENTS))
    );
    assert_eq!(agents_of(&answer).len(), 3);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn set_request_is_refused(host: TestHost) {
    let request = agents_request(IqType::Set, Some(SERVER_DOMAIN));

    let answer = host
        .handler
        .handle_iq(request.clone())
        .await
        .expect("requests are answered");

    assert_eq!(answer.kind(), IqType::Error);
    assert_eq!(answer.id(), request.id());
    let error = answer.error().expect("error condition");
    assert_eq!(error.condition(), ErrorCondition::FeatureNotImplemented);
    assert_eq!(error.kind(), ErrorType::Cancel);
    assert_eq!(answer.child(), request.child());
    assert!(host.router.routed().is_empty());
}

#[rstest]
#[case(IqType::Result)]
#[case(IqType::Error)]
#[tokio::test(flavor = "multi_thread")]
async fn responses_are_ignored(host: TestHost, #[case] kind: IqType) {
    let stanza = agents_request(kind, Some(SERVER_DOMAIN));

    assert_eq!(host.handler.handle_iq(stanza).await, None);
}

#[rstest]
fn handler_claims_the_agents_namespace(host: TestHost) {
    let info = host.handler.info();

    assert_eq!(info.name(), "query");
    assert_eq!(info.namespace(), NAMESPACE_AGENTS);
    assert_eq!(host.handler.features(), vec![NAMESPACE_AGENTS.to_owned()]);
    assert!(info.matches(&Element::namespaced("query", NAMESPACE_AGENTS)));
}
