//! In-memory integration tests for installing and removing the handler.

use std::sync::Arc;
use std::time::Duration;

use agent_information::{
    discovery::{
        adapters::memory::{InMemoryDiscoService, InMemoryHandlerRegistry},
        domain::NAMESPACE_AGENTS,
        ports::{HandlerRegistryError, IqHandler},
        services::AgentInformationPlugin,
    },
    stanza::{ErrorCondition, IqType},
};
use rstest::{fixture, rstest};

use super::helpers::{SERVER_DOMAIN, TestHost, agent_addresses, agents_request};

struct TestContext {
    registry: Arc<InMemoryHandlerRegistry>,
    plugin: AgentInformationPlugin<InMemoryHandlerRegistry>,
}

#[fixture]
fn context() -> TestContext {
    let registry = Arc::new(InMemoryHandlerRegistry::new());
    let plugin = AgentInformationPlugin::new(Arc::clone(&registry));
    TestContext { registry, plugin }
}

fn handler() -> Arc<dyn IqHandler> {
    let local = InMemoryDiscoService::new().with_item(SERVER_DOMAIN, "proxy.example.org", None);
    Arc::new(TestHost::new(local, Duration::from_secs(5)).handler)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn installed_handler_answers_dispatched_requests(context: TestContext) {
    context
        .plugin
        .initialize(handler())
        .expect("installation should succeed");

    let answer = context
        .registry
        .dispatch(agents_request(IqType::Get, Some(SERVER_DOMAIN)))
        .await
        .expect("requests are answered");

    assert!(context.plugin.is_installed());
    assert_eq!(answer.kind(), IqType::Result);
    assert_eq!(agent_addresses(&answer), vec!["proxy.example.org"]);
    assert_eq!(context.registry.features(), vec![NAMESPACE_AGENTS.to_owned()]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn destroyed_plugin_stops_answering(context: TestContext) {
    context
        .plugin
        .initialize(handler())
        .expect("installation should succeed");
    context.plugin.destroy().expect("removal should succeed");

    let answer = context
        .registry
        .dispatch(agents_request(IqType::Get, Some(SERVER_DOMAIN)))
        .await
        .expect("unclaimed requests are answered");

    assert!(!context.plugin.is_installed());
    assert!(context.registry.is_empty());
    assert_eq!(
        answer.error().map(|error| error.condition()),
        Some(ErrorCondition::ServiceUnavailable)
    );
}

#[rstest]
fn destroy_is_idempotent(context: TestContext) {
    context.plugin.destroy().expect("nothing to remove");
    context
        .plugin
        .initialize(handler())
        .expect("installation should succeed");
    context.plugin.destroy().expect("removal should succeed");
    context.plugin.destroy().expect("second removal is a no-op");

    assert!(context.registry.is_empty());
}

#[rstest]
fn reinitializing_replaces_the_handler(context: TestContext) {
    context
        .plugin
        .initialize(handler())
        .expect("installation should succeed");
    context
        .plugin
        .initialize(handler())
        .expect("reinstallation should succeed");

    assert_eq!(context.registry.len(), 1);
}

#[rstest]
fn second_plugin_on_the_same_registry_is_refused(context: TestContext) {
    let rival = AgentInformationPlugin::new(Arc::clone(&context.registry));
    context
        .plugin
        .initialize(handler())
        .expect("installation should succeed");

    let result = rival.initialize(handler());

    assert!(matches!(result, Err(HandlerRegistryError::Duplicate(_))));
    assert!(!rival.is_installed());
    assert_eq!(context.registry.len(), 1);
}
