//! Shared wiring for in-memory Agent Information integration tests.

use std::sync::{Arc, Once};
use std::time::Duration;

use agent_information::{
    config::AgentInformationConfig,
    discovery::{
        adapters::memory::{InMemoryDiscoService, InMemoryIqRouter, InMemorySessionRegistry},
        domain::NAMESPACE_AGENTS,
        services::{AgentInformationHandler, PendingExchanges},
    },
    stanza::{Element, Iq, IqType, Jid},
};
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Installs a test-writer subscriber honouring `RUST_LOG`, once per binary.
pub fn init_tracing() {
    TRACING.call_once(|| {
        drop(
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::from_default_env())
                .with_test_writer()
                .try_init(),
        );
    });
}

/// Handler type wired onto the in-memory adapters.
pub type TestHandler =
    AgentInformationHandler<InMemoryIqRouter, InMemorySessionRegistry, InMemoryDiscoService>;

/// Domain of the server hosting the handler.
pub const SERVER_DOMAIN: &str = "example.org";

/// A server with its routing fabric, session table and Agent Information
/// handler.
pub struct TestHost {
    pub router: InMemoryIqRouter,
    pub sessions: Arc<InMemorySessionRegistry>,
    pub handler: TestHandler,
}

impl TestHost {
    /// Wires a host whose local discovery handler is `local`.
    #[must_use]
    pub fn new(local: InMemoryDiscoService, query_timeout: Duration) -> Self {
        init_tracing();
        let config = AgentInformationConfig::new(jid(SERVER_DOMAIN))
            .with_query_timeout(query_timeout)
            .expect("positive timeout");
        let exchanges = Arc::new(PendingExchanges::new(config.inbox_capacity()));
        let router = InMemoryIqRouter::new(Arc::clone(&exchanges));
        let sessions = Arc::new(InMemorySessionRegistry::new());
        let handler = AgentInformationHandler::from_config(
            &config,
            Arc::new(router.clone()),
            exchanges,
            Arc::clone(&sessions),
            Arc::new(local),
        );
        Self {
            router,
            sessions,
            handler,
        }
    }

    /// Connects an external component serving `domain` with `service`.
    pub fn connect_component(&self, domain: &str, service: InMemoryDiscoService) {
        self.sessions.open_session(domain);
        self.router.add_responder(domain, Arc::new(service));
    }
}

/// Parses an address known to be valid.
#[must_use]
pub fn jid(value: &str) -> Jid {
    Jid::parse(value).expect("valid test address")
}

/// Builds an Agent Information request of `kind` from a local user.
#[must_use]
pub fn agents_request(kind: IqType, to: Option<&str>) -> Iq {
    let request = Iq::new(kind)
        .with_from(jid("romeo@example.org/orchard"))
        .with_child(Element::namespaced("query", NAMESPACE_AGENTS));
    match to {
        Some(address) => request.with_to(jid(address)),
        None => request,
    }
}

/// Returns the `<agent/>` children of an Agent Information result.
#[must_use]
pub fn agents_of(answer: &Iq) -> Vec<Element> {
    answer
        .child()
        .map(|query| query.children_named("agent").cloned().collect())
        .unwrap_or_default()
}

/// Returns the `jid` attributes of the agents in an answer, in order.
#[must_use]
pub fn agent_addresses(answer: &Iq) -> Vec<String> {
    agents_of(answer)
        .iter()
        .filter_map(|agent| agent.attribute("jid").map(str::to_owned))
        .collect()
}
