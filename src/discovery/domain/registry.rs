//! Human-readable descriptions of registered disco identities.
//!
//! Mirrors the XMPP registrar's list of `category`/`type` values for the
//! `<identity/>` element (revision 2021-10-06). Pairs outside the list have
//! no description.

use std::collections::HashMap;
use std::sync::LazyLock;

/// `(category, type, description)` rows, grouped by category.
pub const IDENTITY_REGISTRY: &[(&str, &str, &str)] = &[
    ("account", "admin", "The user@host is an administrative account"),
    (
        "account",
        "anonymous",
        "The user@host is a \"guest\" account that allows anonymous login by any user",
    ),
    (
        "account",
        "registered",
        "The user@host is a registered or provisioned account associated with a particular non-administrative user",
    ),
    (
        "auth",
        "cert",
        "A server component that authenticates based on external certificates",
    ),
    (
        "auth",
        "generic",
        "A server authentication component other than one of the registered types",
    ),
    (
        "auth",
        "ldap",
        "A server component that authenticates against an LDAP database",
    ),
    (
        "auth",
        "ntlm",
        "A server component that authenticates against an NT domain",
    ),
    (
        "auth",
        "pam",
        "A server component that authenticates against a PAM system",
    ),
    (
        "auth",
        "radius",
        "A server component that authenticates against a Radius system",
    ),
    (
        "authz",
        "ephemeral",
        "An authorization service that provides ephemeral identities.",
    ),
    (
        "automation",
        "command-list",
        "The node for a list of commands; valid only for the node \"http://jabber.org/protocol/commands\"",
    ),
    (
        "automation",
        "command-node",
        "A node for a specific command; the \"node\" attribute uniquely identifies the command",
    ),
    ("automation", "rpc", "An entity that supports Jabber-RPC."),
    (
        "automation",
        "soap",
        "An entity that supports the SOAP XMPP Binding.",
    ),
    (
        "automation",
        "translation",
        "An entity that provides automated translation services.",
    ),
    (
        "client",
        "bot",
        "An automated client that is not controlled by a human user",
    ),
    (
        "client",
        "console",
        "Minimal non-GUI client used on dumb terminals or text-only screens",
    ),
    ("client", "game", "A client running on a gaming console"),
    (
        "client",
        "handheld",
        "A client running on a PDA, RIM device, or other handheld",
    ),
    (
        "client",
        "pc",
        "Standard full-GUI client used on desktops and laptops",
    ),
    (
        "client",
        "phone",
        "A client running on a mobile phone or other telephony device",
    ),
    (
        "client",
        "sms",
        "A client that is not actually using an instant messaging client; however, messages sent to this contact will be delivered as Short Message Service (SMS) messages",
    ),
    (
        "client",
        "tablet",
        "A client running on a touchscreen device larger than a smartphone and without a physical keyboard permanently attached to it.",
    ),
    ("client", "web", "A client operated from within a web browser"),
    ("collaboration", "whiteboard", "Multi-user whiteboarding service"),
    ("component", "archive", "A server component that archives traffic"),
    (
        "component",
        "c2s",
        "A server component that handles client connections",
    ),
    (
        "component",
        "generic",
        "A server component other than one of the registered types",
    ),
    ("component", "load", "A server component that handles load balancing"),
    ("component", "log", "A server component that logs server information"),
    (
        "component",
        "presence",
        "A server component that provides presence information",
    ),
    (
        "component",
        "router",
        "A server component that handles core routing logic",
    ),
    (
        "component",
        "s2s",
        "A server component that handles server connections",
    ),
    ("component", "sm", "A server component that manages user sessions"),
    (
        "component",
        "stats",
        "A server component that provides server statistics",
    ),
    ("conference", "irc", "Internet Relay Chat service"),
    ("conference", "text", "Text conferencing service"),
    ("directory", "chatroom", "A directory of chatrooms"),
    ("directory", "group", "A directory that provides shared roster groups"),
    ("directory", "user", "A directory of end users (e.g., JUD)"),
    ("directory", "waitinglist", "A directory of waiting list entries"),
    ("gateway", "aim", "Gateway to AOL Instant Messenger"),
    ("gateway", "facebook", "Gateway to the Facebook IM service"),
    ("gateway", "gadu-gadu", "Gateway to the Gadu-Gadu IM service"),
    ("gateway", "http-ws", "Gateway that provides HTTP Web Services access"),
    ("gateway", "icq", "Gateway to ICQ"),
    ("gateway", "irc", "Gateway to IRC"),
    ("gateway", "lcs", "Gateway to Microsoft Live Communications Server"),
    ("gateway", "mrim", "Gateway to the mail.ru IM service"),
    ("gateway", "msn", "Gateway to MSN Messenger"),
    ("gateway", "myspaceim", "Gateway to the MySpace IM service"),
    ("gateway", "ocs", "Gateway to Microsoft Office Communications Server"),
    (
        "gateway",
        "pstn",
        "Gateway to the Public Switched Telephone Network (PSTN)",
    ),
    ("gateway", "qq", "Gateway to the QQ IM service"),
    ("gateway", "sametime", "Gateway to IBM Lotus Sametime"),
    (
        "gateway",
        "simple",
        "Gateway to SIP for Instant Messaging and Presence Leveraging Extensions (SIMPLE)",
    ),
    ("gateway", "skype", "Gateway to the Skype service"),
    ("gateway", "sms", "Gateway to Short Message Service"),
    ("gateway", "smtp", "Gateway to the SMTP (email) network"),
    ("gateway", "telegram", "Gateway to the Telegram IM service"),
    ("gateway", "tlen", "Gateway to the Tlen IM service"),
    ("gateway", "xfire", "Gateway to the Xfire gaming and IM service"),
    (
        "gateway",
        "xmpp",
        "Gateway to another XMPP service (NOT via native server-to-server communication)",
    ),
    ("gateway", "yahoo", "Gateway to Yahoo! Instant Messenger"),
    (
        "headline",
        "newmail",
        "Service that notifies a user of new email messages.",
    ),
    ("headline", "rss", "RSS notification service."),
    ("headline", "weather", "Service that provides weather alerts."),
    (
        "hierarchy",
        "branch",
        "A service discovery node that contains further nodes in the hierarchy.",
    ),
    (
        "hierarchy",
        "leaf",
        "A service discovery node that does not contain further nodes in the hierarchy.",
    ),
    ("proxy", "bytestreams", "SOCKS5 bytestreams proxy service"),
    ("pubsub", "collection", "A pubsub node of the \"collection\" type."),
    ("pubsub", "leaf", "A pubsub node of the \"leaf\" type."),
    (
        "pubsub",
        "pep",
        "A personal eventing service that supports the publish-subscribe subset defined in XEP-0163.",
    ),
    (
        "pubsub",
        "service",
        "A pubsub service that supports the functionality defined in XEP-0060.",
    ),
    (
        "server",
        "im",
        "Standard Jabber/XMPP server used for instant messaging and presence",
    ),
    (
        "store",
        "berkeley",
        "A server component that stores data in a Berkeley database",
    ),
    (
        "store",
        "file",
        "A server component that stores data on the file system",
    ),
    (
        "store",
        "generic",
        "A server data storage component other than one of the registered types",
    ),
    (
        "store",
        "ldap",
        "A server component that stores data in an LDAP database",
    ),
    (
        "store",
        "mysql",
        "A server component that stores data in a MySQL database",
    ),
    (
        "store",
        "oracle",
        "A server component that stores data in an Oracle database",
    ),
    (
        "store",
        "postgres",
        "A server component that stores data in a PostgreSQL database",
    ),
];

type DescriptionIndex = HashMap<&'static str, HashMap<&'static str, &'static str>>;

static DESCRIPTIONS: LazyLock<DescriptionIndex> = LazyLock::new(|| {
    let mut index: DescriptionIndex = HashMap::new();
    for (category, kind, description) in IDENTITY_REGISTRY {
        index
            .entry(*category)
            .or_default()
            .insert(*kind, *description);
    }
    index
});

/// Returns the registered description for a `(category, type)` pair.
#[must_use]
pub fn identity_description(category: &str, kind: &str) -> Option<&'static str> {
    DESCRIPTIONS
        .get(category)
        .and_then(|kinds| kinds.get(kind))
        .copied()
}
