use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Number of trailing conversation topics kept as weak topical memory.
pub const RECENT_TOPIC_WINDOW: usize = 5;

/// Identifier for one of the seven scan tools exposed by the aggregator.
///
/// The set is closed: prompts built on top of these kinds must never
/// reference a tool outside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanKind {
    /// Directory and hidden-file fuzzing.
    Fuzzing,
    /// Port and service scanning.
    Nmap,
    /// Domain registration lookup.
    Whois,
    /// Subdomain enumeration.
    Subfinder,
    /// URL parameter discovery.
    ParamSpider,
    /// Web technology fingerprinting.
    WhatWeb,
    /// Email and host harvesting.
    TheHarvester,
}

impl ScanKind {
    /// All scan kinds, in catalog order.
    pub const ALL: [Self; 7] = [
        Self::Fuzzing,
        Self::Nmap,
        Self::Whois,
        Self::Subfinder,
        Self::ParamSpider,
        Self::WhatWeb,
        Self::TheHarvester,
    ];

    /// Wire tag used by the aggregator backend for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fuzzing => "fuzzing",
            Self::Nmap => "nmap",
            Self::Whois => "whois",
            Self::Subfinder => "subfinder",
            Self::ParamSpider => "paramspider",
            Self::WhatWeb => "whatweb",
            Self::TheHarvester => "theharvester",
        }
    }

    /// Human-readable tool title shown in prompts.
    pub fn title(self) -> &'static str {
        match self {
            Self::Fuzzing => "Fuzzing Web",
            Self::Nmap => "Nmap Scan",
            Self::Whois => "WHOIS Lookup",
            Self::Subfinder => "Subfinder",
            Self::ParamSpider => "ParamSpider",
            Self::WhatWeb => "WhatWeb",
            Self::TheHarvester => "theHarvester",
        }
    }
}

impl core::fmt::Display for ScanKind {
    fn fmt(&self, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Opaque result payload returned by a scan tool.
///
/// Enumeration tools return plain text; fingerprinting returns a structured
/// mapping. The core embeds either form verbatim into prompts and never
/// parses tool-specific structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScanData {
    /// Plain-text tool output, embedded as-is.
    Text(String),
    /// Structured tool output, rendered as pretty-printed JSON.
    Structured(JsonValue),
}

impl ScanData {
    /// Renders the payload for embedding into a prompt.
    ///
    /// Text payloads pass through unchanged; structured payloads are
    /// pretty-printed with 2-space indentation. Data is never summarized
    /// or truncated.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Structured(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
        }
    }
}

impl From<String> for ScanData {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<JsonValue> for ScanData {
    fn from(value: JsonValue) -> Self {
        Self::Structured(value)
    }
}

/// The most recently completed scan available to ground a conversation.
///
/// Created when the external scanning subsystem finishes a run; held in
/// memory for the duration of a session, never persisted by this core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanContext {
    /// Which tool produced this scan.
    pub kind: ScanKind,
    /// Target URL of the scan.
    pub url: String,
    /// When the scan completed.
    pub timestamp: DateTime<Utc>,
    /// Opaque tool output.
    pub data: ScanData,
}

impl ScanContext {
    /// Creates a scan context timestamped at the current instant.
    pub fn new(kind: ScanKind, url: impl Into<String>, data: ScanData) -> Self {
        Self {
            kind,
            url: url.into(),
            timestamp: Utc::now(),
            data,
        }
    }

    /// Overrides the completion timestamp.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }
}

/// Author of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The human asking questions.
    User,
    /// The assistant's reply.
    Bot,
}

/// A single turn in the conversation transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    /// Who authored this turn.
    pub sender: Sender,
    /// Turn text.
    pub text: String,
}

impl ChatTurn {
    /// Creates a user turn.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
        }
    }

    /// Creates a bot turn.
    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
        }
    }
}

/// Self-reported expertise of the user, used to pitch explanations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Expertise {
    /// New to security tooling.
    Beginner,
    /// Comfortable with the basics.
    #[default]
    Intermediate,
    /// Professional practitioner.
    Expert,
}

/// Security domain the conversation leans toward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusArea {
    /// Web application surface.
    #[default]
    WebSecurity,
    /// Network and infrastructure.
    NetworkSecurity,
    /// Application internals.
    ApplicationSecurity,
    /// Human-factor attacks.
    SocialEngineering,
}

/// Conversation state owned by the caller and threaded through each turn.
///
/// The transcript is append-only: turns are never mutated or removed
/// mid-conversation. The core reads this state but the surrounding session
/// handler owns its lifecycle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversationContext {
    /// Currently active scan, if any.
    pub current_scan: Option<ScanContext>,
    /// Ordered transcript of prior turns.
    pub transcript: Vec<ChatTurn>,
    /// Expertise level (static default, not user-adjustable).
    pub expertise: Expertise,
    /// Focus area (static default, not user-adjustable).
    pub focus_area: FocusArea,
    /// Raw topic history; only the trailing window is consulted.
    pub previous_topics: Vec<String>,
}

impl ConversationContext {
    /// Creates an empty conversation with default expertise and focus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the active scan.
    #[must_use]
    pub fn with_scan(mut self, scan: ScanContext) -> Self {
        self.current_scan = Some(scan);
        self
    }

    /// Appends a user turn to the transcript.
    pub fn push_user(&mut self, text: impl Into<String>) {
        self.transcript.push(ChatTurn::user(text));
    }

    /// Appends a bot turn to the transcript.
    pub fn push_bot(&mut self, text: impl Into<String>) {
        self.transcript.push(ChatTurn::bot(text));
    }

    /// Records a topic for the trailing topical-memory window.
    pub fn record_topic(&mut self, topic: impl Into<String>) {
        self.previous_topics.push(topic.into());
    }

    /// The most recent topics, bounded by [`RECENT_TOPIC_WINDOW`].
    #[must_use]
    pub fn recent_topics(&self) -> &[String] {
        let start = self
            .previous_topics
            .len()
            .saturating_sub(RECENT_TOPIC_WINDOW);
        &self.previous_topics[start..]
    }

    /// Returns the most recent turn, if any.
    #[must_use]
    pub fn last_turn(&self) -> Option<&ChatTurn> {
        self.transcript.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scan_kind_wire_tags() {
        assert_eq!(ScanKind::Fuzzing.as_str(), "fuzzing");
        assert_eq!(ScanKind::TheHarvester.as_str(), "theharvester");

        let tag = serde_json::to_string(&ScanKind::ParamSpider).unwrap_or_default();
        assert_eq!(tag, "\"paramspider\"");
    }

    #[test]
    fn test_scan_data_renders_text_verbatim() {
        let data = ScanData::Text("✅ [200] /admin\n✅ [200] /backup".to_owned());
        assert_eq!(data.render(), "✅ [200] /admin\n✅ [200] /backup");
    }

    #[test]
    fn test_scan_data_pretty_prints_structured() {
        let data = ScanData::Structured(json!({"cms": ["WordPress"]}));
        let rendered = data.render();
        assert!(rendered.contains("\"cms\""));
        assert!(rendered.contains('\n'), "structured data should be indented");
    }

    #[test]
    fn test_transcript_is_append_only_ordered() {
        let mut context = ConversationContext::new();
        context.push_user("hola");
        context.push_bot("¡Hola! ¿En qué puedo ayudarte?");
        context.push_user("gracias");

        assert_eq!(context.transcript.len(), 3);
        assert_eq!(context.transcript[0].sender, Sender::User);
        assert_eq!(context.transcript[1].sender, Sender::Bot);
        assert_eq!(context.transcript[2].text, "gracias");
    }

    #[test]
    fn test_recent_topics_window_is_bounded() {
        let mut context = ConversationContext::new();
        for index in 0..8 {
            context.record_topic(format!("topic {index}"));
        }

        let recent = context.recent_topics();
        assert_eq!(recent.len(), RECENT_TOPIC_WINDOW);
        assert_eq!(recent[0], "topic 3");
        assert_eq!(recent[4], "topic 7");
    }

    #[test]
    fn test_context_defaults() {
        let context = ConversationContext::new();
        assert_eq!(context.expertise, Expertise::Intermediate);
        assert_eq!(context.focus_area, FocusArea::WebSecurity);
        assert!(context.current_scan.is_none());
        assert!(context.last_turn().is_none());
    }
}
