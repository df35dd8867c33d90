use blitz_core::{ConversationContext, ScanData, ScanKind};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Intent category assigned to a user query.
///
/// The set is closed: every variant has exactly one prompt template and one
/// suggestion list, and no dynamic registration exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryIntent {
    /// Structured security report for a completed scan.
    SecurityReport,
    /// General cybersecurity conversation.
    GeneralChat,
    /// Analysis of specific vulnerabilities.
    VulnerabilityAnalysis,
    /// Practical security advice.
    SecurityAdvice,
    /// Tool recommendation from the fixed catalog.
    ToolRecommendation,
    /// Risk severity evaluation.
    RiskAssessment,
    /// Technical concept explanation.
    TechnicalExplanation,
    /// Compliance and regulation checks.
    ComplianceCheck,
    /// Incident response guidance.
    IncidentResponse,
    /// Penetration-testing guidance.
    PenetrationTesting,
}

/// Declaration order used for keyword matching (rule 2).
///
/// The FIRST intent whose keyword set hits wins; overlaps between sets are
/// resolved by this order alone. `GeneralChat` has no keywords and is only
/// reachable as the rule-4 default.
pub const KEYWORD_PRECEDENCE: [QueryIntent; 9] = [
    QueryIntent::SecurityReport,
    QueryIntent::VulnerabilityAnalysis,
    QueryIntent::SecurityAdvice,
    QueryIntent::ToolRecommendation,
    QueryIntent::RiskAssessment,
    QueryIntent::TechnicalExplanation,
    QueryIntent::ComplianceCheck,
    QueryIntent::IncidentResponse,
    QueryIntent::PenetrationTesting,
];

/// Keyword/phrase set for an intent, matched as case-insensitive substrings.
///
/// The tables are a mixed Spanish/English vocabulary carried over from the
/// deployed assistant. Matching is deliberately NOT word-boundary-aware and
/// the sets overlap across intents; precedence order is the sole
/// disambiguator. Changing a substring changes observable classification.
pub fn keywords(intent: QueryIntent) -> &'static [&'static str] {
    match intent {
        QueryIntent::SecurityReport => &[
            "reporte",
            "report",
            "análisis completo",
            "evaluación completa",
            "genera reporte",
            "crea reporte",
            "haz un reporte",
            "reporte de seguridad",
        ],
        QueryIntent::VulnerabilityAnalysis => &[
            "vulnerabilidad",
            "vulnerability",
            "exploit",
            "ataque",
            "brecha",
            "falla",
            "análisis de vulnerabilidades",
            "buscar vulnerabilidades",
            "encontrar vulnerabilidades",
            "exploit",
            "exploitación",
            "ataque",
            "intrusión",
        ],
        QueryIntent::SecurityAdvice => &[
            "consejo",
            "advice",
            "recomendación",
            "mejor práctica",
            "protección",
            "cómo proteger",
            "cómo defenderme",
            "medidas de seguridad",
            "prevención",
            "qué hacer",
            "cómo mejorar",
            "recomendaciones",
        ],
        QueryIntent::ToolRecommendation => &[
            "herramienta",
            "tool",
            "software",
            "aplicación",
            "programa",
            "utilidad",
            "qué herramienta",
            "recomienda herramienta",
            "mejor herramienta",
            "alternativa",
            "software de seguridad",
            "aplicación de seguridad",
        ],
        QueryIntent::RiskAssessment => &[
            "riesgo",
            "risk",
            "peligro",
            "amenaza",
            "evaluación de riesgo",
            "qué tan peligroso",
            "nivel de riesgo",
            "análisis de riesgo",
            "evaluar riesgo",
            "medir riesgo",
            "clasificar riesgo",
        ],
        QueryIntent::TechnicalExplanation => &[
            "explica",
            "explain",
            "qué significa",
            "cómo funciona",
            "definición",
            "técnicamente",
            "detalles técnicos",
            "explicación técnica",
            "cómo se hace",
            "proceso",
            "método",
            "técnica",
        ],
        QueryIntent::ComplianceCheck => &[
            "cumplimiento",
            "compliance",
            "norma",
            "estándar",
            "regulación",
            "gdpr",
            "hipaa",
            "sox",
            "pci",
            "iso",
            "certificación",
            "auditoría",
            "audit",
            "verificación de cumplimiento",
        ],
        QueryIntent::IncidentResponse => &[
            "incidente",
            "incident",
            "ataque",
            "breach",
            "intrusión",
            "qué hacer si",
            "respuesta a incidente",
            "plan de respuesta",
            "emergencia",
            "crisis",
            "alerta de seguridad",
        ],
        QueryIntent::PenetrationTesting => &[
            "pentest",
            "penetration test",
            "testing de penetración",
            "prueba de penetración",
            "ethical hacking",
            "hacking ético",
            "test de seguridad",
            "auditoría de seguridad",
            "simulación de ataque",
            "red team",
        ],
        QueryIntent::GeneralChat => &[],
    }
}

/// Phrases that tie a follow-up question to the active scan (rule 3a).
const SCAN_FOLLOWUP_PHRASES: [&str; 3] = ["este escaneo", "los resultados", "lo que encontraste"];

/// Classifies a user utterance into an intent category.
///
/// Precedence rules, applied in strict order:
///
/// 1. If both `scan_kind` and `scan_data` are present the caller is
///    explicitly requesting a report for a completed scan, so
///    [`QueryIntent::SecurityReport`] wins regardless of the text.
/// 2. Keyword matching over the lowercased text, in
///    [`KEYWORD_PRECEDENCE`] order; the first hit wins.
/// 3. Contextual fallback: a follow-up phrase about the active scan maps to
///    vulnerability analysis; otherwise the trailing topic window is probed
///    for tool talk, then for vulnerability talk.
/// 4. Default: [`QueryIntent::GeneralChat`].
pub fn classify(
    user_text: &str,
    scan_kind: Option<ScanKind>,
    scan_data: Option<&ScanData>,
    context: Option<&ConversationContext>,
) -> QueryIntent {
    // Rule 1: explicit report request for a completed scan.
    if scan_kind.is_some() && scan_data.is_some() {
        debug!("forced security_report classification (scan kind and data present)");
        return QueryIntent::SecurityReport;
    }

    let message = user_text.to_lowercase();

    // Rule 2: first keyword hit in declaration order wins.
    for intent in KEYWORD_PRECEDENCE {
        if keywords(intent).iter().any(|word| message.contains(word)) {
            debug!(?intent, "keyword classification");
            return intent;
        }
    }

    // Rule 3: contextual fallback.
    if let Some(context) = context {
        if context.current_scan.is_some()
            && SCAN_FOLLOWUP_PHRASES
                .iter()
                .any(|phrase| message.contains(phrase))
        {
            debug!("contextual classification: follow-up on active scan");
            return QueryIntent::VulnerabilityAnalysis;
        }

        let recent = context.recent_topics();
        if recent
            .iter()
            .any(|topic| topic.contains("herramienta") || topic.contains("tool"))
        {
            debug!("contextual classification: recent tool topics");
            return QueryIntent::ToolRecommendation;
        }
        if recent
            .iter()
            .any(|topic| topic.contains("vulnerabilidad") || topic.contains("exploit"))
        {
            debug!("contextual classification: recent vulnerability topics");
            return QueryIntent::VulnerabilityAnalysis;
        }
    }

    // Rule 4: default.
    QueryIntent::GeneralChat
}

#[cfg(test)]
mod tests {
    use super::*;
    use blitz_core::ScanContext;
    use serde_json::json;

    #[test]
    fn test_forced_report_overrides_keywords() {
        let data = ScanData::Structured(json!({"ports": [22, 80]}));
        // Text that would otherwise match tool_recommendation.
        let intent = classify(
            "what tool should I use?",
            Some(ScanKind::Nmap),
            Some(&data),
            None,
        );
        assert_eq!(intent, QueryIntent::SecurityReport);
    }

    #[test]
    fn test_report_keyword_without_scan() {
        let intent = classify("genera un reporte de seguridad", None, None, None);
        assert_eq!(intent, QueryIntent::SecurityReport);
    }

    #[test]
    fn test_tool_keyword() {
        let intent = classify(
            "qué herramienta recomiendas para encontrar subdominios?",
            None,
            None,
            None,
        );
        assert_eq!(intent, QueryIntent::ToolRecommendation);
    }

    #[test]
    fn test_default_general_chat() {
        let intent = classify("hola, ¿cómo estás?", None, None, None);
        assert_eq!(intent, QueryIntent::GeneralChat);
    }

    #[test]
    fn test_empty_text_defaults() {
        assert_eq!(classify("", None, None, None), QueryIntent::GeneralChat);
    }

    #[test]
    fn test_precedence_resolves_overlap() {
        // "ataque" appears in both vulnerability_analysis and
        // incident_response; declaration order picks the former.
        let intent = classify("hubo un ataque", None, None, None);
        assert_eq!(intent, QueryIntent::VulnerabilityAnalysis);
    }

    #[test]
    fn test_substring_matching_is_not_word_boundary_safe() {
        // "riesgoso" contains the "riesgo" keyword; the partial-word hit is
        // the documented tradeoff, not a defect.
        let intent = classify("esto se ve riesgoso", None, None, None);
        assert_eq!(intent, QueryIntent::RiskAssessment);
    }

    #[test]
    fn test_contextual_scan_followup() {
        let scan = ScanContext::new(
            ScanKind::Nmap,
            "https://example.com",
            ScanData::Text("✅ 22/tcp open ssh".to_owned()),
        );
        let context = ConversationContext::new().with_scan(scan);

        let intent = classify("analiza los resultados por favor", None, None, Some(&context));
        assert_eq!(intent, QueryIntent::VulnerabilityAnalysis);
    }

    #[test]
    fn test_contextual_tool_topics() {
        let mut context = ConversationContext::new();
        context.record_topic("qué herramienta uso para esto".to_owned());

        let intent = classify("y para un sitio grande?", None, None, Some(&context));
        assert_eq!(intent, QueryIntent::ToolRecommendation);
    }

    #[test]
    fn test_contextual_vulnerability_topics() {
        let mut context = ConversationContext::new();
        context.record_topic("me interesa ese exploit".to_owned());

        let intent = classify("y ahora qué sigue", None, None, Some(&context));
        assert_eq!(intent, QueryIntent::VulnerabilityAnalysis);
    }

    #[test]
    fn test_topic_window_expires_old_topics() {
        let mut context = ConversationContext::new();
        context.record_topic("háblame de ese exploit".to_owned());
        for _ in 0..5 {
            context.record_topic("tema neutro".to_owned());
        }

        // The exploit topic fell out of the 5-entry window.
        let intent = classify("y ahora qué sigue", None, None, Some(&context));
        assert_eq!(intent, QueryIntent::GeneralChat);
    }

    #[test]
    fn test_keyword_rule_beats_contextual_fallback() {
        let scan = ScanContext::new(
            ScanKind::Whois,
            "https://example.com",
            ScanData::Text("Registrar: Example Inc".to_owned()),
        );
        let context = ConversationContext::new().with_scan(scan);

        // "explica" keyword-matches technical_explanation before the
        // "los resultados" contextual probe is ever consulted.
        let intent = classify("explica los resultados", None, None, Some(&context));
        assert_eq!(intent, QueryIntent::TechnicalExplanation);
    }
}
