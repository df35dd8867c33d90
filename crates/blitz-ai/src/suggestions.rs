//! Per-intent follow-up suggestion tables.
//!
//! After each assistant response the UI offers four short follow-up
//! questions keyed by the intent that produced the response. The tables are
//! fixed and order-stable.

use crate::classifier::QueryIntent;

/// Returns the fixed follow-up suggestions for an intent.
///
/// Always four entries, always in the same order. The closed enum makes the
/// unknown-intent fallback of the original table lookup unrepresentable.
pub fn suggestions_for(intent: QueryIntent) -> &'static [&'static str] {
    match intent {
        QueryIntent::SecurityReport => &[
            "¿Cuál es el nivel de riesgo de estos hallazgos?",
            "¿Qué medidas de mitigación recomiendas?",
            "¿Necesito actualizar mi configuración de seguridad?",
            "¿Qué herramientas adicionales puedo usar?",
        ],
        QueryIntent::GeneralChat => &[
            "¿Puedes explicarme más sobre este tema?",
            "¿Qué herramientas recomiendas para esto?",
            "¿Cuáles son las mejores prácticas?",
            "¿Hay algún recurso adicional que pueda consultar?",
        ],
        QueryIntent::VulnerabilityAnalysis => &[
            "¿Cómo puedo explotar esta vulnerabilidad?",
            "¿Qué contramedidas específicas debo implementar?",
            "¿Cuál es el impacto potencial de esta vulnerabilidad?",
            "¿Necesito notificar a alguien sobre esto?",
        ],
        QueryIntent::SecurityAdvice => &[
            "¿Puedes darme ejemplos prácticos?",
            "¿Qué herramientas me ayudan con esto?",
            "¿Cuáles son los errores más comunes?",
            "¿Cómo puedo verificar que estoy protegido?",
        ],
        QueryIntent::ToolRecommendation => &[
            "¿Esta herramienta es gratuita?",
            "¿Cuál es la curva de aprendizaje?",
            "¿Hay alternativas más simples?",
            "¿Cómo se integra con mi flujo de trabajo?",
        ],
        QueryIntent::RiskAssessment => &[
            "¿Cuál es la probabilidad de que esto ocurra?",
            "¿Qué impacto tendría en mi negocio?",
            "¿Cuáles son mis opciones de mitigación?",
            "¿Necesito un plan de respuesta a incidentes?",
        ],
        QueryIntent::TechnicalExplanation => &[
            "¿Puedes darme un ejemplo práctico?",
            "¿Qué herramientas están relacionadas con esto?",
            "¿Cuáles son las mejores prácticas?",
            "¿Hay algún recurso para aprender más?",
        ],
        QueryIntent::ComplianceCheck => &[
            "¿Qué consecuencias tiene no cumplir?",
            "¿Cuánto tiempo toma implementar esto?",
            "¿Necesito un auditor externo?",
            "¿Qué documentación necesito?",
        ],
        QueryIntent::IncidentResponse => &[
            "¿Cuáles son los primeros pasos críticos?",
            "¿A quién debo notificar primero?",
            "¿Qué herramientas forenses necesito?",
            "¿Cómo documentar todo el proceso?",
        ],
        QueryIntent::PenetrationTesting => &[
            "¿Cuál es el alcance recomendado?",
            "¿Qué metodología debo seguir?",
            "¿Qué herramientas son esenciales?",
            "¿Cómo preparar el reporte final?",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_INTENTS: [QueryIntent; 10] = [
        QueryIntent::SecurityReport,
        QueryIntent::GeneralChat,
        QueryIntent::VulnerabilityAnalysis,
        QueryIntent::SecurityAdvice,
        QueryIntent::ToolRecommendation,
        QueryIntent::RiskAssessment,
        QueryIntent::TechnicalExplanation,
        QueryIntent::ComplianceCheck,
        QueryIntent::IncidentResponse,
        QueryIntent::PenetrationTesting,
    ];

    #[test]
    fn test_every_intent_has_four_suggestions() {
        for intent in ALL_INTENTS {
            let suggestions = suggestions_for(intent);
            assert_eq!(suggestions.len(), 4, "{intent:?} suggestion count");
            assert!(suggestions.iter().all(|entry| !entry.is_empty()));
        }
    }

    #[test]
    fn test_lookup_is_idempotent_and_order_stable() {
        for intent in ALL_INTENTS {
            assert_eq!(suggestions_for(intent), suggestions_for(intent));
        }
    }
}
