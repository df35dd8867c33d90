//! Prompt templates, one per intent, and the composition dispatcher.
//!
//! Every template follows the same structural contract: a persona preamble,
//! a one-sentence TAREA, an INSTRUCCIONES bullet set, verbatim embedding of
//! any supplied scan data, an optional one-line active-scan reminder, and a
//! closing directive telling the downstream model exactly what to produce.
//! The template bodies are Spanish, matching the deployed assistant.

use blitz_core::{ConversationContext, ScanData, ScanKind};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{summary_block, use_case_block};
use crate::classifier::{QueryIntent, classify};

/// Marker embedded when a data-driven template is composed without data.
const NO_SCAN_DATA: &str = "(sin datos de escaneo)";

/// Marker embedded when a report is composed without a scan kind.
const UNKNOWN_SCAN_KIND: &str = "desconocido";

/// An assigned intent together with the rendered prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classification {
    /// Intent the query was classified into.
    pub intent: QueryIntent,
    /// Prompt rendered for the downstream text-generation service.
    pub prompt: String,
}

/// Classifies a user query and composes the matching prompt.
///
/// Pure function of its inputs: no hidden state, no side effects, never
/// fails. Equivalent to [`classify`] followed by [`compose`].
pub fn process_query(
    user_text: &str,
    scan_kind: Option<ScanKind>,
    scan_data: Option<&ScanData>,
    context: Option<&ConversationContext>,
) -> Classification {
    let intent = classify(user_text, scan_kind, scan_data, context);
    let prompt = compose(intent, user_text, scan_kind, scan_data, context);
    debug!(?intent, prompt_len = prompt.len(), "composed prompt");
    Classification { intent, prompt }
}

/// Renders the prompt for an already-classified intent.
///
/// Missing optional inputs degrade to explicit markers; the composer never
/// panics and always returns a prompt.
pub fn compose(
    intent: QueryIntent,
    user_text: &str,
    scan_kind: Option<ScanKind>,
    scan_data: Option<&ScanData>,
    context: Option<&ConversationContext>,
) -> String {
    match intent {
        QueryIntent::SecurityReport => security_report(scan_kind, scan_data),
        QueryIntent::GeneralChat => general_chat(user_text),
        QueryIntent::VulnerabilityAnalysis => vulnerability_analysis(scan_data, user_text),
        QueryIntent::SecurityAdvice => security_advice(user_text),
        QueryIntent::ToolRecommendation => tool_recommendation(user_text),
        QueryIntent::RiskAssessment => risk_assessment(scan_data, user_text),
        QueryIntent::TechnicalExplanation => technical_explanation(user_text, context),
        QueryIntent::ComplianceCheck => compliance_check(user_text, context),
        QueryIntent::IncidentResponse => incident_response(user_text, context),
        QueryIntent::PenetrationTesting => penetration_testing(user_text, context),
    }
}

/// One-line reminder grounding the prompt in the active scan, or nothing.
fn scan_reminder(context: Option<&ConversationContext>, label: &str) -> String {
    context
        .and_then(|ctx| ctx.current_scan.as_ref())
        .map(|scan| format!("{label}: {} en {}\n", scan.kind, scan.url))
        .unwrap_or_default()
}

/// Renders scan data verbatim, or the no-data marker.
fn render_data(scan_data: Option<&ScanData>) -> String {
    scan_data.map_or_else(|| NO_SCAN_DATA.to_owned(), ScanData::render)
}

fn security_report(scan_kind: Option<ScanKind>, scan_data: Option<&ScanData>) -> String {
    let kind = scan_kind.map_or(UNKNOWN_SCAN_KIND, ScanKind::as_str);
    let data = render_data(scan_data);
    format!(
        "Eres BlitzScanIA, un experto asistente de ciberseguridad especializado en análisis de seguridad web.

TAREA: Generar un reporte de seguridad profesional y estructurado.

INSTRUCCIONES:
- Analiza los datos del escaneo proporcionados
- Identifica vulnerabilidades y riesgos específicos
- Proporciona recomendaciones prácticas y priorizadas
- Usa un tono profesional pero accesible
- Estructura la respuesta con secciones claras

FORMATO DEL REPORTE:
## 🔍 Resumen Ejecutivo
[Breve resumen de los hallazgos principales]

## 🚨 Vulnerabilidades Detectadas
[Lista de vulnerabilidades encontradas con nivel de riesgo]

## 📊 Análisis de Riesgo
[Evaluación del impacto y probabilidad]

## 🛡️ Recomendaciones Prioritarias
[Acciones específicas para mitigar riesgos]

## 📈 Medidas Preventivas
[Estrategias para prevenir futuros incidentes]

TIPO DE ESCANEO: {kind}
DATOS DEL ESCANEO:
{data}

Genera el reporte siguiendo el formato especificado."
    )
}

fn general_chat(user_text: &str) -> String {
    let tools = summary_block();
    format!(
        "Eres BlitzScanIA, un asistente de ciberseguridad amigable y experto.

CONTEXTO: El usuario está haciendo una pregunta general sobre ciberseguridad.

INSTRUCCIONES:
- Responde de forma clara y accesible
- Proporciona información práctica y útil
- SOLO recomienda herramientas que están disponibles en BlitzScan
- Mantén un tono conversacional pero profesional
- No generes reportes estructurados para preguntas simples
- NO menciones herramientas externas de ningún tipo

HERRAMIENTAS DISPONIBLES EN BLITZSCAN:
{tools}

PREGUNTA DEL USUARIO: {user_text}

Responde de manera natural y útil, recomendando SOLO las herramientas de BlitzScan."
    )
}

fn vulnerability_analysis(scan_data: Option<&ScanData>, context_text: &str) -> String {
    let data = render_data(scan_data);
    format!(
        "Eres BlitzScanIA, especialista en análisis de vulnerabilidades.

TAREA: Analizar vulnerabilidades específicas en los datos proporcionados.

INSTRUCCIONES:
- Identifica vulnerabilidades específicas
- Evalúa el nivel de riesgo de cada una
- Explica el impacto potencial
- Sugiere métodos de explotación (para propósitos educativos)
- Proporciona contramedidas específicas

CONTEXTO: {context_text}
DATOS PARA ANALIZAR:
{data}

Realiza un análisis detallado de las vulnerabilidades encontradas."
    )
}

fn security_advice(topic: &str) -> String {
    format!(
        "Eres BlitzScanIA, consultor de seguridad experto.

TAREA: Proporcionar consejos prácticos de seguridad.

INSTRUCCIONES:
- Ofrece consejos específicos y accionables
- Explica el \"por qué\" de cada recomendación
- Incluye mejores prácticas de la industria
- Mantén un tono educativo y útil

TEMA: {topic}

Proporciona consejos de seguridad relevantes y prácticos."
    )
}

fn tool_recommendation(context_text: &str) -> String {
    let tools = use_case_block();
    format!(
        "Eres BlitzScanIA, experto en herramientas de ciberseguridad.

TAREA: Recomendar herramientas apropiadas SOLO de las disponibles en BlitzScan.

INSTRUCCIONES:
- Sugiere SOLO herramientas que están en BlitzScan
- Explica por qué cada herramienta es útil para el contexto
- NO menciones herramientas externas de ningún tipo
- Considera el nivel de experiencia del usuario
- Proporciona casos de uso específicos

HERRAMIENTAS DISPONIBLES EN BLITZSCAN:
{tools}

CONTEXTO: {context_text}

Recomienda SOLO herramientas de BlitzScan apropiadas para este contexto."
    )
}

fn risk_assessment(scan_data: Option<&ScanData>, user_text: &str) -> String {
    // Keyword-matched risk questions arrive without scan data; the question
    // itself is then the material to evaluate.
    let data = scan_data.map_or_else(|| user_text.to_owned(), ScanData::render);
    format!(
        "Eres BlitzScanIA, especialista en evaluación de riesgos de seguridad.

TAREA: Evaluar el nivel de riesgo de los hallazgos.

INSTRUCCIONES:
- Clasifica los riesgos por severidad (Alto/Medio/Bajo)
- Explica el impacto potencial de cada riesgo
- Considera la probabilidad de explotación
- Proporciona métricas de riesgo cuando sea posible
- Sugiere prioridades de mitigación

DATOS PARA EVALUAR:
{data}

Realiza una evaluación de riesgos detallada."
    )
}

fn technical_explanation(topic: &str, context: Option<&ConversationContext>) -> String {
    let reminder = scan_reminder(context, "CONTEXTO DEL ESCANEO ACTUAL");
    format!(
        "Eres BlitzScanIA, experto técnico en ciberseguridad.

TAREA: Proporcionar una explicación técnica clara y detallada.

INSTRUCCIONES:
- Explica el concepto de manera técnica pero accesible
- Incluye ejemplos prácticos cuando sea relevante
- Menciona herramientas relacionadas si aplica
- Considera el nivel de experiencia del usuario
- Proporciona contexto histórico o de la industria cuando sea útil

TEMA A EXPLICAR: {topic}
{reminder}
Proporciona una explicación técnica completa y detallada."
    )
}

fn compliance_check(standard: &str, context: Option<&ConversationContext>) -> String {
    let reminder = scan_reminder(context, "CONTEXTO DEL ESCANEO");
    format!(
        "Eres BlitzScanIA, especialista en cumplimiento y regulaciones de seguridad.

TAREA: Verificar el cumplimiento con estándares de seguridad.

INSTRUCCIONES:
- Identifica los requisitos relevantes del estándar
- Evalúa el nivel de cumplimiento actual
- Identifica brechas de cumplimiento
- Proporciona recomendaciones específicas
- Menciona consecuencias de no cumplir
- Incluye mejores prácticas de la industria

ESTÁNDAR/CUMPLIMIENTO: {standard}
{reminder}
Realiza una evaluación de cumplimiento detallada."
    )
}

fn incident_response(incident: &str, context: Option<&ConversationContext>) -> String {
    let reminder = scan_reminder(context, "ESCANEO RELACIONADO");
    format!(
        "Eres BlitzScanIA, especialista en respuesta a incidentes de seguridad.

TAREA: Proporcionar guía para responder a un incidente de seguridad.

INSTRUCCIONES:
- Define los pasos inmediatos a seguir
- Establece prioridades de respuesta
- Identifica stakeholders que deben ser notificados
- Sugiere herramientas de análisis forense
- Proporciona plantillas de documentación
- Incluye consideraciones legales y regulatorias

INCIDENTE DESCRITO: {incident}
{reminder}
Proporciona un plan de respuesta a incidentes detallado."
    )
}

fn penetration_testing(target: &str, context: Option<&ConversationContext>) -> String {
    let reminder = scan_reminder(context, "CONTEXTO DEL ESCANEO");
    format!(
        "Eres BlitzScanIA, experto en testing de penetración y hacking ético.

TAREA: Proporcionar guía para testing de penetración.

INSTRUCCIONES:
- Define el alcance del pentest
- Sugiere metodologías apropiadas (OWASP, NIST, etc.)
- Recomienda herramientas específicas
- Establece reglas de engagement
- Proporciona plantillas de reporte
- Incluye consideraciones éticas y legales

OBJETIVO DEL PENTEST: {target}
{reminder}
Proporciona una guía completa para testing de penetración."
    )
}
