//! The fixed seven-tool catalog.
//!
//! Prompt templates that talk about tooling only ever reference this
//! catalog; the rendered instruction text forbids the downstream model from
//! naming anything outside it. That restriction is a content-safety
//! contract, so the catalog is the single source for every tool mention.

use blitz_core::ScanKind;

/// Catalog entry for one scan tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolProfile {
    /// Display name shown in prompts.
    pub title: &'static str,
    /// One-line capability summary.
    pub summary: &'static str,
    /// What the tool is typically used to find.
    pub use_case: &'static str,
}

/// Returns the catalog entry for a scan kind.
pub fn profile(kind: ScanKind) -> &'static ToolProfile {
    match kind {
        ScanKind::Fuzzing => &ToolProfile {
            title: "Fuzzing Web",
            summary: "Búsqueda de directorios y archivos ocultos",
            use_case: "Encontrar rutas sensibles, archivos de backup, paneles de administración",
        },
        ScanKind::Nmap => &ToolProfile {
            title: "Nmap Scan",
            summary: "Escaneo de puertos y servicios",
            use_case: "Identificar puertos abiertos, servicios activos, vulnerabilidades de red",
        },
        ScanKind::Whois => &ToolProfile {
            title: "WHOIS Lookup",
            summary: "Información del dominio y registrante",
            use_case: "Información del dominio, fechas de expiración, datos del registrante",
        },
        ScanKind::Subfinder => &ToolProfile {
            title: "Subfinder",
            summary: "Enumeración de subdominios",
            use_case: "Encontrar subdominios, ampliar la superficie de ataque",
        },
        ScanKind::ParamSpider => &ToolProfile {
            title: "ParamSpider",
            summary: "Extracción de parámetros vulnerables",
            use_case: "Encontrar parámetros URL, posibles puntos de inyección",
        },
        ScanKind::WhatWeb => &ToolProfile {
            title: "WhatWeb",
            summary: "Fingerprinting de tecnologías web",
            use_case: "Identificar tecnologías, frameworks, versiones de software",
        },
        ScanKind::TheHarvester => &ToolProfile {
            title: "theHarvester",
            summary: "Recolección de correos y hosts públicos",
            use_case: "Encontrar correos electrónicos, hosts, información de la organización",
        },
    }
}

/// Renders the catalog as `- Title: summary` lines (general chat).
#[must_use]
pub fn summary_block() -> String {
    ScanKind::ALL
        .iter()
        .map(|kind| {
            let tool = profile(*kind);
            format!("- {}: {}", tool.title, tool.summary)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders the catalog as `- Title: Para ...` lines (tool recommendation).
#[must_use]
pub fn use_case_block() -> String {
    ScanKind::ALL
        .iter()
        .map(|kind| {
            let tool = profile(*kind);
            format!("- {}: Para {}", tool.title, decapitalize(tool.use_case))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Lowercases the first character so a use case reads after "Para".
fn decapitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_has_a_profile() {
        for kind in ScanKind::ALL {
            let tool = profile(kind);
            assert!(!tool.title.is_empty());
            assert!(!tool.summary.is_empty());
            assert!(!tool.use_case.is_empty());
        }
    }

    #[test]
    fn test_summary_block_lists_all_seven_tools() {
        let block = summary_block();
        assert_eq!(block.lines().count(), 7);
        assert!(block.contains("- Fuzzing Web: Búsqueda de directorios y archivos ocultos"));
        assert!(block.contains("- theHarvester: Recolección de correos y hosts públicos"));
    }

    #[test]
    fn test_use_case_block_phrasing() {
        let block = use_case_block();
        assert!(block.contains(
            "- Fuzzing Web: Para encontrar rutas sensibles, archivos de backup, paneles de administración"
        ));
        assert!(block.contains(
            "- WHOIS Lookup: Para información del dominio, fechas de expiración, datos del registrante"
        ));
    }
}
