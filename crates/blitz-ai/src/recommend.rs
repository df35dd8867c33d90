//! Lightweight keyword-to-recommendation mapper, independent of the
//! classifier.
//!
//! Scans a free-text context for domain keyword groups and merges the tool
//! recommendations of every matching group. Duplicates across groups are
//! NOT removed: a context matching several groups yields the merged list
//! as-is, preserving the cardinality of the deployed assistant.

/// Returns tool recommendation lines for all keyword groups matching the
/// context, or a generic three-tool default when none match.
pub fn recommend_tools(context: &str) -> Vec<String> {
    let lowered = context.to_lowercase();
    let mut recommendations = Vec::new();

    if lowered.contains("backend") || lowered.contains("api") {
        recommendations.push("Fuzzing Web - Para encontrar endpoints ocultos y rutas sensibles");
        recommendations.push("Nmap Scan - Para identificar puertos y servicios expuestos");
        recommendations.push("ParamSpider - Para encontrar parámetros vulnerables en APIs");
    }

    if lowered.contains("dominio") || lowered.contains("sitio web") {
        recommendations.push("WHOIS Lookup - Para información del dominio y registrante");
        recommendations.push("Subfinder - Para encontrar subdominios relacionados");
        recommendations.push("WhatWeb - Para identificar tecnologías del sitio");
    }

    if lowered.contains("vulnerabilidad") || lowered.contains("seguridad") {
        recommendations.push("Nmap Scan - Para identificar servicios vulnerables");
        recommendations.push("Fuzzing Web - Para encontrar rutas sensibles");
        recommendations.push("ParamSpider - Para detectar parámetros vulnerables");
    }

    if lowered.contains("información") || lowered.contains("reconocimiento") {
        recommendations.push("WHOIS Lookup - Para información del dominio");
        recommendations.push("theHarvester - Para encontrar correos y hosts");
        recommendations.push("WhatWeb - Para fingerprinting de tecnologías");
    }

    if recommendations.is_empty() {
        recommendations.push("Nmap Scan - Para un análisis completo de puertos y servicios");
        recommendations.push("Fuzzing Web - Para encontrar rutas y archivos ocultos");
        recommendations.push("WHOIS Lookup - Para información del dominio");
    }

    recommendations.into_iter().map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_group() {
        let recommendations = recommend_tools("necesito revisar el backend de mi aplicación");
        assert_eq!(recommendations.len(), 3);
        assert!(recommendations[0].starts_with("Fuzzing Web"));
        assert!(recommendations[2].starts_with("ParamSpider"));
    }

    #[test]
    fn test_default_when_no_group_matches() {
        let recommendations = recommend_tools("hola");
        assert_eq!(
            recommendations,
            vec![
                "Nmap Scan - Para un análisis completo de puertos y servicios",
                "Fuzzing Web - Para encontrar rutas y archivos ocultos",
                "WHOIS Lookup - Para información del dominio",
            ]
        );
    }

    #[test]
    fn test_multiple_groups_merge_without_dedup() {
        // Matches the backend/API group and the vulnerability/security
        // group; both contribute and repeats are kept.
        let recommendations = recommend_tools("seguridad de mi api");
        assert_eq!(recommendations.len(), 6);

        let fuzzing_mentions = recommendations
            .iter()
            .filter(|line| line.starts_with("Fuzzing Web"))
            .count();
        assert_eq!(fuzzing_mentions, 2, "duplicates across groups are kept");
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let recommendations = recommend_tools("Auditar mi DOMINIO corporativo");
        assert!(recommendations[0].starts_with("WHOIS Lookup"));
    }
}
