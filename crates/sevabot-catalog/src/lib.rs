// SPDX-FileCopyrightText: 2026 Sevabot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service catalog for the Sevabot intake agent.
//!
//! A static mapping of canonical service name to required documents and fee,
//! plus a normalization table of free-text aliases (English and
//! transliterated Marathi) to canonical names. The catalog preserves
//! insertion order so that service lists render stably.

mod data;

use std::collections::HashMap;

/// Required documents and fee for one catalog service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceInfo {
    /// Comma-separated required-documents text, shown verbatim to customers.
    pub documents: String,
    /// Fee text, shown verbatim.
    pub charges: String,
}

/// The service catalog: ordered canonical services plus an alias index.
#[derive(Debug, Clone)]
pub struct ServiceCatalog {
    services: Vec<(String, ServiceInfo)>,
    // Lower-cased alias -> canonical name.
    alias_index: HashMap<String, String>,
}

impl Default for ServiceCatalog {
    fn default() -> Self {
        let services = data::SERVICES
            .iter()
            .map(|(name, documents, charges)| {
                (
                    (*name).to_string(),
                    ServiceInfo {
                        documents: (*documents).to_string(),
                        charges: (*charges).to_string(),
                    },
                )
            })
            .collect();

        let alias_index = data::ALIASES
            .iter()
            .map(|(alias, canonical)| (alias.to_lowercase(), (*canonical).to_string()))
            .collect();

        Self {
            services,
            alias_index,
        }
    }
}

impl ServiceCatalog {
    /// Looks up a service by its exact canonical name.
    pub fn get(&self, name: &str) -> Option<&ServiceInfo> {
        self.services
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, info)| info)
    }

    /// Resolves free text to a canonical service name: exact match first,
    /// then the alias table (case-insensitive, trimmed). Returns `None` for
    /// text that names no catalog service.
    pub fn resolve(&self, input: &str) -> Option<&str> {
        let trimmed = input.trim();
        if let Some((name, _)) = self.services.iter().find(|(n, _)| n == trimmed) {
            return Some(name);
        }
        self.alias_index
            .get(&trimmed.to_lowercase())
            .map(String::as_str)
    }

    /// Normalizes a submission reason to a canonical service name where
    /// possible; otherwise the reason passes through as free text.
    pub fn normalize_reason(&self, reason: &str) -> String {
        self.resolve(reason)
            .map(String::from)
            .unwrap_or_else(|| reason.trim().to_string())
    }

    /// Canonical service names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.services.iter().map(|(n, _)| n.as_str())
    }

    /// Services with their info, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ServiceInfo)> {
        self.services.iter().map(|(n, i)| (n.as_str(), i))
    }

    /// Number of catalog services.
    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_nine_services_in_order() {
        let catalog = ServiceCatalog::default();
        assert_eq!(catalog.len(), 9);
        let first = catalog.names().next().unwrap();
        assert_eq!(first, "पॅन कार्ड (नवीन/दुरुस्ती)");
    }

    #[test]
    fn exact_name_resolves_to_itself() {
        let catalog = ServiceCatalog::default();
        assert_eq!(
            catalog.resolve("उत्पन्नाचा दाखला"),
            Some("उत्पन्नाचा दाखला")
        );
    }

    #[test]
    fn alias_resolves_case_insensitively() {
        let catalog = ServiceCatalog::default();
        assert_eq!(catalog.resolve("Income Certificate"), Some("उत्पन्नाचा दाखला"));
        assert_eq!(catalog.resolve("  pcc  "), Some("पोलिस मंजुरी प्रमाणपत्र (PCC)"));
        assert_eq!(catalog.resolve("Domocile"), Some("डोमिसाईल / नॅशनलिटी दाखला"));
    }

    #[test]
    fn every_alias_points_at_an_existing_service() {
        let catalog = ServiceCatalog::default();
        for (alias, _) in super::data::ALIASES {
            let canonical = catalog.resolve(alias).unwrap_or_else(|| {
                panic!("alias `{alias}` did not resolve");
            });
            assert!(
                catalog.get(canonical).is_some(),
                "alias `{alias}` resolves to `{canonical}` which is not a catalog key"
            );
        }
    }

    #[test]
    fn unknown_reason_passes_through() {
        let catalog = ServiceCatalog::default();
        assert_eq!(
            catalog.normalize_reason("  फॉर्म भरून हवा  "),
            "फॉर्म भरून हवा"
        );
    }

    #[test]
    fn normalize_reason_maps_alias_to_canonical() {
        let catalog = ServiceCatalog::default();
        assert_eq!(
            catalog.normalize_reason("utpannacha dakhala"),
            "उत्पन्नाचा दाखला"
        );
        assert_eq!(catalog.normalize_reason("voter id"), "मतदान कार्ड (नवीन/दुरुस्ती)");
    }

    #[test]
    fn charges_and_documents_exposed() {
        let catalog = ServiceCatalog::default();
        let info = catalog.get("उत्पन्नाचा दाखला").unwrap();
        assert_eq!(info.charges, "₹150");
        assert!(info.documents.contains("आधार कार्ड"));
    }
}
