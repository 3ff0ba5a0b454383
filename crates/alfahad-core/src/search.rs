//! Case-insensitive search across services, events, and gallery titles

use crate::content;

/// Which section of the site a hit came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Service,
    Event,
    Gallery,
}

impl SearchKind {
    pub fn label(&self) -> &'static str {
        match self {
            SearchKind::Service => "Service",
            SearchKind::Event => "Event",
            SearchKind::Gallery => "Gallery",
        }
    }

    /// Page anchor the hit navigates to when chosen.
    pub fn anchor(&self) -> &'static str {
        match self {
            SearchKind::Service => "#services",
            SearchKind::Event => "#events",
            SearchKind::Gallery => "#gallery",
        }
    }
}

/// One search result row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub kind: SearchKind,
    pub title: String,
    /// Secondary line under the title; absent for gallery hits.
    pub snippet: Option<String>,
}

impl SearchHit {
    pub fn anchor(&self) -> &'static str {
        self.kind.anchor()
    }
}

/// Finds every service, event, and gallery photo matching `query`.
///
/// Matching is a case-insensitive substring test over titles, plus
/// descriptions for services and events. Hits come back grouped in
/// section order (services, then events, then gallery). A blank query
/// matches nothing.
pub fn search_site(query: &str) -> Vec<SearchHit> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let matches = |text: &str| text.to_lowercase().contains(&needle);
    let mut hits = Vec::new();

    for service in content::services() {
        if matches(&service.title) || matches(&service.description) {
            hits.push(SearchHit {
                kind: SearchKind::Service,
                title: service.title,
                snippet: Some(service.description),
            });
        }
    }
    for event in content::upcoming_events() {
        if matches(&event.title) || matches(&event.description) {
            hits.push(SearchHit {
                kind: SearchKind::Event,
                title: event.title,
                snippet: Some(event.date),
            });
        }
    }
    for item in content::gallery() {
        if matches(&item.title) {
            hits.push(SearchHit {
                kind: SearchKind::Gallery,
                title: item.title,
                snippet: None,
            });
        }
    }

    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_query_matches_nothing() {
        assert!(search_site("").is_empty());
        assert!(search_site("   ").is_empty());
    }

    #[test]
    fn test_quran_spans_sections() {
        let hits = search_site("quran");
        assert!(hits.iter().any(|h| h.kind == SearchKind::Service));
        assert!(hits.iter().any(|h| h.kind == SearchKind::Event));
        assert!(hits.iter().any(|h| h.kind == SearchKind::Gallery));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let upper = search_site("IFTAR");
        let lower = search_site("iftar");
        assert_eq!(upper, lower);
        assert!(!upper.is_empty());
    }

    #[test]
    fn test_hits_keep_section_order() {
        let hits = search_site("quran");
        let first_event = hits.iter().position(|h| h.kind == SearchKind::Event);
        let last_service = hits.iter().rposition(|h| h.kind == SearchKind::Service);
        if let (Some(event), Some(service)) = (first_event, last_service) {
            assert!(service < event);
        }
    }

    #[test]
    fn test_description_text_matches_services() {
        // "Tajweed" appears in the Quran Classes description
        let hits = search_site("tajweed");
        assert!(hits
            .iter()
            .any(|h| h.kind == SearchKind::Service && h.title == "Quran Classes"));
    }

    #[test]
    fn test_no_match_returns_empty() {
        assert!(search_site("zzzzzz").is_empty());
    }

    #[test]
    fn test_anchor_follows_kind() {
        for hit in search_site("quran") {
            match hit.kind {
                SearchKind::Service => assert_eq!(hit.anchor(), "#services"),
                SearchKind::Event => assert_eq!(hit.anchor(), "#events"),
                SearchKind::Gallery => assert_eq!(hit.anchor(), "#gallery"),
            }
        }
    }
}
