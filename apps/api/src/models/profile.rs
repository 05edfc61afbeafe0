use serde::{Deserialize, Serialize};

/// Skills extracted from a résumé, built once at the boundary so the
/// ranking core never deals with missing or loosely-shaped input.
/// Order is irrelevant to scoring; no explicit deduplication is applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryProfile {
    skills: Vec<String>,
}

impl QueryProfile {
    /// Builds a profile, dropping blank entries.
    pub fn new(skills: Vec<String>) -> Self {
        let skills = skills
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        Self { skills }
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Joins the skills into a single lowercase query document, the form
    /// the vectorizer consumes.
    pub fn query_document(&self) -> String {
        self.skills.join(" ").to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_skills_are_dropped() {
        let profile = QueryProfile::new(vec![
            "Python".to_string(),
            "   ".to_string(),
            "SQL".to_string(),
            String::new(),
        ]);
        assert_eq!(profile.skills(), &["Python", "SQL"]);
    }

    #[test]
    fn test_query_document_is_lowercase_space_joined() {
        let profile = QueryProfile::new(vec!["Python".to_string(), "Machine Learning".to_string()]);
        assert_eq!(profile.query_document(), "python machine learning");
    }

    #[test]
    fn test_empty_profile() {
        let profile = QueryProfile::new(vec![]);
        assert!(profile.is_empty());
        assert_eq!(profile.query_document(), "");
    }
}
