//! TF-IDF vector space — vocabulary fitting and document transformation.
//!
//! The space is fitted fresh on every ranking call over the query document
//! plus all normalized job texts, so query and job vectors always come out
//! of the same vocabulary. Weighting is raw term frequency times smoothed
//! IDF (`ln((1+n)/(1+df)) + 1`); vectors are deliberately NOT L2-normalized
//! because the re-selection stage measures Euclidean distance over the raw
//! weighted vectors. Cosine similarity is scale-invariant, so stage-1
//! scores are unaffected by the missing normalization.

use std::collections::{HashMap, HashSet};

/// Lowercases and splits on anything that is not alphanumeric, `+`, or `#`,
/// so skill tokens like "c++" and "c#" survive tokenization.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric() && c != '+' && c != '#')
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
        .collect()
}

/// Normalizes a dataset key-skills field: pipe separators become spaces,
/// everything lowercased. "Python| SQL| Django" -> "python  sql  django".
pub fn normalize_key_skills(raw: &str) -> String {
    raw.replace('|', " ").to_lowercase()
}

/// A fitted term vocabulary with per-term IDF weights. Dimension order
/// follows first occurrence across the fitted documents, so fitting is
/// fully deterministic.
#[derive(Debug, Clone)]
pub struct VectorSpace {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl VectorSpace {
    /// Fits the vocabulary and IDF weights over the given documents.
    pub fn fit(documents: &[String]) -> Self {
        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let tokenized: Vec<Vec<String>> = documents.iter().map(|d| tokenize(d)).collect();

        for tokens in &tokenized {
            for token in tokens {
                let next_dim = vocabulary.len();
                vocabulary.entry(token.clone()).or_insert(next_dim);
            }
        }

        // Document frequency per dimension.
        let mut df = vec![0usize; vocabulary.len()];
        for tokens in &tokenized {
            let unique: HashSet<&str> = tokens.iter().map(|t| t.as_str()).collect();
            for token in unique {
                df[vocabulary[token]] += 1;
            }
        }

        let n = documents.len() as f64;
        let idf = df
            .iter()
            .map(|&d| ((1.0 + n) / (1.0 + d as f64)).ln() + 1.0)
            .collect();

        Self { vocabulary, idf }
    }

    /// Transforms a document into a dense TF-IDF vector in this space.
    /// Out-of-vocabulary terms contribute nothing.
    pub fn transform(&self, document: &str) -> Vec<f64> {
        let mut vector = vec![0.0; self.idf.len()];
        for token in tokenize(document) {
            if let Some(&dim) = self.vocabulary.get(&token) {
                vector[dim] += self.idf[dim];
            }
        }
        vector
    }

    pub fn dimensions(&self) -> usize {
        self.idf.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_keeps_cpp_and_csharp() {
        assert_eq!(tokenize("C++ and C# devs"), vec!["c++", "and", "c#", "devs"]);
    }

    #[test]
    fn test_tokenize_splits_on_pipes_and_commas() {
        assert_eq!(
            tokenize("python| sql,django"),
            vec!["python", "sql", "django"]
        );
    }

    #[test]
    fn test_normalize_key_skills() {
        assert_eq!(normalize_key_skills("Python| SQL"), "python  sql");
    }

    #[test]
    fn test_dimensions_match_joint_vocabulary() {
        let docs = vec!["python sql".to_string(), "sql django".to_string()];
        let space = VectorSpace::fit(&docs);
        assert_eq!(space.dimensions(), 3); // python, sql, django
    }

    #[test]
    fn test_identical_documents_transform_identically() {
        let docs = vec!["python sql".to_string(), "python sql".to_string()];
        let space = VectorSpace::fit(&docs);
        assert_eq!(space.transform("python sql"), space.transform("python sql"));
    }

    #[test]
    fn test_out_of_vocabulary_terms_are_zero() {
        let docs = vec!["python sql".to_string()];
        let space = VectorSpace::fit(&docs);
        let v = space.transform("haskell prolog");
        assert!(v.iter().all(|w| *w == 0.0));
    }

    #[test]
    fn test_rare_terms_weigh_more_than_common_terms() {
        let docs = vec![
            "python sql".to_string(),
            "python django".to_string(),
            "python rust".to_string(),
        ];
        let space = VectorSpace::fit(&docs);
        // Dimension order follows first occurrence: python=0, sql=1, django=2, rust=3.
        let v = space.transform("python rust");
        // "python" appears in all 3 docs, "rust" in 1; rust's IDF must win.
        assert!(v[3] > v[0], "rust {} vs python {}", v[3], v[0]);
    }

    #[test]
    fn test_term_frequency_accumulates() {
        let docs = vec!["python python sql".to_string()];
        let space = VectorSpace::fit(&docs);
        let doubled = space.transform("python python sql");
        let single = space.transform("python sql");
        assert!((doubled[0] - 2.0 * single[0]).abs() < 1e-12);
        assert_eq!(doubled[1], single[1]);
    }
}
