// Matching core: TF-IDF vectorization, cosine shortlisting, Euclidean
// re-selection, score attachment. The vector space is rebuilt per request;
// nothing here holds state across calls.

pub mod engine;
pub mod handlers;
pub mod ranker;
pub mod reranker;
pub mod similarity;
pub mod vectorizer;
