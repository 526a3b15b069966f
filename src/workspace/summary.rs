//! Lecture summary derivation.
//!
//! The exact derivation is not algorithmically significant, so it sits behind
//! a trait: the store takes any [`Summarizer`] at construction and the default
//! is a cheap extractive strategy. A real model-backed summarizer can be
//! slotted in without touching the store contract.

/// Derives summary content from a raw lecture transcript.
///
/// Implementations must be deterministic: the same transcript always yields
/// the same content.
pub trait Summarizer: Send + Sync {
    /// Produce the stored summary content for a transcript.
    fn summarize(&self, transcript: &str) -> String;
}

/// Default strategy: keep the leading sentences of the transcript.
#[derive(Debug, Clone)]
pub struct ExtractiveSummarizer {
    /// Maximum number of sentences to keep.
    pub max_sentences: usize,
}

impl Default for ExtractiveSummarizer {
    fn default() -> Self {
        Self { max_sentences: 3 }
    }
}

impl Summarizer for ExtractiveSummarizer {
    fn summarize(&self, transcript: &str) -> String {
        let trimmed = transcript.trim();
        if trimmed.is_empty() {
            return "(empty transcript)".to_string();
        }

        let sentences: Vec<&str> = trimmed
            .split_inclusive(['.', '!', '?'])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        if sentences.len() <= self.max_sentences {
            return sentences.join(" ");
        }

        let mut summary = sentences[..self.max_sentences].join(" ");
        summary.push_str(" …");
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_transcript_kept_whole() {
        let s = ExtractiveSummarizer::default();
        assert_eq!(s.summarize("One. Two."), "One. Two.");
    }

    #[test]
    fn long_transcript_truncated_with_marker() {
        let s = ExtractiveSummarizer::default();
        let out = s.summarize("A. B. C. D. E.");
        assert_eq!(out, "A. B. C. …");
    }

    #[test]
    fn empty_transcript_has_placeholder() {
        let s = ExtractiveSummarizer::default();
        assert_eq!(s.summarize("   "), "(empty transcript)");
    }

    #[test]
    fn deterministic() {
        let s = ExtractiveSummarizer::default();
        let t = "The eigenvalues of a symmetric matrix are real. Proof follows. Consider the inner product.";
        assert_eq!(s.summarize(t), s.summarize(t));
    }
}
