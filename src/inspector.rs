use std::sync::Arc;

use crate::ai::{self, Commentator};
use crate::naming::{NamingResult, NamingRule};

/// Keeps the latest result. Each check replaces the previous one.
pub struct Inspector {
    commentator: Option<Arc<dyn Commentator>>,
    input: String,
    current: Option<NamingResult>,
}

impl Inspector {
    pub fn new(commentator: Option<Arc<dyn Commentator>>) -> Self {
        Self {
            commentator,
            input: String::new(),
            current: None,
        }
    }

    pub fn has_commentator(&self) -> bool {
        self.commentator.is_some()
    }

    /// Synchronous validation; the result is available immediately.
    pub fn check(&mut self, filename: &str) -> &NamingResult {
        self.input = filename.to_string();
        self.current.insert(NamingRule::validate(filename))
    }

    /// Attaches commentary to the current result and returns it.
    /// Does nothing without a commentator or a result.
    pub async fn annotate(&mut self) -> Option<&str> {
        let commentator = self.commentator.clone()?;
        self.current.as_ref()?;

        let feedback = ai::analyze(commentator.as_ref(), &self.input).await;
        let result = self.current.as_mut()?;
        result.ai_feedback = Some(feedback);
        result.ai_feedback.as_deref()
    }

    pub fn current(&self) -> Option<&NamingResult> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{AiError, ERROR_FALLBACK};
    use async_trait::async_trait;

    struct Failing;

    #[async_trait]
    impl Commentator for Failing {
        async fn comment(&self, _filename: &str) -> Result<String, AiError> {
            Err(AiError::MissingApiKey)
        }
    }

    struct Echo;

    #[async_trait]
    impl Commentator for Echo {
        async fn comment(&self, filename: &str) -> Result<String, AiError> {
            Ok(format!("ok: {filename}"))
        }
    }

    #[tokio::test]
    async fn failed_commentary_leaves_validation_untouched() {
        let mut inspector = Inspector::new(Some(Arc::new(Failing)));
        let name = "PRJ-ORG-ZZ-XX-M3-AR-0001.rvt";
        assert!(inspector.check(name).overall_valid);

        let feedback = inspector.annotate().await.map(str::to_string);
        assert_eq!(feedback.as_deref(), Some(ERROR_FALLBACK));

        let result = inspector.current().unwrap();
        assert!(result.overall_valid);
        assert!(result.segments.iter().all(|s| s.is_valid));
        assert_eq!(result.ai_feedback.as_deref(), Some(ERROR_FALLBACK));
    }

    #[tokio::test]
    async fn next_check_replaces_the_previous_result() {
        let mut inspector = Inspector::new(Some(Arc::new(Echo)));
        inspector.check("PRJ-ORG-ZZ-XX-M3-AR-0001.rvt");
        let first = inspector.annotate().await.map(str::to_string);
        assert_eq!(first.as_deref(), Some("ok: PRJ-ORG-ZZ-XX-M3-AR-0001.rvt"));

        let second = inspector.check("PRJ-ORG.rvt");
        assert!(!second.overall_valid);
        assert!(second.ai_feedback.is_none());
        assert_eq!(inspector.current().unwrap().filename, "PRJ-ORG");
    }

    #[tokio::test]
    async fn annotate_without_commentator_or_result_is_a_no_op() {
        let mut bare = Inspector::new(None);
        bare.check("PRJ-ORG-ZZ-XX-M3-AR-0001.rvt");
        assert!(bare.annotate().await.is_none());
        assert!(bare.current().unwrap().ai_feedback.is_none());

        let mut empty = Inspector::new(Some(Arc::new(Echo)));
        assert!(empty.annotate().await.is_none());
    }
}
