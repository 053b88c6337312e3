use crate::SectionAdapter;

/// Adapter configuration problems detected at attach time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The adapter does not declare which view types are pinned.
    #[error("adapter does not declare pinned view types (missing classifier)")]
    MissingClassifier,
    /// The adapter cannot distinguish rows from section headers.
    #[error("adapter declares {declared} view type(s); need at least 2 (rows and sections)")]
    TooFewViewTypes { declared: usize },
}

/// Checks that `adapter` can drive a pinned-section list.
pub fn validate_adapter<A: SectionAdapter + ?Sized>(adapter: &A) -> Result<(), ConfigError> {
    if adapter.classifier().is_none() {
        pwarn!("adapter rejected: missing classifier");
        return Err(ConfigError::MissingClassifier);
    }
    let declared = adapter.view_type_count();
    if declared < 2 {
        pwarn!(declared, "adapter rejected: too few view types");
        return Err(ConfigError::TooFewViewTypes { declared });
    }
    Ok(())
}
