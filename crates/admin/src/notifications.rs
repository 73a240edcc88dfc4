//! Notification toasts shown after back-office actions.

/// A short notification the back office shows after an action completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Headline, e.g. "Produit ajouté".
    pub title: String,
    /// One-line detail naming the affected entity.
    pub description: String,
}

impl Toast {
    /// Build a toast.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}
