/// A candidate that survived matching, paired with its display markup.
///
/// `markup` is `text` with the matched span wrapped by a
/// [`Highlighter`](crate::Highlighter). When no contiguous span of the query
/// exists in `text`, both fields are identical.
///
/// # Examples
/// ```
/// use waymark_core::MatchResult;
///
/// let result = MatchResult::new("Helsinki", "<b>Hel</b>sinki");
/// assert_eq!(result.text, "Helsinki");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchResult {
    /// Candidate text in its original case.
    pub text: String,
    /// Candidate text with the matched span highlighted.
    pub markup: String,
}

impl MatchResult {
    /// Construct a result from its text and markup.
    #[must_use]
    pub fn new(text: impl Into<String>, markup: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            markup: markup.into(),
        }
    }

    /// Construct a result whose markup is the bare text.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        let owned = text.into();
        Self {
            markup: owned.clone(),
            text: owned,
        }
    }
}
