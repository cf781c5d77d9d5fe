//! Case-insensitive key filters for the top-level listings.

/// Restricts a listing to nodes whose key matches one of a set of values.
///
/// Keys are lowercased once at construction so stores only compare against
/// `toLower(key)`. Entries keep their order and duplicates are preserved.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum KeyFilter {
    /// No filter: every node of the label.
    #[default]
    All,
    /// Nodes whose lowercased key equals one of these values.
    AnyOf(Vec<String>),
}

impl KeyFilter {
    /// Build a filter from a GraphQL `[String]` argument.
    ///
    /// A missing or empty list means "no filter". Null entries never match,
    /// so a list made only of nulls selects nothing.
    pub fn from_input(input: Option<Vec<Option<String>>>) -> Self {
        match input {
            None => KeyFilter::All,
            Some(values) if values.is_empty() => KeyFilter::All,
            Some(values) => KeyFilter::AnyOf(
                values
                    .into_iter()
                    .flatten()
                    .map(|v| v.to_lowercase())
                    .collect(),
            ),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, KeyFilter::All)
    }

    /// Lowercased values to match, empty for [`KeyFilter::All`].
    pub fn values(&self) -> &[String] {
        match self {
            KeyFilter::All => &[],
            KeyFilter::AnyOf(values) => values,
        }
    }
}

impl<S: Into<String>> FromIterator<S> for KeyFilter {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let values: Vec<Option<String>> = iter.into_iter().map(|s| Some(s.into())).collect();
        KeyFilter::from_input(Some(values))
    }
}
