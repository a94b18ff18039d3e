use crate::compat::{Box, String};
use crate::query_params::QueryParams;

/// A single change to a query, as data.
///
/// Useful when the set of changes is decided before the builder is at hand,
/// e.g. collected from UI events and applied with [`QueryParams::apply_all`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    /// Append a pair, keeping existing values of the key
    Add { key: String, value: String },
    /// Give the key exactly this one value
    AddOrReplace { key: String, value: String },
    /// Drop every value of the key
    Remove { key: String },
}

impl Mutation {
    pub fn add(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Add {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn add_or_replace(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::AddOrReplace {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn remove(key: impl Into<String>) -> Self {
        Self::Remove { key: key.into() }
    }

    pub fn key(&self) -> &str {
        match self {
            Self::Add { key, .. } | Self::AddOrReplace { key, .. } | Self::Remove { key } => key,
        }
    }
}

/// A deferred mutation for [`QueryParams::compose`].
pub type Step<'a> = Box<dyn FnOnce(&mut QueryParams) + 'a>;

/// Box a closure as a [`Step`], fixing its argument type so it can be written as `|q| ...`.
///
/// The closure may return anything owned (the serialized `String` of a mutation,
/// `()` from a block); the value is dropped. A step returning data borrowed from
/// the builder has to discard it inside the closure: `|q| { q.get_param("a"); }`.
///
/// ```
/// use query_params::{QueryParams, step};
///
/// let mut query = QueryParams::parse("?a=1&b=2");
/// let result = query.compose([
///     step(|q| q.add_or_replace_param("a", "x")),
///     step(|q| q.remove_param("b")),
/// ]);
/// assert_eq!(result, "a=x");
/// ```
pub fn step<'a, F, R>(f: F) -> Step<'a>
where
    F: FnOnce(&mut QueryParams) -> R + 'a,
    R: 'a,
{
    Box::new(move |query: &mut QueryParams| {
        f(query);
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key() {
        assert_eq!(Mutation::add("a", "1").key(), "a");
        assert_eq!(Mutation::add_or_replace("b", "2").key(), "b");
        assert_eq!(Mutation::remove("c").key(), "c");
    }

    #[test]
    fn test_step_accepts_unit_closures() {
        let mut query = QueryParams::parse("a=1");
        let result = query.compose([
            step(|q| {
                q.add_param("b", "2");
            }),
            step(|q| q.remove_param("a")),
            step(|q| {
                q.get_param("b");
            }),
        ]);
        assert_eq!(result, "b=2");
    }

    #[test]
    fn test_constructors() {
        assert_eq!(
            Mutation::add_or_replace("k", "v"),
            Mutation::AddOrReplace {
                key: "k".into(),
                value: "v".into(),
            }
        );
    }
}
