use indexmap::IndexMap;
use url::form_urlencoded;

/// Ordered set of query parameters for a single call.
///
/// Parameters keep the position of their first insertion; setting a key again only replaces its
/// value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(IndexMap<String, String>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl ToString) {
        self.0.insert(key.into(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Form-urlencoded query string, without the leading `?`.
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }
}

/// Capability of calls that accept filters in their query string.
pub trait HasQueryParams {
    fn query_params(&self) -> &QueryParams;
    fn query_params_mut(&mut self) -> &mut QueryParams;

    fn set_query_param(&mut self, key: &str, value: impl ToString) {
        self.query_params_mut().set(key, value);
    }

    fn query_string(&self) -> Option<String> {
        let params = self.query_params();
        (!params.is_empty()).then(|| params.to_query_string())
    }
}

/// Implements [`HasQueryParams`] for calls storing their parameters in a `query` field.
macro_rules! impl_has_query_params {
    ($($call:ident),+ $(,)?) => {
        $(
            impl<C> $crate::query::HasQueryParams for $call<C> {
                fn query_params(&self) -> &$crate::query::QueryParams {
                    &self.query
                }

                fn query_params_mut(&mut self) -> &mut $crate::query::QueryParams {
                    &mut self.query
                }
            }
        )+
    };
}
pub(crate) use impl_has_query_params;
