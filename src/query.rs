/// Iterator over the `key=value` pairs of a query string.
///
/// Pairs are separated by `&`; empty pairs are skipped. A pair without `=`
/// yields an empty value. Keys and values are returned exactly as they
/// appear in the URI: no percent-decoding and no `+` to space conversion.
#[derive(Debug, Clone)]
pub struct QueryPairs<'a> {
    rest: Option<&'a str>,
}

impl<'a> QueryPairs<'a> {
    /// Iterate over `query` (with or without leading `?`)
    pub fn new(query: &'a str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self { rest: Some(query) }
    }
}

impl<'a> Iterator for QueryPairs<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let rest = self.rest?;
            let pair = match rest.split_once('&') {
                Some((pair, tail)) => {
                    self.rest = Some(tail);
                    pair
                }
                None => {
                    self.rest = None;
                    rest
                }
            };
            if pair.is_empty() {
                continue;
            }
            return Some(pair.split_once('=').unwrap_or((pair, "")));
        }
    }
}

impl core::iter::FusedIterator for QueryPairs<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compat::Vec;

    fn pairs(query: &str) -> Vec<(&str, &str)> {
        QueryPairs::new(query).collect()
    }

    #[test]
    fn test_basic_pairs() {
        assert_eq!(pairs("a=1&b=2"), [("a", "1"), ("b", "2")]);
        assert_eq!(pairs("?code=xyz"), [("code", "xyz")]);
    }

    #[test]
    fn test_empty_and_bare_pairs() {
        assert!(pairs("").is_empty());
        assert!(pairs("&&").is_empty());
        assert_eq!(pairs("flag&x="), [("flag", ""), ("x", "")]);
    }

    #[test]
    fn test_value_keeps_extra_equals() {
        assert_eq!(pairs("k=a=b"), [("k", "a=b")]);
    }

    #[test]
    fn test_no_decoding() {
        assert_eq!(pairs("q=a%20b+c"), [("q", "a%20b+c")]);
    }
}
