use crate::checkers::parse_port;
use crate::query::QueryPairs;
use crate::uri_components::{Component, Span, UriComponents};

/// Read access shared by [`Uri`](crate::Uri) and [`UriRef`](crate::UriRef).
///
/// Implementors supply the buffer and the offsets of each component inside
/// it; every getter slices that buffer without copying. Absent components
/// read as `""`.
pub trait UriBase {
    /// The buffer that component offsets index into
    #[doc(hidden)]
    fn buffer(&self) -> &str;

    /// Component offsets into [`buffer`](Self::buffer)
    #[doc(hidden)]
    fn components(&self) -> &UriComponents;

    #[doc(hidden)]
    fn slice(&self, span: Span) -> &str {
        self.buffer().get(span.start..span.end).unwrap_or("")
    }

    /// The full URI in canonical order
    fn as_str(&self) -> &str {
        self.slice(self.components().full)
    }

    /// Get a component by kind
    fn component(&self, component: Component) -> &str {
        self.slice(self.components().span(component))
    }

    /// Scheme without the trailing `:` (never empty)
    fn scheme(&self) -> &str {
        self.component(Component::Scheme)
    }

    /// Userinfo without the trailing `@`
    fn userinfo(&self) -> &str {
        self.component(Component::Userinfo)
    }

    /// Host, including brackets for IPv6 literals
    fn host(&self) -> &str {
        self.component(Component::Host)
    }

    /// Port digits without the leading `:`
    fn port(&self) -> &str {
        self.component(Component::Port)
    }

    fn path(&self) -> &str {
        self.component(Component::Path)
    }

    /// Query without the leading `?`
    fn query(&self) -> &str {
        self.component(Component::Query)
    }

    /// Fragment without the leading `#`
    fn fragment(&self) -> &str {
        self.component(Component::Fragment)
    }

    /// `userinfo@host:port`, or `""` without an authority section
    fn authority(&self) -> &str {
        self.slice(self.components().authority())
    }

    /// Port as a number, if present
    fn port_number(&self) -> Option<u16> {
        parse_port(self.port())
    }

    fn has_authority(&self) -> bool {
        self.components().has_authority
    }

    fn has_userinfo(&self) -> bool {
        self.components().has_userinfo
    }

    fn has_port(&self) -> bool {
        self.components().has_port
    }

    fn has_query(&self) -> bool {
        self.components().has_query
    }

    fn has_fragment(&self) -> bool {
        self.components().has_fragment
    }

    /// Iterate over `key=value` pairs of the query, without decoding
    fn query_pairs(&self) -> QueryPairs<'_> {
        QueryPairs::new(self.query())
    }

    /// First value for `key` in the query, without decoding
    fn query_param(&self, key: &str) -> Option<&str> {
        self.query_pairs().find(|&(k, _)| k == key).map(|(_, v)| v)
    }
}
