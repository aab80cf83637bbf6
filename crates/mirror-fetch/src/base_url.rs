//! Remote base URL

use mirror_manifest::ResolvedPath;
use std::fmt;
use url::Url;

use crate::error::FetchError;
use crate::Result;

/// An absolute http(s) prefix that resolved paths are appended to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Validate `base` and make sure it ends with exactly one `/`
    pub fn parse(base: &str) -> Result<Self> {
        let base = base.trim();
        let parsed = Url::parse(base).map_err(|e| FetchError::InvalidUrl(format!("{base}: {e}")))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(FetchError::InvalidUrl(format!(
                "{base}: unsupported scheme {}",
                parsed.scheme()
            )));
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(FetchError::InvalidUrl(format!(
                "{base}: query strings and fragments are not allowed"
            )));
        }

        let mut normalized = base.trim_end_matches('/').to_string();
        normalized.push('/');
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Plain string concatenation of the base and the path
    pub fn join(&self, path: &ResolvedPath) -> String {
        format!("{}{}", self.0, path)
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CDN: &str = "https://cdn.jsdelivr.net/gh/iainfox/FBLA-Intro-To-Programming@latest/";

    #[test]
    fn test_join() {
        let base = BaseUrl::parse(CDN).unwrap();
        assert_eq!(base.as_str(), CDN);
        assert_eq!(
            base.join(&ResolvedPath::from("unit1/lesson1/a.txt")),
            format!("{CDN}unit1/lesson1/a.txt")
        );
    }

    #[test]
    fn test_trailing_slash_normalized() {
        let bare = BaseUrl::parse("http://localhost:8080/files").unwrap();
        assert_eq!(bare.as_str(), "http://localhost:8080/files/");

        let doubled = BaseUrl::parse("http://localhost:8080/files//").unwrap();
        assert_eq!(doubled.as_str(), "http://localhost:8080/files/");

        let host_only = BaseUrl::parse("http://127.0.0.1:1234").unwrap();
        assert_eq!(
            host_only.join(&ResolvedPath::from("a.txt")),
            "http://127.0.0.1:1234/a.txt"
        );
    }

    #[test]
    fn test_rejects_bad_bases() {
        assert!(matches!(
            BaseUrl::parse("not a url"),
            Err(FetchError::InvalidUrl(_))
        ));
        assert!(matches!(
            BaseUrl::parse("ftp://example.com/"),
            Err(FetchError::InvalidUrl(_))
        ));
        assert!(matches!(
            BaseUrl::parse("https://example.com/?v=1"),
            Err(FetchError::InvalidUrl(_))
        ));
    }
}
