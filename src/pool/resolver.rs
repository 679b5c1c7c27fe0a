//! Pool resolver trait for deciding whether two artifacts share an origin

#[cfg(test)]
use mockall::automock;

/// Trait for deriving the pool an artifact was listed from
#[cfg_attr(test, automock)]
pub trait PoolResolver: Send + Sync {
    /// Returns the pool identity of an artifact
    fn pool_of(&self, artifact: &str) -> String;

    /// Whether both artifacts come from the same pool
    ///
    /// Default implementation compares [`PoolResolver::pool_of`].
    fn same_pool(&self, a: &str, b: &str) -> bool {
        self.pool_of(a) == self.pool_of(b)
    }
}

/// Pool resolver keyed by URL host
///
/// - `http://security.debian.org/debian-security/pool/...` -> `security.debian.org`
/// - `http://user@mirror:8080/pool/...` -> `mirror:8080`
/// - `/local/path/pkg.deb` -> `""` (every bare path shares one pool)
#[derive(Debug, Default, Clone, Copy)]
pub struct HostPoolResolver;

impl PoolResolver for HostPoolResolver {
    fn pool_of(&self, artifact: &str) -> String {
        url_host(artifact).to_string()
    }
}

fn url_host(artifact: &str) -> &str {
    let Some((_, rest)) = artifact.split_once("://") else {
        return "";
    };

    let authority = rest
        .split(|c: char| matches!(c, '/' | '?' | '#'))
        .next()
        .unwrap_or_default();

    authority
        .rsplit_once('@')
        .map_or(authority, |(_, host)| host)
}
