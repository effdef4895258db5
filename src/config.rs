/// Fixed API settings for the petitions endpoint.
use crate::signatures::PetitionListId;

/// Root of the petitions API. The list id is appended as `list{id}`.
pub const DEFAULT_API_ROOT: &str = "https://petitions.moveon.org/api/v1/petitions";

/// User agent sent with every request.
pub const USER_AGENT: &str = "MoveOn Petition Signature Name Fetcher";

/// Records requested per page.
///
/// The API returns unpredictable results for `per_page` values above 10.
pub const PER_PAGE: u64 = 10;

/// Endpoint settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// API root without a trailing slash.
    pub api_root: String,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
    /// Records per page request.
    pub per_page: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_root: DEFAULT_API_ROOT.to_owned(),
            user_agent: USER_AGENT.to_owned(),
            per_page: PER_PAGE,
        }
    }
}

impl ApiConfig {
    /// Use a different API root, keeping the other defaults.
    #[cfg(test)]
    #[must_use]
    pub fn with_api_root(api_root: &str) -> Self {
        Self {
            api_root: api_root.trim_end_matches('/').to_owned(),
            ..Self::default()
        }
    }

    /// Base signatures endpoint for a list, e.g.
    /// `https://petitions.moveon.org/api/v1/petitions/list12345/signatures.json`.
    #[must_use]
    pub fn signatures_url(&self, list_id: PetitionListId) -> String {
        format!("{}/list{}/signatures.json", self.api_root, list_id)
    }

    /// Number of page requests needed to cover `count` signatures.
    #[must_use]
    pub fn page_count(&self, count: u64) -> u64 {
        count.div_ceil(self.per_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signatures_url() {
        let config = ApiConfig::default();
        let id = PetitionListId::parse(Some("12345")).unwrap();
        assert_eq!(
            config.signatures_url(id),
            "https://petitions.moveon.org/api/v1/petitions/list12345/signatures.json"
        );
    }

    #[test]
    fn test_with_api_root_trims_trailing_slash() {
        let config = ApiConfig::with_api_root("http://localhost:8080/api/");
        assert_eq!(config.api_root, "http://localhost:8080/api");
        assert_eq!(config.per_page, PER_PAGE);
        assert_eq!(config.user_agent, USER_AGENT);
    }

    #[test]
    fn test_page_count_rounds_up() {
        let config = ApiConfig::default();
        assert_eq!(config.page_count(1), 1);
        assert_eq!(config.page_count(10), 1);
        assert_eq!(config.page_count(11), 2);
        assert_eq!(config.page_count(15), 2);
        assert_eq!(config.page_count(100), 10);
    }
}
