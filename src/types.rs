use serde::{Deserialize, Serialize};

/// One repository object as returned by the GitHub listing endpoint.
/// Only the fields we extract are modeled; everything else is ignored.
#[derive(Debug, Deserialize)]
pub struct ApiRepo {
    pub name: Option<String>,
    pub description: Option<String>,
    pub stargazers_count: Option<u32>,
    pub language: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// The record persisted for each repository. Fields are passed through
/// verbatim from the API response; absent fields serialize as null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoSummary {
    pub name: Option<String>,
    pub description: Option<String>,
    pub stars: Option<u32>,
    pub language: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<ApiRepo> for RepoSummary {
    fn from(repo: ApiRepo) -> Self {
        RepoSummary {
            name: repo.name,
            description: repo.description,
            stars: repo.stargazers_count,
            language: repo.language,
            created_at: repo.created_at,
            updated_at: repo.updated_at,
        }
    }
}
