//! Session role, derived once from the page's query string.

use protocol::InitRequest;
use web_sys::UrlSearchParams;

use crate::error::ClientResult;

/// The query parameters the client reads at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pub join: Option<String>,
    pub watch: Option<String>,
    pub join_id: Option<String>,
}

impl QueryParams {
    /// Read from `location.search`.
    pub fn from_search(search: &str) -> ClientResult<Self> {
        let params = UrlSearchParams::new_with_str(search)?;
        Ok(Self {
            join: params.get("join"),
            watch: params.get("watch"),
            join_id: params.get("joinID"),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    /// Starts a new game, optionally under a chosen join key.
    Host { join_id: Option<String> },
    /// Joins the game behind a join key.
    Joiner { join: String, watch: Option<String> },
    /// Watches the game behind a watch key. Never sends moves.
    Spectator { watch: String },
}

impl Role {
    /// `join` wins over `watch`; with neither the page hosts a new game.
    pub fn from_query(params: &QueryParams) -> Self {
        match (&params.join, &params.watch) {
            (Some(join), watch) => Role::Joiner {
                join: join.clone(),
                watch: watch.clone(),
            },
            (None, Some(watch)) => Role::Spectator {
                watch: watch.clone(),
            },
            (None, None) => Role::Host {
                join_id: params.join_id.clone(),
            },
        }
    }

    pub fn is_spectator(&self) -> bool {
        matches!(self, Role::Spectator { .. })
    }

    /// Body of the `init` event announcing this role.
    pub fn init_request(&self) -> InitRequest {
        match self {
            Role::Host { join_id } => InitRequest::Host {
                join_id: join_id.clone(),
            },
            Role::Joiner { join, watch } => InitRequest::Join {
                join: join.clone(),
                watch: watch.clone(),
            },
            Role::Spectator { watch } => InitRequest::Watch {
                watch: watch.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(join: Option<&str>, watch: Option<&str>, join_id: Option<&str>) -> QueryParams {
        QueryParams {
            join: join.map(str::to_string),
            watch: watch.map(str::to_string),
            join_id: join_id.map(str::to_string),
        }
    }

    #[test]
    fn test_no_params_hosts() {
        let role = Role::from_query(&QueryParams::default());
        assert_eq!(role, Role::Host { join_id: None });
        assert!(!role.is_spectator());
    }

    #[test]
    fn test_join_id_hosts_under_key() {
        let role = Role::from_query(&params(None, None, Some("lobby")));
        assert_eq!(
            role.init_request(),
            InitRequest::Host {
                join_id: Some("lobby".to_string())
            }
        );
    }

    #[test]
    fn test_join_takes_precedence_and_forwards_watch() {
        let role = Role::from_query(&params(Some("42"), Some("7"), Some("ignored")));
        assert_eq!(
            role,
            Role::Joiner {
                join: "42".to_string(),
                watch: Some("7".to_string())
            }
        );
    }

    #[test]
    fn test_watch_spectates() {
        let role = Role::from_query(&params(None, Some("7"), None));
        assert!(role.is_spectator());
        assert_eq!(
            role.init_request(),
            InitRequest::Watch {
                watch: "7".to_string()
            }
        );
    }
}
