//! Request parameters of the dashboard endpoints.
//!
//! Each type validates a parsed body in the order the checks are observable to clients:
//! presence of every required field first, then the type of each field.

use crate::server::{
    error::dashboard::DashboardError,
    model::{guild_config::GuildConfigPatchParam, session::SessionUserParam},
    util::params::{self, Body},
};

pub struct ListServersParam {
    pub servers: Vec<String>,
}

impl ListServersParam {
    pub fn from_body(body: &Body) -> Result<Self, DashboardError> {
        Ok(Self {
            servers: params::required_string_list(body, "servers")?,
        })
    }
}

pub struct ServerInfoParam {
    pub server: String,
    pub user: SessionUserParam,
}

impl ServerInfoParam {
    pub fn from_body(body: &Body) -> Result<Self, DashboardError> {
        params::required(body, "server")?;
        params::required(body, "user")?;

        let server = params::required_string(body, "server")?;
        let user = session_user(body)?;

        Ok(Self { server, user })
    }
}

pub struct SaveChangesParam {
    pub user: SessionUserParam,
    pub server: String,
    pub patch: GuildConfigPatchParam,
}

impl SaveChangesParam {
    pub fn from_body(body: &Body) -> Result<Self, DashboardError> {
        params::required(body, "user")?;
        let config = params::required(body, "config")?;
        params::required(body, "server")?;

        let user = session_user(body)?;
        let server = params::required_string(body, "server")?;
        let patch = GuildConfigPatchParam::from_value(config)?;

        Ok(Self {
            user,
            server,
            patch,
        })
    }
}

pub struct SearchParam {
    pub query: String,
    pub server: String,
    pub user: SessionUserParam,
}

impl SearchParam {
    pub fn from_body(body: &Body) -> Result<Self, DashboardError> {
        params::required(body, "query")?;
        params::required(body, "server")?;
        params::required(body, "user")?;

        let query = params::required_string(body, "query")?;
        if query.trim().is_empty() {
            return Err(DashboardError::MissingParam("query"));
        }

        Ok(Self {
            query,
            server: params::required_string(body, "server")?,
            user: session_user(body)?,
        })
    }
}

pub struct ResolveUsersParam {
    pub users: Vec<String>,
    pub server: String,
    pub user: SessionUserParam,
}

impl ResolveUsersParam {
    pub fn from_body(body: &Body) -> Result<Self, DashboardError> {
        params::required(body, "users")?;
        params::required(body, "server")?;
        params::required(body, "user")?;

        Ok(Self {
            users: params::required_string_list(body, "users")?,
            server: params::required_string(body, "server")?,
            user: session_user(body)?,
        })
    }
}

/// Reads the grouped `user: {id, sessionID}` object. A bare user ID string is rejected.
fn session_user(body: &Body) -> Result<SessionUserParam, DashboardError> {
    let user = params::required_object(body, "user")?;

    let user_id = match params::required(user, "id") {
        Err(_) => return Err(DashboardError::MissingParam("user.id")),
        Ok(value) => params::as_string(value, "user.id")?,
    };
    let session_id = match params::required(user, "sessionID") {
        Err(_) => return Err(DashboardError::MissingParam("user.sessionID")),
        Ok(value) => params::as_string(value, "user.sessionID")?,
    };

    Ok(SessionUserParam {
        user_id,
        session_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::api::Sentinel;
    use serde_json::{json, Value};

    fn body(value: Value) -> Body {
        match value {
            Value::Object(map) => map,
            _ => panic!("test body must be an object"),
        }
    }

    fn user() -> Value {
        json!({ "id": "42", "sessionID": "abc" })
    }

    #[test]
    fn info_requires_server_and_user() {
        let cases = [
            json!({ "user": user() }),
            json!({ "server": "1" }),
            json!({ "server": "", "user": user() }),
            json!({ "server": "1", "user": null }),
            json!({ "server": "1", "user": { "id": "42" } }),
        ];

        for case in cases {
            let err = ServerInfoParam::from_body(&body(case.clone())).err().unwrap();
            assert_eq!(err.sentinel(), Sentinel::MissingParams, "{}", case);
        }
    }

    #[test]
    fn info_checks_types() {
        let cases = [
            json!({ "server": 1, "user": user() }),
            json!({ "server": "1", "user": "42" }),
            json!({ "server": "1", "user": { "id": 42, "sessionID": "abc" } }),
        ];

        for case in cases {
            let err = ServerInfoParam::from_body(&body(case.clone())).err().unwrap();
            assert_eq!(err.sentinel(), Sentinel::InvalidParams, "{}", case);
        }
    }

    #[test]
    fn missing_fields_win_over_wrong_types() {
        let err = SaveChangesParam::from_body(&body(json!({ "user": "42", "config": {} })))
            .err()
            .unwrap();

        assert_eq!(err.sentinel(), Sentinel::MissingParams);
    }

    #[test]
    fn save_changes_rejects_flat_user() {
        let err = SaveChangesParam::from_body(&body(json!({
            "user": "42",
            "config": { "Prefix": "?" },
            "server": "1",
        })))
        .err()
        .unwrap();

        assert_eq!(err.sentinel(), Sentinel::InvalidParams);
    }

    #[test]
    fn save_changes_reads_patch() {
        let param = SaveChangesParam::from_body(&body(json!({
            "user": user(),
            "config": { "Prefix": "?" },
            "server": "1",
        })))
        .unwrap();

        assert_eq!(param.user.user_id, "42");
        assert_eq!(param.user.session_id, "abc");
        assert_eq!(param.server, "1");
        assert_eq!(param.patch.prefix.as_deref(), Some("?"));
    }

    #[test]
    fn search_requires_query() {
        let err = SearchParam::from_body(&body(json!({
            "query": "  ",
            "server": "1",
            "user": user(),
        })))
        .err()
        .unwrap();

        assert_eq!(err.sentinel(), Sentinel::MissingParams);
    }

    #[test]
    fn list_reads_servers() {
        let param = ListServersParam::from_body(&body(json!({ "servers": ["1", "2"] }))).unwrap();
        assert_eq!(param.servers, vec!["1", "2"]);

        let err = ListServersParam::from_body(&body(json!({ "servers": "1" })))
            .err()
            .unwrap();
        assert_eq!(err.sentinel(), Sentinel::InvalidParams);
    }
}
