use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::server::SessionUserDto;

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct SearchRequestDto {
    pub query: String,
    pub server: String,
    pub user: SessionUserDto,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ResolveUsersRequestDto {
    pub users: Vec<String>,
    pub server: String,
    pub user: SessionUserDto,
}

/// One entry of a selector's option list.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct SelectOptionDto {
    pub value: String,
    pub label: String,
}
