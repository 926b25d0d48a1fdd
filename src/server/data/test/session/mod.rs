use crate::server::{
    data::session::DashboardSessionRepository, error::AppError, model::session::SessionUserParam,
};
use test_utils::{builder::TestBuilder, factory, fixture};

mod find;
