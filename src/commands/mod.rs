pub mod dispatch;
pub mod print;
pub mod query;
pub mod route;
