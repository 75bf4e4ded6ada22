pub mod admin;
pub mod auth;
pub mod entries;
pub mod props;
pub mod sheet;
pub mod site;
pub mod standings;
