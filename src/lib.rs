// Library for tests to access modules

pub mod config;
pub mod display;
pub mod facts;
pub mod layout;
pub mod models;
pub mod version;
pub mod worker;
