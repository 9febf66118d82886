// Library for tests to access modules

pub mod bus;
pub mod config;
pub mod dispatcher;
pub mod event;
pub mod metrics;
pub mod models;
pub mod sampler;
pub mod signals;
pub mod store;
