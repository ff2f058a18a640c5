pub mod bootstrap;
pub mod form;
pub mod session;
