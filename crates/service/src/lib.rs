//! Service layer on top of `models`: the repository boundary the HTTP
//! handlers program against, plus startup seeding.

pub mod employee;
pub mod errors;
