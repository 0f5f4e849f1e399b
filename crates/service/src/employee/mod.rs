pub mod repository;
pub mod seed;

pub use repository::{EmployeeRepository, SeaOrmEmployeeRepository};
