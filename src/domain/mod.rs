pub mod container;
pub mod driver;
pub mod order;
pub mod role;
pub mod salary_formula;
pub mod types;
pub mod vehicle;
