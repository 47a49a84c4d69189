pub mod employee;
pub mod roster;

pub use employee::{Developer, Employee, Manager, Role, SalaryComputable, StaffMember};
pub use roster::Payroll;
