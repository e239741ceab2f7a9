pub mod department;
pub mod dob;
pub mod employee;
