pub mod route;
pub mod table;
pub mod traverse;
