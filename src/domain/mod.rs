pub mod book;
pub mod customer;
pub mod errors;
pub mod item;
pub mod movie;
pub mod value_objects;

pub use book::Book;
pub use customer::Customer;
pub use errors::*;
pub use item::*;
pub use movie::Movie;
pub use value_objects::*;
