mod catalog;
mod products;


pub use catalog::{routine_for, Routine, RoutineLevel};
pub use products::{products_for, Product, RoutineStepKind};
