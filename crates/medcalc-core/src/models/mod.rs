pub mod category;
pub mod descriptor;
pub mod field;
pub mod outcome;
pub mod value;
