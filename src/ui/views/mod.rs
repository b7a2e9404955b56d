pub mod dates;
pub mod pick;
