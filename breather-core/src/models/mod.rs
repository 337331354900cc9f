pub mod quote;
pub mod track;
