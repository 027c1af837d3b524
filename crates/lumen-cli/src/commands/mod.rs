pub mod check;
pub mod completion;
pub mod rules;
