pub mod catalog;
pub mod controller;
pub mod search;
pub mod source;
