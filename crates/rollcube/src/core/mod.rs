pub mod controller;
pub mod time;
