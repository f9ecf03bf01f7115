pub mod console;
pub mod drivers;
