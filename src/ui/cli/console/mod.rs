mod front_end;
mod render;

pub use front_end::run;
pub use render::{history_table, progress_line, seed_line};
