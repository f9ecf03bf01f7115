use coinlab::ui::cli::console;
use coinlab::ui::cli::drivers::InquireDriver;

fn main() -> anyhow::Result<()> {
    console::run(&InquireDriver)
}
