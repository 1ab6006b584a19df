//! ABQ data entry main entrypoint.

use abq_data_entry::run;
use abq_data_entry::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
