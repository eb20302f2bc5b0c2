//! prodmetrics main entrypoint.

use prodmetrics::run;
use prodmetrics::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
