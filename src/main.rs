//! pedidose main entrypoint.

use pedidose::run;
use pedidose::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
