// SeqChamber CLI Entry Point

use seqchamber_cli::{output, router::CommandRouter};

fn main() {
    match CommandRouter::route() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            output::print_error(&e.user_message());
            std::process::exit(1);
        }
    }
}
