use std::io;

fn main() {
    riffle_cli::logging::init_logging();
    let code = riffle_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
