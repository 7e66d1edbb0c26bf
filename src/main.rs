fn main() {
    if let Err(err) = raffle::cli::run() {
        println!("ERR: {err:#}");
        std::process::exit(1);
    }
}
