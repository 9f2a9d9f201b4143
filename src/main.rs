fn main() {
    if let Err(err) = intellicourse::cli::main() {
        eprintln!("❌ Error: {err}");
        std::process::exit(1);
    }
}
