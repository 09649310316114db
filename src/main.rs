fn main() {
    if let Err(err) = activity_rollup::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
