fn main() {
    if let Err(err) = layerpos::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
