fn main() {
    if let Err(err) = binget::cli::run() {
        binget::ui::error(&format!("{err:#}"));
        std::process::exit(1);
    }
}
