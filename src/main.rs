fn main() {
    ngxconf::app::cli::run();
}
