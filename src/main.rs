fn main() {
    maxgpt::app::cli::run();
}
