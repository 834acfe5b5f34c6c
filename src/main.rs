fn main() {
    label_tracker::app::cli::run();
}
