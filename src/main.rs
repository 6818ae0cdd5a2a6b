fn main() {
    pipelaunch::app::cli::run();
}
