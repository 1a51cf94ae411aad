fn main() {
    uniqueq::app::startup::startup();
}
