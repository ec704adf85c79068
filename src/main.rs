fn main() {
    pkgrm::run_cli();
}
