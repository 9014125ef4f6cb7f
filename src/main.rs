fn main() {
    webrelay_setup::run_cli();
}
