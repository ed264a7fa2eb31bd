fn main() {
    folio::start();
}
