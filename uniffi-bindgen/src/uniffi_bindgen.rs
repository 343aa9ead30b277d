//! Generates the Swift and Kotlin bindings for `scanbridge`.

fn main() {
    uniffi::uniffi_bindgen_main();
}
