//! Binary entry point for the WASM bundle.

fn main() {
    savvy_blog_frontend::start();
}
