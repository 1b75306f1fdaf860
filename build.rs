//! Bundles `assets/css/*.css` into `assets/dist/bundle.css`.

use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
};
use std::fs;
use std::path::Path;

const ENTRY: &str = "assets/css/main.css";
const OUTPUT_DIR: &str = "assets/dist";
const OUTPUT: &str = "assets/dist/bundle.css";

fn bundle(entry: &Path) -> Result<String, String> {
    let provider = FileProvider::new();
    let mut bundler = Bundler::new(&provider, None, ParserOptions::default());

    let mut stylesheet = bundler
        .bundle(entry)
        .map_err(|e| format!("bundle {}: {}", entry.display(), e))?;

    stylesheet
        .minify(MinifyOptions::default())
        .map_err(|e| format!("minify: {}", e))?;

    let css = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .map_err(|e| format!("print: {}", e))?;

    Ok(css.code)
}

fn main() {
    println!("cargo:rerun-if-changed=assets/css/");

    let css = bundle(Path::new(ENTRY)).unwrap_or_else(|e| panic!("CSS bundling failed: {}", e));

    fs::create_dir_all(OUTPUT_DIR).unwrap_or_else(|e| panic!("create {}: {}", OUTPUT_DIR, e));
    fs::write(OUTPUT, css).unwrap_or_else(|e| panic!("write {}: {}", OUTPUT, e));
}
