// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n#journal/2024\n\n## Section\n\nParagraph with *some* **formatted** content and a [link](https://example.com).\n\n- Bullet point\n  - Indented item\n- Another item\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_long_paragraphs(count: usize) -> String {
    let mut content = String::new();
    for i in 0..count {
        content.push_str(&format!(
            "Paragraph {i} mixes __strong__, _soft_, *stars* and snake_case_words with an unclosed ** marker.\n\n"
        ));
    }
    content
}
