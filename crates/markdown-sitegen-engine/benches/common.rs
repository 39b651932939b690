// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, _italic_ and `code`.\n\n- Bullet point\n- Another [item](/item)\n\n1. first\n2. second\n\n> quoted\n> text\n\n```\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_complex_markdown(sections: usize) -> String {
    let mut content = String::new();

    for section in 0..sections {
        content.push_str(&format!("# Section {section}\n\n"));
        for level in 2..=6 {
            let header_prefix = "#".repeat(level);
            content.push_str(&format!("{header_prefix} Subsection Level {level}\n\n"));
            content.push_str("Some paragraph content with **multiple** sentences. This helps create *realistic* document structure for benchmarking, with ![an image](/img.png) and [a link](https://example.com).\n\n");
            for i in 1..=3 {
                content.push_str(&format!("{i}. Item {i} at level {level}\n"));
            }
            content.push('\n');
        }
    }

    content
}
