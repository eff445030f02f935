// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_tex_content(size: usize) -> String {
    let base = "\\section{Title}\n\nParagraph with \\emph{some} content. % remark\n\n\\begin{itemize}\n  \\item First\n  \\item[*] Second\n\\end{itemize}\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_nested_environments(depth: usize) -> String {
    let mut content = String::new();
    for level in 0..depth {
        content.push_str(&format!("\\begin{{level{level}}}\n\\label{{l{level}}}\n"));
    }
    content.push_str("innermost text\n");
    for level in (0..depth).rev() {
        content.push_str(&format!("\\end{{level{level}}}\n"));
    }
    content
}
