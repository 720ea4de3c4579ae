// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_tsv(lines: usize, fields: usize) -> String {
    let mut content = String::new();
    for line in 0..lines {
        let row: Vec<String> = (0..fields).map(|f| format!("r{line}c{f}")).collect();
        content.push_str(&row.join("\t"));
        content.push('\n');
    }
    content
}

#[allow(dead_code)]
pub fn generate_list(items: usize) -> String {
    (0..items)
        .map(|i| match i % 3 {
            0 => format!("{}", i * 2 + 1),
            1 => format!("{}-{}", i * 2, i * 2 + 3),
            _ => format!("-{}", i + 1),
        })
        .collect::<Vec<_>>()
        .join(",")
}
