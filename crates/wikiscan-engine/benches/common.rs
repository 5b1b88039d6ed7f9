// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_entry(languages: usize) -> String {
    let mut content = String::from("{{also|Cat}}\n");

    for lang in 0..languages {
        content.push_str(&format!("==Language {lang}==\n"));
        content.push_str("===Etymology===\nFrom {{inh|xx|yy|cat}}.<!-- {{rfe}} -->\n\n");
        content.push_str("===Noun===\n{{xx-noun|head=[[cat|Cat]]|pl=cats}}\n\n");
        content.push_str("# A [[domestic]] [[Felis catus|feline]]. {{q|{{w|informal}}}}\n");
        content.push_str("====Synonyms====\n* {{l|xx|moggy}}, {{l|xx|<nowiki>[[puss]]</nowiki>}}\n\n");
    }

    content
}

#[allow(dead_code)]
pub fn generate_nested_template(depth: usize) -> String {
    let mut content = String::new();
    for i in 0..depth {
        content.push_str(&format!("{{{{t{i}|[[a|b]]|k{i}="));
    }
    content.push('x');
    for _ in 0..depth {
        content.push_str("}}");
    }
    content
}
