use std::env;

pub fn insta_snapshot<F: FnOnce()>(f: F) {
    let mut settings = insta::Settings::clone_current();
    let snapshot_path = env::current_dir().unwrap().join("./test/snapshots");
    settings.set_snapshot_path(snapshot_path);
    settings.bind(f);
}

/// A multi-sentence article long enough to pass the summarization minimum.
pub fn article_fixture() -> &'static str {
    return r#"
Rust is a systems programming language focused on safety. The compiler checks ownership and borrowing at compile time. Many developers enjoy the weather on weekends! Ownership rules let Rust manage memory without a garbage collector. Borrowing lets code use values without taking ownership. Is the coffee machine broken again? The Rust compiler rejects programs that break ownership or borrowing rules.
"#
    .trim();
}

/// Raw body returned by the remote translation endpoint for a two segment
/// translation, including a trailing metadata row.
pub fn remote_translation_fixture() -> &'static str {
    return r#"[[["Hello ","Bonjour ",null,null,10],["world","le monde",null,null,10]],null,"fr",null,null,null,1.0,[],[["fr"],null,[1.0],["fr"]]]"#;
}
