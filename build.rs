include!("src/cli.rs");

fn main() -> Result<(), std::io::Error> {
    println!("cargo:rerun-if-changed=src/cli.rs");
    if std::env::var("DOCS_RS").is_err() {
        let outdir = match std::env::var_os("CARGO_MANIFEST_DIR") {
            None => return Ok(()),
            Some(root) => std::path::Path::new(&root).join("completions"),
        };
        std::fs::create_dir_all(&outdir)?;

        let generators = [
            ("gen-keyword-map", build_keyword_cli()),
            ("gen-opcode-map", build_opcode_cli()),
        ];
        for (name, mut cmd) in generators {
            for &shell in <clap_complete::Shell as clap::ValueEnum>::value_variants() {
                clap_complete::generate_to(shell, &mut cmd, name, &outdir)?;
            }
        }
    }

    Ok(())
}
