use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use clap::CommandFactory;

// cli.rs only needs clap and clap_complete, both build-dependencies.
#[path = "src/cli.rs"]
mod cli;

fn main() {
    println!("cargo::rerun-if-changed=src/cli.rs");

    let out_dir: PathBuf = std::env::var_os("OUT_DIR")
        .expect("OUT_DIR is set by Cargo")
        .into();
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).expect("man output directory can be created");

    let mut pages = Vec::new();
    render_pages(&cli::Cli::command(), &man_dir, &mut pages);

    // `homedash man` embeds every page through this table.
    let mut table = String::from("pub const PAGES: &[(&str, &str)] = &[\n");
    for (name, path) in &pages {
        let _ = writeln!(
            table,
            "    ({name:?}, include_str!({:?})),",
            path.display().to_string()
        );
    }
    table.push_str("];\n");
    fs::write(out_dir.join("man_pages.rs"), table).expect("man page table can be written");
}

/// One roff page per visible command, named `homedash-<cmd>-<subcmd>.1`.
fn render_pages(cmd: &clap::Command, dir: &Path, pages: &mut Vec<(String, PathBuf)>) {
    let name = cmd.get_name().to_owned();
    let path = dir.join(format!("{name}.1"));

    let mut roff = Vec::new();
    clap_mangen::Man::new(cmd.clone())
        .render(&mut roff)
        .unwrap_or_else(|e| panic!("rendering man page `{name}`: {e}"));
    fs::write(&path, roff).unwrap_or_else(|e| panic!("writing {}: {e}", path.display()));
    pages.push((name.clone(), path));

    for sub in cmd.get_subcommands().filter(|sub| !sub.is_hide_set()) {
        let sub = sub.clone().name(format!("{name}-{}", sub.get_name()));
        render_pages(&sub, dir, pages);
    }
}
