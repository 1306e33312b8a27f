use std::{env, fs, io::Result, path::Path};

use clap_complete::{generate_to, shells::Shell};

include!("src/options/args.rs");

fn create_dir(dir: &Path) -> Result<()> {
    let res = fs::create_dir_all(dir);
    if let Err(err) = &res {
        eprintln!("Failed to create a directory at location {dir:?}, encountered error {err:?}. Aborting...");
    }

    res
}

fn main() -> Result<()> {
    const COMPLETION_DIR: &str = "./target/tmp/memq/completion/";
    const MANPAGE_DIR: &str = "./target/tmp/memq/manpage/";

    match env::var_os("MEMQ_GENERATE") {
        Some(var) if !var.is_empty() => {
            let completion_out_dir = PathBuf::from(COMPLETION_DIR);
            let manpage_out_dir = PathBuf::from(MANPAGE_DIR);

            create_dir(&completion_out_dir)?;
            create_dir(&manpage_out_dir)?;

            // Generate completions
            let mut cmd = build_cmd();
            generate_to(Shell::Bash, &mut cmd, "memq", &completion_out_dir)?;
            generate_to(Shell::Zsh, &mut cmd, "memq", &completion_out_dir)?;
            generate_to(Shell::Fish, &mut cmd, "memq", &completion_out_dir)?;
            generate_to(Shell::PowerShell, &mut cmd, "memq", &completion_out_dir)?;
            generate_to(Shell::Elvish, &mut cmd, "memq", &completion_out_dir)?;

            // Generate manpage
            let man = clap_mangen::Man::new(cmd);
            let mut buffer: Vec<u8> = Default::default();
            man.render(&mut buffer)?;
            fs::write(manpage_out_dir.join("memq.1"), buffer)?;
        }
        _ => {}
    }

    println!("cargo:rerun-if-env-changed=MEMQ_GENERATE");

    Ok(())
}
