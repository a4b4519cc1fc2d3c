use serde::Deserialize;
use std::env;
use std::error::Error;
use std::fs::{read_to_string, write};
use std::path::PathBuf;

fn main() {
    _main().unwrap();
}

#[derive(Deserialize)]
struct CargoManifest<'a> {
    #[serde(borrow = "'a")]
    package: Package<'a>,
}

#[derive(Deserialize)]
struct Package<'a> {
    version: &'a str,
}

fn _main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-changed=resources/welcome.txt");
    println!("cargo:rerun-if-changed=Cargo.toml");

    let banner = read_to_string("resources/welcome.txt")?;
    let manifest = read_to_string("Cargo.toml")?;
    let manifest: CargoManifest = toml::from_str(&manifest)?;

    let out_dir = env::var_os("OUT_DIR").ok_or("OUT_DIR not set")?;
    let mut path = PathBuf::from(out_dir);
    path.push("welcome_info");

    write(
        path,
        banner
            .trim_end()
            .replace("${{version}}", manifest.package.version),
    )?;

    Ok(())
}
