use std::env;
use std::fs;
use std::path::Path;

/// Places the workspace `config.toml` next to the built gateway binary
fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let (Ok(out_dir), Ok(profile)) = (env::var("OUT_DIR"), env::var("PROFILE")) else {
        return;
    };

    // OUT_DIR looks like target/<profile>/build/gateway-xxx/out
    let out_path = Path::new(&out_dir);
    let Some(target_dir) = out_path.ancestors().find(|p| p.ends_with(&profile)) else {
        println!("cargo:warning=target/{} not found, config.toml not copied", profile);
        return;
    };

    let Some(workspace_root) = Path::new(env!("CARGO_MANIFEST_DIR")).ancestors().nth(2) else {
        return;
    };
    let source_config = workspace_root.join("config.toml");
    if !source_config.exists() {
        println!("cargo:warning=config.toml not found at {:?}, using default config", source_config);
        return;
    }

    let dest_config = target_dir.join("config.toml");
    match fs::copy(&source_config, &dest_config) {
        Ok(_) => println!("cargo:warning=Copied config.toml to {:?}", dest_config),
        Err(e) => println!("cargo:warning=Failed to copy config.toml: {}", e),
    }
}
