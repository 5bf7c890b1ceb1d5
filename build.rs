use std::{env, fs, path::PathBuf};

fn main() {
    // 1) Handle memory.x based on target
    let target = env::var("TARGET").unwrap();
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    if target.starts_with("thumbv6m") {
        // Pico 1: copy our memory-pico1.x to OUT_DIR as memory.x
        let memory_x =
            fs::read_to_string("memory-pico1.x").expect("Failed to read memory-pico1.x");
        let dest = out_dir.join("memory.x");
        fs::write(&dest, memory_x).expect("Failed to write memory.x");
        println!("cargo:rustc-link-search={}", out_dir.display());
        println!("cargo:rerun-if-changed=memory-pico1.x");
    }

    // 2) Load optional env files
    let _ = dotenvy::from_filename(".env");
    load_home_env(".pico.env");
    load_home_env(".env");

    // 3) Power-up date and time, with the factory defaults as fallback
    let start_date = env_or_default("CLOCK_START_DATE", "2025-01-01");
    let start_time = env_or_default("CLOCK_START_TIME", "12:00:00");

    // 4) Expose as compile-time constants
    println!("cargo:rustc-env=CLOCK_START_DATE={start_date}");
    println!("cargo:rustc-env=CLOCK_START_TIME={start_time}");

    println!("cargo:rerun-if-env-changed=CLOCK_START_DATE");
    println!("cargo:rerun-if-env-changed=CLOCK_START_TIME");
    println!("cargo:rerun-if-changed=.env");
}

fn load_home_env(file: &str) {
    let home = match env::var_os("USERPROFILE").or_else(|| env::var_os("HOME")) {
        Some(path) => PathBuf::from(path),
        None => return,
    };
    let path = home.join(file);
    let _ = dotenvy::from_path(&path);
}

fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
