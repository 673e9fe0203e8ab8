//! License notice printed when soxnoise starts and again when it exits.

const LICENSE_URL: &str = "https://opensource.org/license/mit";

pub fn lines() -> [String; 3] {
    [
        format!(
            "soxnoise version {}, Copyright (C) the soxnoise contributors",
            env!("CARGO_PKG_VERSION")
        ),
        format!("soxnoise comes with ABSOLUTELY NO WARRANTY; for details see {LICENSE_URL}"),
        "This is free software, and you are welcome to redistribute it under certain conditions."
            .to_string(),
    ]
}

pub fn print() {
    for line in lines() {
        println!("{line}");
    }
}

#[cfg(test)]
#[path = "tests/banner_tests.rs"]
mod tests;
