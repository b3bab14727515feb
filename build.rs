fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/");

    let git = |args: &[&str]| {
        std::process::Command::new("git")
            .args(args)
            .output()
            .ok()
            .filter(|o| o.status.success())
    };

    let hash = git(&["rev-parse", "--short", "HEAD"])
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
        .unwrap_or_default();
    let tagged = git(&["describe", "--exact-match", "--tags", "HEAD"]).is_some();

    // Release builds report the crate version; anything else reports the commit.
    let version = match (tagged, hash.is_empty()) {
        (true, _) => env!("CARGO_PKG_VERSION").to_string(),
        (false, true) => "dev@unknown".to_string(),
        (false, false) => format!("dev@{hash}"),
    };
    println!("cargo:rustc-env=STOREFRONT_VERSION={version}");
}
