use std::process::Command;

/// Run `git rev-parse <args> HEAD`, falling back to "unknown" outside a checkout.
fn git_rev(args: &[&str]) -> String {
    Command::new("git")
        .arg("rev-parse")
        .args(args)
        .arg("HEAD")
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|hash| hash.trim().to_string())
        .filter(|hash| !hash.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

fn main() {
    // short hash goes into the version string, full hash into debug reports
    println!("cargo:rustc-env=GIT_HASH={}", git_rev(&["--short"]));
    println!("cargo:rustc-env=GIT_HASH_FULL={}", git_rev(&[]));

    // rerun build script if git HEAD changes
    println!("cargo:rerun-if-changed=.git/HEAD");
}
