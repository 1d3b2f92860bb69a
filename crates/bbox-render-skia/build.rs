// File: crates/bbox-render-skia/build.rs
// Summary: Build script to link required Windows system libraries for Skia.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Skia's font manager calls RegOpenKeyExW and friends.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
