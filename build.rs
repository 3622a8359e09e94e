#[cfg(target_os = "windows")]
fn main() {
    use winresource::WindowsResource;

    // res/rsportmeet.ico must exist for release builds
    let mut res = WindowsResource::new();
    res.set_icon("res/rsportmeet.ico")
        .set("FileDescription", "rsportmeet CLI")
        .set("ProductName", "rsportmeet")
        .set("OriginalFilename", "rsportmeet.exe")
        .set("FileVersion", env!("CARGO_PKG_VERSION"))
        .set("ProductVersion", env!("CARGO_PKG_VERSION"))
        .compile()
        .expect("Failed to embed icon resource");
}

#[cfg(not(target_os = "windows"))]
fn main() {}
