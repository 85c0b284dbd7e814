use std::env;
use std::fs;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    // Necessary for ESP-IDF
    embuild::espidf::sysenv::output();
    
    // Add crash log helper for better panic diagnostics
    println!("cargo:rustc-link-arg=-Wl,--undefined=esp_backtrace_print_app_description");
    
    // Wiring description for the attached display, embedded into the firmware
    let setup_path = "tft_setup.json";
    let out_dir = env::var("OUT_DIR")?;
    let embedded = Path::new(&out_dir).join("tft_setup.json");
    println!("cargo:rerun-if-changed={}", setup_path);
    
    if Path::new(setup_path).exists() {
        fs::copy(setup_path, &embedded)?;
    } else {
        // Empty object deserializes to the default descriptor
        fs::write(&embedded, "{}")?;
        println!("cargo:warning=tft_setup.json not found! Copy tft_setup.json.example to tft_setup.json and describe your wiring.");
    }
    
    Ok(())
}
