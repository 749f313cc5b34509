use shadow_rs::ShadowBuilder;

fn main() {
    // Emits the build metadata behind `--version` (git commit, rustc, build time)
    ShadowBuilder::builder()
        .build()
        .expect("Failed to generate build metadata");
}
