//! Transform composition walkthrough
//!
//! Builds a model transform from a scale and a translation, inverts it,
//! and shows the identity fallback for a singular matrix.
//!
//! Run with:
//! ```bash
//! cargo run -p wml-math --example compose
//! RUST_LOG=warn cargo run -p wml-math --example compose
//! ```

use wml_math::{Matrix4, Vector3};

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let scale = Matrix4::from_rows([
        [2.0, 0.0, 0.0, 0.0],
        [0.0, 2.0, 0.0, 0.0],
        [0.0, 0.0, 2.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);
    let translate = Matrix4::from_rows([
        [1.0, 0.0, 0.0, 3.0],
        [0.0, 1.0, 0.0, -1.0],
        [0.0, 0.0, 1.0, 0.5],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    // Scale first, then translate
    let model = Matrix4::multiply(&translate, &scale);
    log::info!("model =\n{model}");
    log::info!("det(model) = {}", model.determinant());

    let mut inv = Matrix4::identity();
    let outcome = model.inverse_into(&mut inv);
    log::info!("inverse ({outcome:?}) =\n{inv}");
    log::info!(
        "model * inverse is identity: {}",
        Matrix4::multiply(&model, &inv).is_identity()
    );

    // Collapsing the z axis makes the transform singular
    let mut flat = model;
    flat.set(2, 2, 0.0);
    let outcome = flat.inverse_into(&mut inv);
    log::info!("singular inverse ({outcome:?}) is identity: {}", inv.is_identity());

    let mut axis = Vector3::new(1.0, 1.0, 0.0);
    axis.normalize();
    let up = Vector3::cross(&axis, &Vector3::new(0.0, 0.0, 1.0));
    log::info!("axis = {axis:?}, up = {up:?}");
}
