//! glmath - print the upload-ready matrices for the configured camera
//!
//! Loads `config/` (see [`glmath::config`]), builds the model, view and
//! projection matrices, and prints them in the column-major order a
//! rendering API consumes.

use glmath::config::AppConfig;
use glmath::{Mat4, MatrixUniforms};

fn print_columns(name: &str, columns: &[[f32; 4]; 4]) {
    println!("{} (column-major):", name);
    for (i, col) in columns.iter().enumerate() {
        println!(
            "  col {}: [{:>10.4}, {:>10.4}, {:>10.4}, {:>10.4}]",
            i, col[0], col[1], col[2], col[3]
        );
    }
}

fn main() {
    // Initialize logging
    env_logger::init();
    log::info!("Starting glmath");

    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    let uniforms = config.uniforms().unwrap_or_else(|e| {
        log::warn!("{}. Falling back to identity model transform.", e);
        MatrixUniforms::new(
            &Mat4::IDENTITY,
            &config.camera.view_matrix(),
            &config.projection.projection_matrix(),
        )
    });

    let view = config.camera.view_matrix();
    if view.inverse().is_none() {
        log::warn!("View matrix is singular; check camera.up against camera.at - camera.eye");
    } else {
        log::debug!("View matrix determinant: {}", view.determinant());
    }

    print_columns("model", &uniforms.model);
    print_columns("view", &uniforms.view);
    print_columns("projection", &uniforms.projection);
    println!("{} bytes ready for upload", uniforms.as_bytes().len());
}
