//! Builds the demo scene and prints per-object mesh statistics.
//!
//! Pass surface names to tessellate those instead, e.g.
//! `cargo run --example scene -- torus klein-bottle`.

use paramsurf::geometry::SurfaceKind;
use paramsurf::scene::{ObjectConfig, SceneBuilder, SceneConfig, Transform};
use paramsurf::tessellation::GpuVertex;
use paramsurf::ParamsurfError;

fn main() -> Result<(), ParamsurfError> {
    // Default: WARN for everything, INFO for paramsurf.
    // Override with RUST_LOG env var (e.g. RUST_LOG=paramsurf=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("paramsurf=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let names: Vec<String> = std::env::args().skip(1).collect();
    let config = if names.is_empty() {
        SceneConfig::default()
    } else {
        names.iter().try_fold(SceneConfig::empty(), |config, name| {
            let kind: SurfaceKind = name.parse()?;
            Ok::<_, ParamsurfError>(
                config.with_object(ObjectConfig::new(kind, Transform::default())),
            )
        })?
    };

    let scene = SceneBuilder::new(config).build()?;
    for (i, object) in scene.objects().iter().enumerate() {
        let mesh = &object.mesh;
        let (lo, hi) = mesh.bounds();
        println!(
            "{i:>2} {:<13} strips={:<3} verts/strip={:<3} triangles={:<5} bytes={:<6} bounds=({:.2}, {:.2}, {:.2})..({:.2}, {:.2}, {:.2})",
            object.surface,
            mesh.strip_count(),
            mesh.vertices_per_strip(),
            mesh.triangle_count(),
            mesh.vertex_count() * GpuVertex::STRIDE,
            lo.x,
            lo.y,
            lo.z,
            hi.x,
            hi.y,
            hi.z,
        );
    }
    println!("total vertices: {}", scene.vertex_count());
    Ok(())
}
