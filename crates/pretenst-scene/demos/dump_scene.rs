//! Import a fabric file and print the generated collection as JSON
//!
//! Usage: cargo run -p pretenst-scene --example dump_scene -- <fabric.json> [options.ron]

use std::path::PathBuf;

use pretenst_core::ImportOptions;
use pretenst_scene::{ImportSession, PrototypeLibrary, Scene};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pretenst_core=debug,pretenst_scene=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut args = std::env::args().skip(1);
    let Some(fabric_path) = args.next().map(PathBuf::from) else {
        eprintln!("usage: dump_scene <fabric.json> [options.ron]");
        std::process::exit(2);
    };

    let options = match args.next() {
        Some(path) => ImportOptions::load(path)?,
        None => ImportOptions::default(),
    };

    let session = ImportSession::new(PrototypeLibrary::default(), options);
    let mut scene = Scene::new();
    let report = session.import_file(&mut scene, &fabric_path)?;

    tracing::info!(
        "Collection '{}': {} instances",
        report.collection_name,
        report.instances
    );

    if let Some(collection) = scene.get(report.collection_id) {
        println!("{}", serde_json::to_string_pretty(collection)?);
    }

    Ok(())
}
