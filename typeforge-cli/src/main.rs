//! Command-line driver: load a base model and a model document, generate
//! class definitions, and write them to stdout.

use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use typeforge_codegen::generate_to_writer;
use typeforge_registry::{RegistryError, TypeRegistry, TypesDocument};

#[derive(Parser, Debug)]
#[command(name = "typeforge", about = "Generate classes from type-definition documents")]
struct Args {
    /// Base model JSON file
    #[arg(long = "base-model")]
    base_model: PathBuf,

    /// Model JSON file
    #[arg(long = "model")]
    model: PathBuf,
}

/// Loads both documents and merges them, base first, into one registry.
///
/// Name collisions across the two documents resolve last-write-wins, so
/// the model document overrides the base model.
fn load_registry(base_model: &Path, model: &Path) -> Result<TypeRegistry, RegistryError> {
    let mut registry = TypeRegistry::new();
    registry.add_document(TypesDocument::from_file(base_model)?);
    registry.add_document(TypesDocument::from_file(model)?);
    Ok(registry)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let registry = match load_registry(&args.base_model, &args.model) {
        Ok(registry) => registry,
        Err(err) => {
            tracing::error!("failed to load type definitions: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = std::io::stdout().lock();
    if let Err(err) = generate_to_writer(&registry, &mut stdout) {
        tracing::error!("generation failed: {err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
