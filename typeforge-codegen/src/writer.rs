//! Output writing.
//!
//! Serializes finished class models to one destination. Definitions are
//! buffered and flushed in a single write, so a run that fails mid-way
//! produces no partial output.

use crate::error::CodegenError;
use crate::java::Backend;
use crate::model::ClassModel;
use std::io::Write;

/// Writes rendered class definitions to an output destination.
pub struct SourceWriter<W> {
    out: W,
}

impl<W: Write> SourceWriter<W> {
    /// Creates a writer over the given destination.
    #[must_use]
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Renders every model and writes the result atomically.
    ///
    /// One definition per model, separated by a blank line. Must only be
    /// called with the complete model set of a successful run.
    ///
    /// # Errors
    /// Returns `CodegenError::Io` if the destination rejects the write.
    pub fn write_all(
        &mut self,
        models: &[ClassModel],
        backend: &dyn Backend,
    ) -> Result<(), CodegenError> {
        let mut buffer = String::new();
        for model in models {
            buffer.push_str(&backend.render(model));
            buffer.push('\n');
        }

        self.out.write_all(buffer.as_bytes())?;
        self.out.flush()?;

        tracing::debug!("wrote {} generated definitions", models.len());
        Ok(())
    }

    /// Consumes the writer, returning the destination.
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::java::JavaBackend;
    use crate::model::{ClassModelBuilder, ModelKind};

    fn enum_model(name: &str, class_name: &str) -> ClassModel {
        let mut builder = ClassModelBuilder::new(name, class_name, ModelKind::Enum);
        builder.add_constant("A");
        builder.build()
    }

    #[test]
    fn test_write_all_separates_definitions() {
        let models = vec![enum_model("x", "X"), enum_model("y", "Y")];

        let mut writer = SourceWriter::new(Vec::new());
        writer.write_all(&models, &JavaBackend::new()).expect("write");
        let output = String::from_utf8(writer.into_inner()).expect("utf8");

        assert!(output.contains("public enum X {"));
        assert!(output.contains("public enum Y {"));
        assert!(output.contains("}\n\npublic enum Y"));
    }

    #[test]
    fn test_write_all_empty_set() {
        let mut writer = SourceWriter::new(Vec::new());
        writer.write_all(&[], &JavaBackend::new()).expect("write");
        assert!(writer.into_inner().is_empty());
    }
}
