//! Persisted-model IO.
//!
//! The fitted model is an opaque bincode artifact. A missing or corrupt file
//! degrades to "no model" plus a diagnostic; the pipeline then skips the
//! forecast instead of crashing.

use {
    crate::{domain::Diagnostics, forecast::ArimaModel},
    anyhow::Result,
    std::{
        fs::File,
        io::{BufReader, BufWriter},
        path::Path,
    },
};

#[derive(Debug, Default)]
pub struct ModelOutcome {
    pub model: Option<ArimaModel>,
    pub diagnostics: Diagnostics,
}

pub fn load_model(path: &Path) -> ModelOutcome {
    let mut diagnostics = Diagnostics::new();
    match read_model(path) {
        Ok(model) => ModelOutcome {
            model: Some(model),
            diagnostics,
        },
        Err(e) => {
            diagnostics.error(format!(
                "Model file '{}' could not be loaded: {e:#}",
                path.display()
            ));
            ModelOutcome {
                model: None,
                diagnostics,
            }
        }
    }
}

fn read_model(path: &Path) -> Result<ArimaModel> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let model = bincode::deserialize_from(reader)?;
    Ok(model)
}

pub fn save_model(path: &Path, model: &ArimaModel) -> Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    bincode::serialize_into(writer, model)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.bin");
        let model = ArimaModel::new(vec![0.4, 0.1], 1, 0.25, vec![10.0, 11.0, 12.5]).unwrap();

        save_model(&path, &model).unwrap();
        let outcome = load_model(&path);

        assert!(outcome.diagnostics.is_empty());
        let loaded = outcome.model.unwrap();
        assert_eq!(loaded.ar, model.ar);
        assert_eq!(loaded.tail, model.tail);
    }

    #[test]
    fn missing_file_degrades_to_no_model() {
        let outcome = load_model(Path::new("no_such_model.bin"));
        assert!(outcome.model.is_none());
        assert!(outcome.diagnostics.has_errors());
    }

    #[test]
    fn corrupt_file_degrades_to_no_model() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.bin");
        std::fs::write(&path, b"definitely not bincode").unwrap();

        let outcome = load_model(&path);
        assert!(outcome.model.is_none());
        assert!(outcome.diagnostics.has_errors());
    }
}
